use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use polygons::raster::DEFAULT_WIDTH;
use polygons::Scene;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod command;
mod report;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "polygons")]
#[command(about = "Create, transform, and draw 2D polygons in the terminal")]
struct Cmd {
    /// Draw width in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Read commands from a file instead of standard input
    #[arg(long)]
    script: Option<PathBuf>,

    /// Echo each command before its output
    #[arg(long)]
    echo: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    let scene = Scene::with_draw_width(cmd.width)?;
    let interactive = cmd.script.is_none() && io::stdin().is_terminal();
    tracing::info!(width = cmd.width, interactive, "start");

    let mut session = Session::new(scene, io::stdout().lock())
        .echo(cmd.echo)
        .prompt(interactive);
    if interactive {
        session.greet()?;
    }
    match &cmd.script {
        Some(path) => session.run_script(path),
        None => session.run(io::stdin().lock()),
    }
}
