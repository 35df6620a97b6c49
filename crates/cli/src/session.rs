//! Console session: reads command lines, validates them, and drives a `Scene`.
//!
//! User mistakes (unknown commands, bad numbers, missing polygons) are
//! reported as `Invalid input: ...` and the session continues. Only I/O
//! failures end it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use polygons::raster::RasterCfg;
use polygons::shape::MIN_VERTICES;
use polygons::{rasterize, RasterError, Scene, SceneError, Shape, Vector};

use crate::command::{Command, Line, ShapeArgs, Target};
use crate::report;

/// Why a command was not carried out.
#[derive(Debug)]
pub struct Rejected(String);

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SceneError> for Rejected {
    fn from(e: SceneError) -> Self {
        Self(e.to_string())
    }
}

impl From<RasterError> for Rejected {
    fn from(e: RasterError) -> Self {
        Self(e.to_string())
    }
}

#[derive(Debug, PartialEq)]
pub enum Flow {
    Continue,
    Finish,
}

enum Outcome {
    Print(String),
    Finish,
}

/// Largest vertex count `add ngon` accepts.
const MAX_NGON_VERTICES: usize = 1000;

fn positive(what: &str, value: f64) -> Result<f64, Rejected> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Rejected(format!("{what} must be a positive number")))
    }
}

fn finite(what: &str, value: f64) -> Result<f64, Rejected> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Rejected(format!("{what} must be a finite number")))
    }
}

pub struct Session<W: Write> {
    scene: Scene,
    out: W,
    echo: bool,
    prompt: bool,
}

impl<W: Write> Session<W> {
    pub fn new(scene: Scene, out: W) -> Self {
        Self {
            scene,
            out,
            echo: false,
            prompt: false,
        }
    }

    /// Repeat each command line before its output.
    pub fn echo(mut self, on: bool) -> Self {
        self.echo = on;
        self
    }

    /// Print a `>` prompt before reading each line, plus greeting and farewell.
    pub fn prompt(mut self, on: bool) -> Self {
        self.prompt = on;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn greet(&mut self) -> Result<()> {
        writeln!(self.out, "Polygons {}", polygons::VERSION)?;
        writeln!(
            self.out,
            "Enter 'help' for the list of commands, 'finish' to quit."
        )?;
        Ok(())
    }

    /// Process lines until `finish` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("reading command")?;
            if self.handle_line(&line)? == Flow::Finish {
                break;
            }
        }
        if self.prompt {
            writeln!(self.out)?;
            writeln!(self.out, "Thank you for using Polygons.")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        tracing::info!(path = %path.display(), "replaying script");
        let file =
            File::open(path).with_context(|| format!("opening script {}", path.display()))?;
        self.run(BufReader::new(file))
    }

    /// Execute one line and print its result.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        if self.echo {
            writeln!(self.out, "> {line}")?;
        }
        let command = match Line::parse_line(line) {
            Ok(command) => command,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                write!(self.out, "{e}")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                let reason = e.to_string();
                let reason = reason.lines().next().unwrap_or_default();
                let reason = reason.trim_start_matches("error: ");
                writeln!(self.out, "Invalid input: {reason}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?command, "execute");
        match self.execute(command) {
            Ok(Outcome::Print(text)) => {
                write!(self.out, "{text}")?;
                if !text.is_empty() && !text.ends_with('\n') {
                    writeln!(self.out)?;
                }
                Ok(Flow::Continue)
            }
            Ok(Outcome::Finish) => Ok(Flow::Finish),
            Err(rejected) => {
                tracing::debug!(%rejected, "rejected");
                writeln!(self.out, "Invalid input: {rejected}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn name_of(&self, index: usize) -> Result<String, Rejected> {
        Ok(self.scene.get(index)?.name().to_lowercase())
    }

    fn execute(&mut self, command: Command) -> Result<Outcome, Rejected> {
        let text = match command {
            Command::Add { shape } => self.add(shape)?,
            Command::Remove { index } => {
                let removed = self.scene.remove(index)?;
                format!("{} removed.", removed.name())
            }
            Command::List { vertices, json } => {
                if json {
                    report::scene_json(&self.scene).map_err(|e| Rejected(e.to_string()))?
                } else if self.scene.is_empty() {
                    "There are no polygons.".to_string()
                } else if vertices {
                    self.scene.list_info()
                } else {
                    self.scene.list_shapes()
                }
            }
            Command::Move { target, x, y } => {
                let r = Vector::new(finite("x", x)?, finite("y", y)?);
                match target {
                    Target::All => {
                        self.scene.translate_all(r);
                        format!("Translated all polygons by vector {r}.")
                    }
                    Target::One(i) => {
                        self.scene.translate(i, r)?;
                        format!("Translated {} by vector {r}.", self.name_of(i)?)
                    }
                }
            }
            Command::Rotate { target, degrees } => {
                let angle = finite("angle", degrees)?.to_radians();
                match target {
                    Target::All => {
                        self.scene.rotate_all(angle);
                        format!("Rotated all polygons by {degrees} degrees.")
                    }
                    Target::One(i) => {
                        self.scene.rotate(i, angle)?;
                        format!("Rotated {} by angle {degrees} degrees.", self.name_of(i)?)
                    }
                }
            }
            Command::Rescale { target, x, y } => {
                let (x, y) = (finite("x factor", x)?, finite("y factor", y)?);
                match target {
                    Target::All => {
                        self.scene.rescale_all(x, y);
                        format!("Rescaled all polygons by factors x:{x} and y:{y}.")
                    }
                    Target::One(i) => {
                        self.scene.rescale(i, x, y)?;
                        format!(
                            "Rescaled {} by factors x:{x} and y:{y}.",
                            self.name_of(i)?
                        )
                    }
                }
            }
            Command::Centre => {
                self.scene.centre_all();
                "Polygons centred.".to_string()
            }
            Command::Area { index } => {
                let p = self.scene.get(index)?;
                format!("Area of the {} is {}.", p.name(), p.area())
            }
            Command::Draw { width: None } => self.scene.draw()?.to_string(),
            Command::Draw { width: Some(w) } => {
                rasterize(self.scene.polygons(), &RasterCfg::with_width(w))?.to_string()
            }
            Command::Width { width } => {
                self.scene.set_draw_width(width)?;
                format!("Draw width set to {width}.")
            }
            Command::Finish => return Ok(Outcome::Finish),
        };
        Ok(Outcome::Print(text))
    }

    fn add(&mut self, shape: ShapeArgs) -> Result<String, Rejected> {
        let text = match shape {
            ShapeArgs::Isosceles { base, height } => {
                let (b, h) = (positive("base", base)?, positive("height", height)?);
                self.scene.add_isosceles(b, h)?;
                format!("Isosceles of base {b} and height {h} added.")
            }
            ShapeArgs::Rectangle { width, height } => {
                let (w, h) = (positive("width", width)?, positive("height", height)?);
                self.scene.add_rectangle(w, h)?;
                format!("Rectangle of width {w} and height {h} added.")
            }
            ShapeArgs::Pentagon { radius } => {
                let r = positive("circumradius", radius)?;
                self.scene.add_pentagon(r)?;
                format!("Pentagon of circumradius {r} added.")
            }
            ShapeArgs::Hexagon { radius } => {
                let r = positive("circumradius", radius)?;
                self.scene.add_hexagon(r)?;
                format!("Hexagon of circumradius {r} added.")
            }
            ShapeArgs::Ngon { n, radius } => {
                if !(MIN_VERTICES..=MAX_NGON_VERTICES).contains(&n) {
                    return Err(Rejected(format!(
                        "vertex count must be between {MIN_VERTICES} and {MAX_NGON_VERTICES}"
                    )));
                }
                let r = positive("circumradius", radius)?;
                self.scene.add_ngon(n, r)?;
                format!("{n}-gon of circumradius {r} added.")
            }
        };
        Ok(text)
    }
}
