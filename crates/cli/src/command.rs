//! Console command grammar: one command per line, parsed with clap.

use std::str::FromStr;

use clap::{Parser, Subcommand};

/// A single console line.
#[derive(Parser, Debug)]
#[command(
    name = "polygons",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}\nAngles are in degrees. Polygons are numbered from 1."
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

impl Line {
    /// Parse a whitespace-separated command line.
    pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
        Line::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }
}

/// Which polygons a transform applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    All,
    One(usize),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Target::All);
        }
        s.parse::<usize>()
            .map(Target::One)
            .map_err(|_| format!("expected a polygon number or 'all', got '{s}'"))
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Add a polygon
    Add {
        #[command(subcommand)]
        shape: ShapeArgs,
    },
    /// Remove a polygon
    Remove { index: usize },
    /// List the polygons
    List {
        /// Include the vertex list of every polygon
        #[arg(long)]
        vertices: bool,
        /// Print the scene as JSON
        #[arg(long)]
        json: bool,
    },
    /// Translate a polygon (or all) by a vector
    Move {
        target: Target,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Rotate a polygon about its centre, or all polygons about the origin
    Rotate {
        target: Target,
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Rescale a polygon (or all) by factors in x and y
    Rescale {
        target: Target,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Centre all the polygons collectively
    #[command(alias = "center")]
    Centre,
    /// Print the area of a polygon
    Area { index: usize },
    /// Draw the polygons
    Draw {
        /// Width for this drawing only
        #[arg(long)]
        width: Option<usize>,
    },
    /// Set the draw width in characters
    Width { width: usize },
    /// End the session
    #[command(aliases = ["quit", "exit"])]
    Finish,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShapeArgs {
    /// Isosceles triangle: base width and height
    Isosceles {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Rectangle: width and height
    Rectangle {
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Regular pentagon: circumradius
    Pentagon {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Regular hexagon: circumradius
    Hexagon {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Regular n-gon: vertex count and circumradius
    Ngon {
        n: usize,
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_transforms_with_negative_numbers() {
        assert_eq!(
            Line::parse_line("move all -3.5 2.8").unwrap(),
            Command::Move {
                target: Target::All,
                x: -3.5,
                y: 2.8
            }
        );
        assert_eq!(
            Line::parse_line("rotate 2 -45").unwrap(),
            Command::Rotate {
                target: Target::One(2),
                degrees: -45.0
            }
        );
        assert_eq!(
            Line::parse_line("  rescale   1 2 0.5 ").unwrap(),
            Command::Rescale {
                target: Target::One(1),
                x: 2.0,
                y: 0.5
            }
        );
    }

    #[test]
    fn parses_shapes() {
        assert_eq!(
            Line::parse_line("add ngon 7 2").unwrap(),
            Command::Add {
                shape: ShapeArgs::Ngon { n: 7, radius: 2.0 }
            }
        );
        assert_eq!(
            Line::parse_line("add rectangle 3 -4").unwrap(),
            Command::Add {
                shape: ShapeArgs::Rectangle {
                    width: 3.0,
                    height: -4.0
                }
            }
        );
    }

    #[test]
    fn aliases_and_flags() {
        assert_eq!(Line::parse_line("quit").unwrap(), Command::Finish);
        assert_eq!(Line::parse_line("center").unwrap(), Command::Centre);
        assert_eq!(
            Line::parse_line("list --vertices").unwrap(),
            Command::List {
                vertices: true,
                json: false
            }
        );
        assert_eq!(
            Line::parse_line("draw --width 41").unwrap(),
            Command::Draw { width: Some(41) }
        );
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(Line::parse_line("explode").is_err());
        assert!(Line::parse_line("move one 1 2").is_err());
        assert!(Line::parse_line("add ngon 5").is_err());
        let help = Line::parse_line("help").unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert!(help.to_string().contains("rescale"));
    }
}
