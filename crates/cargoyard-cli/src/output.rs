//! Output formatting for shell results.
//!
//! Every executed command produces one or more [`Outcome`] values which are
//! rendered either as human-friendly text or as one JSON object per line.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use cargoyard_lib::{ContainerSummary, Error, HazardNotice, Location, ShipSummary, YardSnapshot};

use crate::terminal::{supports_unicode, ColorPalette};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, colored when the terminal allows it.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Broad failure classes reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Overfill,
    Capacity,
    NotFound,
    Invalid,
    Usage,
}

impl From<&Error> for ErrorCategory {
    fn from(error: &Error) -> Self {
        if error.is_capacity() {
            ErrorCategory::Capacity
        } else if error.is_not_found() {
            ErrorCategory::NotFound
        } else if matches!(error, Error::Overfill { .. }) {
            ErrorCategory::Overfill
        } else {
            ErrorCategory::Invalid
        }
    }
}

/// Result of a single shell command, ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Message {
        text: String,
    },
    Ships {
        ships: Vec<ShipSummary>,
    },
    Ship {
        ship: ShipSummary,
    },
    Containers {
        containers: Vec<ContainerSummary>,
    },
    Container {
        container: ContainerSummary,
        #[serde(flatten)]
        location: Location,
    },
    Status {
        #[serde(flatten)]
        snapshot: YardSnapshot,
    },
    Hazard {
        #[serde(flatten)]
        notice: HazardNotice,
    },
    Error {
        category: ErrorCategory,
        message: String,
    },
}

impl Outcome {
    pub fn message(text: impl Into<String>) -> Self {
        Outcome::Message { text: text.into() }
    }

    pub fn error(error: &Error) -> Self {
        Outcome::Error {
            category: error.into(),
            message: error.to_string(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Outcome::Error {
            category: ErrorCategory::Usage,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

/// Renders outcomes in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    palette: ColorPalette,
}

impl Renderer {
    pub fn new(format: OutputFormat, palette: ColorPalette) -> Self {
        let palette = match format {
            OutputFormat::Text => palette,
            OutputFormat::Json => ColorPalette::plain(),
        };
        Self { format, palette }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render<W: Write>(&self, outcome: &Outcome, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, outcome)?;
                writeln!(out)
            }
            OutputFormat::Text => self.render_text(outcome, out),
        }
    }

    fn render_text<W: Write>(&self, outcome: &Outcome, out: &mut W) -> io::Result<()> {
        let p = &self.palette;
        match outcome {
            Outcome::Message { text } => writeln!(out, "{}ok{} {}", p.green, p.reset, text),
            Outcome::Ships { ships } => {
                if ships.is_empty() {
                    return writeln!(out, "No ships in the yard.");
                }
                writeln!(out, "{}Ships ({}):{}", p.white_bold, ships.len(), p.reset)?;
                for ship in ships {
                    writeln!(out, "  {}", ship.description)?;
                }
                Ok(())
            }
            Outcome::Ship { ship } => write!(out, "{}", ship.render_text()),
            Outcome::Containers { containers } => {
                writeln!(
                    out,
                    "{}Unassigned containers ({}):{}",
                    p.white_bold,
                    containers.len(),
                    p.reset
                )?;
                for container in containers {
                    writeln!(out, "  - {}", container.description)?;
                }
                Ok(())
            }
            Outcome::Container {
                container,
                location,
            } => {
                let place = match location {
                    Location::Unassigned => "unassigned".to_string(),
                    Location::Aboard { ship } => format!("aboard {ship}"),
                };
                writeln!(
                    out,
                    "{} {}({place}){}",
                    container.description, p.gray, p.reset
                )
            }
            Outcome::Status { snapshot } => write!(out, "{}", snapshot.render_text()),
            Outcome::Hazard { notice } => {
                writeln!(out, "{}HAZARD{} {}", p.orange, p.reset, notice.message)
            }
            Outcome::Error { message, .. } => {
                writeln!(out, "{}error:{} {}", p.red, p.reset, message)
            }
        }
    }
}

/// Print the shell banner.
///
/// Uses box-drawing characters when the terminal advertises UTF support.
pub fn print_logo<W: Write>(out: &mut W, palette: &ColorPalette) -> io::Result<()> {
    let (cyan, white, reset) = (palette.cyan, palette.white_bold, palette.reset);
    if supports_unicode() {
        writeln!(
            out,
            "{cyan}╭──────────────────────────────╮{reset}
{cyan}│{white}   C A R G O   Y A R D        {cyan}│{reset}
{cyan}╰──────────────────────────────╯{reset}"
        )
    } else {
        writeln!(
            out,
            "{cyan}+------------------------------+
|  CARGO YARD                  |
+------------------------------+{reset}"
        )
    }
}
