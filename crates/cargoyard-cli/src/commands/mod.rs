// Shell command grammar.
//
// Each input line is tokenized and parsed with clap as if it were a command
// line without a binary name. The ship and container modules hold the
// subcommand groups and their handlers; movement commands live here.

pub mod container;
pub mod ship;

use clap::{Parser, Subcommand};

pub use container::ContainerCommand;
pub use ship::ShipCommand;

/// One line of shell input.
#[derive(Parser, Debug, PartialEq)]
#[command(
    no_binary_name = true,
    name = "cargoyard",
    about = "Cargo yard shell commands",
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Create, delete, and inspect ships.
    #[command(subcommand)]
    Ship(ShipCommand),
    /// Create containers and load or unload their cargo.
    #[command(subcommand)]
    Container(ContainerCommand),
    /// Move an unassigned container onto a ship.
    Load {
        /// Container serial number (e.g. KON-L-1).
        serial: String,
        /// Destination ship name.
        ship: String,
    },
    /// Take a container off a ship and return it to the unassigned pool.
    Remove {
        /// Ship currently carrying the container.
        ship: String,
        /// Container serial number.
        serial: String,
    },
    /// Move a container directly from one ship to another.
    Transfer {
        /// Container serial number.
        serial: String,
        /// Ship currently carrying the container.
        #[arg(long = "from")]
        from: String,
        /// Destination ship.
        #[arg(long = "to")]
        to: String,
    },
    /// Show every ship and the unassigned pool.
    Status,
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

/// Parse a raw input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    ShellLine::try_parse_from(tokens)
        .map(|parsed| Some(parsed.command))
        .map_err(ParseError::Clap)
}

/// Failure to turn an input line into a command.
#[derive(Debug)]
pub enum ParseError {
    /// A double quote was opened but never closed.
    UnterminatedQuote,
    /// clap rejected the tokens (this includes `help` requests).
    Clap(clap::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnterminatedQuote => f.write_str("unterminated quote in input"),
            ParseError::Clap(err) => write!(f, "{}", err.render()),
        }
    }
}

impl std::error::Error for ParseError {}

/// Split a line on whitespace, keeping double-quoted sections together so
/// ship names like "Ever Given" survive as one argument.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}
