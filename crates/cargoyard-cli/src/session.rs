//! Line-oriented shell session.
//!
//! A [`Session`] owns the yard and feeds it one parsed line at a time. Hazard
//! notices raised while a command runs are collected by the yard's
//! [`RecordingHazardNotifier`] and rendered right after that command, ahead of
//! its result. Library errors never end the session.

use std::io::{self, BufRead, Write};

use clap::error::ErrorKind;
use tracing::debug;

use cargoyard_lib::{
    FleetRoster, RecordingHazardNotifier, Result as YardResult, Yard, YardSnapshot,
};

use crate::commands::container::handle_container;
use crate::commands::ship::handle_ship;
use crate::commands::{parse_line, ParseError, ShellCommand};
use crate::output::{OutputFormat, Outcome, Renderer};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that parsed into a command (including failed ones).
    pub commands: usize,
    /// Lines that produced an error, parse errors included.
    pub errors: usize,
    /// Hazard notices raised during the session.
    pub hazards: usize,
}

pub struct Session {
    yard: Yard<RecordingHazardNotifier>,
    renderer: Renderer,
    prompt: Option<String>,
}

impl Session {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            yard: Yard::with_notifier(RecordingHazardNotifier::new()),
            renderer,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Seed the yard with every ship in `roster`.
    pub fn add_roster(&mut self, roster: FleetRoster) -> YardResult<()> {
        self.yard.add_roster(roster)
    }

    pub fn yard(&self) -> &Yard<RecordingHazardNotifier> {
        &self.yard
    }

    /// Read commands until end of input or `quit`.
    ///
    /// In text mode errors go to `err`; in JSON mode every outcome is written
    /// to `out` so the stream stays machine-readable.
    pub fn run<R, O, E>(&mut self, input: R, out: &mut O, err: &mut E) -> io::Result<RunSummary>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute_line(&line?, &mut summary, out, err)? == Flow::Quit {
                break;
            }
        }

        debug!(
            commands = summary.commands,
            errors = summary.errors,
            hazards = summary.hazards,
            "session finished"
        );
        Ok(summary)
    }

    /// Parse and run a single line, rendering everything it produced.
    pub fn execute_line<O, E>(
        &mut self,
        line: &str,
        summary: &mut RunSummary,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<Flow>
    where
        O: Write,
        E: Write,
    {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(ParseError::Clap(error))
                if matches!(
                    error.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                self.emit_help(&error.render().to_string(), out)?;
                return Ok(Flow::Continue);
            }
            Err(error) => {
                summary.errors += 1;
                self.emit(&Outcome::usage(usage_message(&error)), out, err)?;
                return Ok(Flow::Continue);
            }
        };

        summary.commands += 1;
        let result = self.dispatch(command);
        for notice in self.yard.notifier_mut().drain() {
            summary.hazards += 1;
            self.emit(&Outcome::Hazard { notice }, out, err)?;
        }
        let outcome = match result {
            Ok(Some(outcome)) => outcome,
            Ok(None) => return Ok(Flow::Quit),
            Err(error) => {
                summary.errors += 1;
                Outcome::error(&error)
            }
        };
        self.emit(&outcome, out, err)?;
        Ok(Flow::Continue)
    }

    /// Run one command. `Ok(None)` means the session should end.
    fn dispatch(&mut self, command: ShellCommand) -> YardResult<Option<Outcome>> {
        debug!(?command, "executing");
        let outcome = match command {
            ShellCommand::Ship(command) => handle_ship(&mut self.yard, command)?,
            ShellCommand::Container(command) => handle_container(&mut self.yard, command)?,
            ShellCommand::Load { serial, ship } => {
                self.yard.load_onto_ship(&serial, &ship)?;
                Outcome::message(format!("loaded {serial} onto {ship}"))
            }
            ShellCommand::Remove { ship, serial } => {
                self.yard.remove_from_ship(&ship, &serial)?;
                Outcome::message(format!("removed {serial} from {ship}; now unassigned"))
            }
            ShellCommand::Transfer { serial, from, to } => {
                self.yard.transfer(&from, &to, &serial)?;
                Outcome::message(format!("transferred {serial} from {from} to {to}"))
            }
            ShellCommand::Status => Outcome::Status {
                snapshot: YardSnapshot::capture(&self.yard),
            },
            ShellCommand::Quit => return Ok(None),
        };
        Ok(Some(outcome))
    }

    fn emit<O: Write, E: Write>(
        &self,
        outcome: &Outcome,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        if outcome.is_error() && self.renderer.format() == OutputFormat::Text {
            self.renderer.render(outcome, err)
        } else {
            self.renderer.render(outcome, out)
        }
    }

    fn emit_help<O: Write>(&self, help: &str, out: &mut O) -> io::Result<()> {
        match self.renderer.format() {
            OutputFormat::Text => write!(out, "{help}"),
            OutputFormat::Json => self.renderer.render(&Outcome::message(help.trim_end()), out),
        }
    }
}

/// First meaningful line of a parse failure, without clap's `error:` prefix.
fn usage_message(error: &ParseError) -> String {
    let rendered = error.to_string();
    let first = rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
