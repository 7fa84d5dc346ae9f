use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cargoyard_cli::output::{print_logo, OutputFormat, Renderer};
use cargoyard_cli::session::Session;
use cargoyard_cli::terminal::ColorPalette;
use cargoyard_lib::FleetRoster;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive cargo yard shell")]
struct Cli {
    /// Read commands from a file instead of standard input.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seed the yard with ships from a CSV fleet roster.
    #[arg(long, env = "CARGOYARD_FLEET")]
    fleet: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the banner.
    #[arg(long)]
    no_logo: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = ColorPalette::detect();
    let renderer = Renderer::new(cli.format, palette);
    let interactive = cli.script.is_none() && io::stdin().is_terminal();

    let mut session = Session::new(renderer);
    if interactive && cli.format == OutputFormat::Text {
        session = session.with_prompt("cargoyard> ");
    }

    if let Some(path) = &cli.fleet {
        let roster = FleetRoster::from_path(path)
            .with_context(|| format!("failed to load fleet roster from {}", path.display()))?;
        session
            .add_roster(roster)
            .with_context(|| format!("failed to register ships from {}", path.display()))?;
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if !cli.no_logo && cli.format == OutputFormat::Text {
        print_logo(&mut out, &palette)?;
    }

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out, &mut err)?
        }
        None => session.run(io::stdin().lock(), &mut out, &mut err)?,
    };

    info!(
        commands = summary.commands,
        errors = summary.errors,
        hazards = summary.hazards,
        "shell closed"
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
