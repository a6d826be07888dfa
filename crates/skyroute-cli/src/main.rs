use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_lib::{run_simulation, RenderMode, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about = "Skyroute drone flight planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a flight scenario and print the minimum-time result.
    Solve {
        /// Scenario file; reads stdin when omitted.
        input: Option<PathBuf>,
        /// Output encoding.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Validate a scenario without solving it.
    Check {
        /// Scenario file; reads stdin when omitted.
        input: Option<PathBuf>,
    },
}

/// Output encodings supported by `solve`.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Json,
    Text,
}

impl From<Format> for RenderMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => RenderMode::Json,
            Format::Text => RenderMode::PlainText,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input, format } => handle_solve(input.as_deref(), format),
        Command::Check { input } => handle_check(input.as_deref()),
    }
}

fn handle_solve(input: Option<&Path>, format: Format) -> Result<()> {
    let text = read_scenario(input)?;
    let result = run_simulation(&text).context("failed to run the flight simulation")?;
    let rendered = result
        .render(format.into())
        .context("failed to encode the simulation result")?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn handle_check(input: Option<&Path>) -> Result<()> {
    let text = read_scenario(input)?;
    let scenario = Scenario::parse(&text).context("scenario is invalid")?;
    println!(
        "OK: {}x{} grid, battery capacity {}, charge amount {}, {} charging stations",
        scenario.grid.rows(),
        scenario.grid.cols(),
        scenario.battery_capacity,
        scenario.charge_amount,
        scenario.stations.len()
    );
    Ok(())
}

/// Read the whole scenario in a single pass from a file or stdin.
fn read_scenario(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario from {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read scenario from stdin")?;
            Ok(buffer)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
