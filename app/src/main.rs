// In app/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

mod host;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Evaluates allocation strategies over daily OHLCV data.")]
struct Cli {
    /// Directory holding `base.toml` and the per-environment overrides.
    #[arg(long, global = true, default_value = "config")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the configured strategies once over a JSON data bundle.
    Evaluate {
        /// Path to the bundle, e.g. `{"ohlcv": {"AAPL": [...]}}`.
        #[arg(short, long)]
        data: PathBuf,

        /// Only run the strategy configured under this name.
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Prints the assets and data interval each configured strategy requires.
    Assets,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings_from(&cli.config_dir)?;
    init_tracing(&settings.app.log_level)?;
    tracing::info!(environment = %settings.app.environment, "Application settings loaded successfully.");

    match cli.command {
        Commands::Evaluate { data, strategy } => {
            let selected = host::select(&settings.strategies, strategy.as_deref())?;
            let bundle = host::load_bundle(&data)?;
            let reports = host::evaluate(&selected, &bundle)?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        Commands::Assets => {
            let selected = host::select(&settings.strategies, None)?;
            let listings = host::list_assets(&selected)?;
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(log_level: &str) -> Result<()> {
    let level: LevelFilter = log_level.parse()?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
    Ok(())
}
