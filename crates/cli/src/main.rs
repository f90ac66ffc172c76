//! Pricetag CLI - Format prices under regional tax and display rules.
//!
//! # Usage
//!
//! ```bash
//! # Tax-free price
//! pricetag format 100
//!
//! # Tax-included price, without currency
//! pricetag format 100 --view tax-included --hide-currency
//!
//! # Amount that already includes tax
//! pricetag format 120 --tax-included --view all
//!
//! # List supported regions
//! pricetag regions
//! ```
//!
//! # Commands
//!
//! - `format` - Format an amount
//! - `regions` - List supported regions
//!
//! Defaults are read from the environment, see [`config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "pricetag")]
#[command(author, version, about = "Pricetag price formatting tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an amount
    Format(commands::format::FormatArgs),
    /// List supported regions
    Regions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Load .env before reading logging configuration
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so formatted prices stay alone on stdout.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    let json = config::json_logs();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Format(args) => {
            let config = CliConfig::from_env()?;
            commands::format::run(&args, &config)?;
        }
        Commands::Regions { json } => commands::regions::run(json)?,
    }
    Ok(())
}
