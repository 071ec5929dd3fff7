//! Farmdash - Command Line Interface
//!
//! This is the main entry point for the farmer's dashboard.
//! Run with `--help` to see all available options.

use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use farmdash::{
    display::{display_catalog, display_forecast_report, display_profit_report},
    export::{write_forecast_csv, write_profit_csv},
    forecast::forecast,
    models::REGIONS,
    profit::estimate,
    source::RngSource,
};

/// Command-line arguments for Farmdash.
#[derive(Parser, Debug)]
#[command(name = "farmdash")]
#[command(author, version, about = "Decide what to plant and when to sell for maximum profit", long_about = None)]
struct Args {
    /// Seed for reproducible output (random when omitted)
    #[arg(long, global = true, env = "FARMDASH_SEED")]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// What to plant: rank crops by predicted profit
    Plant {
        /// Region or district
        #[arg(short, long, default_value = REGIONS[0])]
        region: String,

        /// Planting season (Kharif, Rabi or Summer)
        #[arg(short, long, default_value = "Kharif")]
        season: String,
    },

    /// When to sell: forecast prices and recommend store or sell
    Sell {
        /// Harvested crop
        #[arg(short, long, default_value = "Onion")]
        crop: String,

        /// Storage duration in weeks (0-12)
        #[arg(short = 'w', long, default_value = "0")]
        storage_weeks: u32,

        /// Current market price in rupees per kg
        #[arg(short = 'p', long, default_value = "20")]
        current_price: f64,
    },

    /// List the crops, seasons and regions on offer
    Catalog,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reports go to stdout, logs to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "farmdash=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut source = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    match args.command {
        Command::Plant { region, season } => {
            let report = estimate(&region, &season, &mut source)?;
            match args.format {
                OutputFormat::Text => display_profit_report(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Csv => write_profit_csv(&report, io::stdout())?,
            }
        }
        Command::Sell {
            crop,
            storage_weeks,
            current_price,
        } => {
            let report = forecast(&crop, current_price, storage_weeks, &mut source)?;
            match args.format {
                OutputFormat::Text => display_forecast_report(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Csv => write_forecast_csv(&report, io::stdout())?,
            }
        }
        Command::Catalog => match args.format {
            OutputFormat::Json => println!("{}", farmdash::wasm::get_catalog()),
            _ => display_catalog(),
        },
    }

    Ok(())
}
