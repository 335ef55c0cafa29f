//! xlpricer CLI - Command Line Operations for Host Pricing Functions
//!
//! This is the operational entry point for the xlpricer function library.
//!
//! # Commands
//!
//! - `xlpricer price --spot 100 --strike 100 --expiry 1 --rate 0.05 --vol 0.2`
//!   - price a snapshot and classify the market state
//! - `xlpricer invoke xlpricer.BSCall 100 100 1 0.05 0.2`
//!   - dispatch a registered function by its stable external name
//! - `xlpricer list` - enumerate the registered functions
//!
//! # Architecture
//!
//! The service layer orchestrates the pricing kernel (`xlpricer_models`)
//! through the host function registry (`xlpricer_registry`), the same path
//! an external spreadsheet host takes.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// xlpricer host function CLI
#[derive(Parser)]
#[command(name = "xlpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a market snapshot and classify the market state
    Price {
        /// Current spot price (S)
        #[arg(short, long)]
        spot: f64,

        /// Strike price (K)
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years (T)
        #[arg(short = 't', long)]
        expiry: f64,

        /// Risk-free interest rate (r)
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        rate: f64,

        /// Annualised volatility (σ)
        #[arg(long = "vol")]
        volatility: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Invoke a registered host function by name
    Invoke {
        /// Stable external function name (e.g. xlpricer.BSCall)
        name: String,

        /// Scalar arguments, in registration order
        #[arg(allow_hyphen_values = true)]
        args: Vec<f64>,
    },

    /// List the registered host functions
    List,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            format,
        } => commands::price::run(spot, strike, expiry, rate, volatility, &format),
        Commands::Invoke { name, args } => commands::invoke::run(&name, &args),
        Commands::List => commands::list::run(),
    }
}
