//! Price command implementation
//!
//! Prices a market snapshot and classifies the market state.

use serde::Serialize;
use tracing::info;

use xlpricer_models::analytical::{BlackScholes, MarketState};
use xlpricer_models::market::MarketSnapshot;

use crate::{CliError, Result};

/// Priced snapshot report for JSON output.
#[derive(Serialize)]
struct PriceReport {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    call_price: f64,
    put_price: f64,
    market_state: String,
}

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    format: &str,
) -> Result<()> {
    info!("Pricing snapshot...");
    info!("  S = {}, K = {}, T = {}, r = {}, σ = {}", spot, strike, expiry, rate, volatility);

    let snapshot = MarketSnapshot::new(spot, strike, expiry, rate, volatility)?;
    let bs = BlackScholes::from_snapshot(&snapshot);

    let call = bs.price_call(snapshot.strike(), snapshot.expiry());
    let put = bs.price_put(snapshot.strike(), snapshot.expiry());
    let state = MarketState::classify(call, put, &snapshot);

    match format {
        "json" => {
            let report = PriceReport {
                spot,
                strike,
                expiry,
                rate,
                volatility,
                call_price: call,
                put_price: put,
                market_state: state.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("\n┌────────────┬──────────────────────────────┐");
            println!("│ Call       │ {:>28.6} │", call);
            println!("│ Put        │ {:>28.6} │", put);
            println!("│ State      │ {:>28} │", state.to_string());
            println!("└────────────┴──────────────────────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}
