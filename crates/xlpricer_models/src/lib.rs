//! # xlpricer_models: Pricing Kernel
//!
//! Closed-form option pricing for the xlpricer host functions.
//!
//! This crate provides:
//! - Market snapshot types with validation (`market`)
//! - The Abramowitz-Stegun normal CDF approximation (`analytical::distributions`)
//! - The Black-Scholes pricer (`analytical::BlackScholes`)
//! - Moneyness / put-call-parity market state classification
//!   (`analytical::MarketState`)
//!
//! ## Design Principles
//!
//! - **Pure, stateless functions**: every operation is a single synchronous
//!   call over plain numeric values; no shared state, no I/O.
//! - **Generic over `T: Float`** so the kernel works with `f64` and `f32`.
//! - **Fail-fast validation** at construction boundaries with named error
//!   kinds, rather than propagating IEEE-754 NaN/Inf.
//!
//! ## Usage Examples
//!
//! ```rust
//! use xlpricer_models::analytical::{BlackScholes, MarketState};
//! use xlpricer_models::market::MarketSnapshot;
//!
//! let snapshot = MarketSnapshot::new(100.0_f64, 100.0, 1.0, 0.05, 0.20).unwrap();
//! let bs = BlackScholes::new(snapshot.spot(), snapshot.rate(), snapshot.volatility()).unwrap();
//!
//! let call = bs.price_call(snapshot.strike(), snapshot.expiry());
//! let put = bs.price_put(snapshot.strike(), snapshot.expiry());
//! assert!((call - 10.450584).abs() < 1e-5);
//!
//! let state = MarketState::classify(call, put, &snapshot);
//! assert_eq!(state.to_string(), "ATM");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod market;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
