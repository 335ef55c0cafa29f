//! Analytical pricing formulas.
//!
//! This module provides:
//! - [`distributions`]: standard normal CDF/PDF approximations
//! - [`BlackScholes`]: closed-form European option pricing
//! - [`MarketState`] / [`Moneyness`]: market state classification
//! - [`AnalyticalError`]: analytical pricing errors
//!
//! All formulas are generic over `T: Float`.

mod black_scholes;
pub mod distributions;
mod error;
mod market_state;

pub use black_scholes::{call_price, put_price, BlackScholes};
pub use error::AnalyticalError;
pub use market_state::{MarketState, Moneyness};
