//! Market data value types.
//!
//! This module provides the validated inputs the pricing kernel consumes:
//! - [`MarketSnapshot`]: spot, strike, expiry, rate, and volatility
//! - [`OptionKind`]: call or put
//! - [`SnapshotError`]: validation failures

mod error;
mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{MarketSnapshot, OptionKind};
