//! Error types for market data construction.

use thiserror::Error;

/// Market snapshot validation errors.
///
/// Each variant carries the offending value so the caller can report it
/// back to the host verbatim.
///
/// # Examples
/// ```
/// use xlpricer_models::market::SnapshotError;
///
/// let err = SnapshotError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("strike"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SnapshotError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry (negative).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Unrecognised option kind string.
    #[error("Unknown option kind: {kind} (expected \"call\" or \"put\")")]
    UnknownOptionKind {
        /// The unrecognised input
        kind: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = SnapshotError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = SnapshotError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = SnapshotError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = SnapshotError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_unknown_option_kind_display() {
        let err = SnapshotError::UnknownOptionKind {
            kind: "straddle".to_string(),
        };
        assert!(format!("{}", err).contains("straddle"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SnapshotError::InvalidSpot { spot: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SnapshotError::InvalidVolatility { volatility: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
