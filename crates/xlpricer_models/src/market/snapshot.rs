//! Market snapshot parameters.
//!
//! A snapshot carries the five scalars a single pricing call consumes,
//! validated once at construction.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SnapshotError;

/// Option kind: call or put.
///
/// # Examples
/// ```
/// use xlpricer_models::market::OptionKind;
///
/// let kind: OptionKind = "call".parse().unwrap();
/// assert!(kind.is_call());
/// assert_eq!(kind.to_string(), "call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Returns true for [`OptionKind::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(SnapshotError::UnknownOptionKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A priced market snapshot: spot, strike, expiry, rate, and volatility.
///
/// Validation ensures spot, strike, and volatility are positive and expiry
/// is non-negative (zero expiry is a valid, expired option). Rates may be
/// negative.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use xlpricer_models::market::MarketSnapshot;
///
/// let snapshot = MarketSnapshot::new(100.0_f64, 105.0, 0.5, 0.03, 0.25).unwrap();
/// assert_eq!(snapshot.spot(), 100.0);
/// assert_eq!(snapshot.strike(), 105.0);
///
/// // Expired snapshot is valid
/// assert!(MarketSnapshot::new(100.0_f64, 105.0, 0.0, 0.03, 0.25).is_ok());
///
/// // Non-positive strike is not
/// assert!(MarketSnapshot::new(100.0_f64, 0.0, 0.5, 0.03, 0.25).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSnapshot<T>"))]
pub struct MarketSnapshot<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

/// Unvalidated wire form of [`MarketSnapshot`]. Deserialisation funnels
/// through [`MarketSnapshot::new`] so invalid payloads are rejected with
/// the same errors as direct construction.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSnapshot<T> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawSnapshot<T>> for MarketSnapshot<T> {
    type Error = SnapshotError;

    fn try_from(raw: RawSnapshot<T>) -> Result<Self, Self::Error> {
        MarketSnapshot::new(raw.spot, raw.strike, raw.expiry, raw.rate, raw.volatility)
    }
}

impl<T: Float> MarketSnapshot<T> {
    /// Creates a new market snapshot with validation.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `rate` - Risk-free interest rate (annualised; may be negative)
    /// * `volatility` - Volatility (annualised, must be positive)
    ///
    /// # Errors
    /// - `SnapshotError::InvalidSpot` if spot <= 0
    /// - `SnapshotError::InvalidStrike` if strike <= 0
    /// - `SnapshotError::InvalidExpiry` if expiry < 0
    /// - `SnapshotError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, SnapshotError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(SnapshotError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(SnapshotError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry < zero {
            return Err(SnapshotError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(SnapshotError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the moneyness ratio S/K.
    #[inline]
    pub fn moneyness(&self) -> T {
        self.spot / self.strike
    }

    /// Returns true if the option has expired (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry <= T::zero()
    }
}
