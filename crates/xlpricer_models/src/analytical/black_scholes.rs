//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Expired options (T ≤ 0) price to their exact intrinsic value.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::market::{MarketSnapshot, OptionKind};

/// Black-Scholes model for European option pricing.
///
/// Holds the per-underlying market parameters; strike and expiry vary per
/// pricing call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Creates a model from a validated market snapshot.
    pub fn from_snapshot(snapshot: &MarketSnapshot<T>) -> Self {
        // Snapshot validation already guarantees S > 0 and σ > 0
        Self {
            spot: snapshot.spot(),
            rate: snapshot.rate(),
            volatility: snapshot.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
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

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values for the
    /// expired-option limit.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();

        // At expiry d1 diverges; saturate by moneyness
        if expiry <= zero {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if expiry <= T::zero() {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// At T ≤ 0 the exact intrinsic value max(S-K, 0) is returned.
    ///
    /// # Examples
    /// ```
    /// use xlpricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!((price - 10.450584).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        // Expired option: intrinsic value
        if expiry <= zero {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// At T ≤ 0 the exact intrinsic value max(K-S, 0) is returned.
    ///
    /// # Examples
    /// ```
    /// use xlpricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    /// assert!((price - 5.573526).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        // Expired option: intrinsic value
        if expiry <= zero {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices an option of the given kind.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }
}

fn validate_strike<T: Float>(strike: T) -> Result<(), AnalyticalError> {
    if strike <= T::zero() {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(0.0),
        });
    }
    Ok(())
}

/// Prices a European call from scalar inputs.
///
/// This is the host-facing surface: five scalars in, one premium out. All
/// inputs are validated here so the host never receives NaN/Inf.
///
/// # Errors
/// - `AnalyticalError::InvalidSpot` if `spot <= 0`
/// - `AnalyticalError::InvalidStrike` if `strike <= 0`
/// - `AnalyticalError::InvalidVolatility` if `volatility <= 0`
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::call_price;
///
/// let price = call_price(100.0_f64, 100.0, 1.0, 0.05, 0.20).unwrap();
/// assert!((price - 10.450584).abs() < 1e-5);
/// ```
pub fn call_price<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
) -> Result<T, AnalyticalError> {
    validate_strike(strike)?;
    let bs = BlackScholes::new(spot, rate, volatility)?;
    Ok(bs.price_call(strike, expiry))
}

/// Prices a European put from scalar inputs.
///
/// # Errors
/// - `AnalyticalError::InvalidSpot` if `spot <= 0`
/// - `AnalyticalError::InvalidStrike` if `strike <= 0`
/// - `AnalyticalError::InvalidVolatility` if `volatility <= 0`
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::put_price;
///
/// let price = put_price(100.0_f64, 100.0, 1.0, 0.05, 0.20).unwrap();
/// assert!((price - 5.573526).abs() < 1e-5);
/// ```
pub fn put_price<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
) -> Result<T, AnalyticalError> {
    validate_strike(strike)?;
    let bs = BlackScholes::new(spot, rate, volatility)?;
    Ok(bs.price_put(strike, expiry))
}
