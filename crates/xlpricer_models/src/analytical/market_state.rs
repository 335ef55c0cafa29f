//! Market state classification from priced snapshots.
//!
//! Given a call price, a put price, and the snapshot that produced them,
//! classifies the market by moneyness band and flags put-call-parity
//! violations.

use std::fmt;

use num_traits::Float;

use crate::market::MarketSnapshot;

/// Moneyness band of a snapshot, classified from the ratio S/K.
///
/// Band edges, first match wins:
///
/// | S/K     | Band               |
/// |---------|--------------------|
/// | > 1.05  | `DeepItmCall`      |
/// | > 1.01  | `ItmCall`          |
/// | ≥ 0.99  | `AtTheMoney`       |
/// | ≥ 0.95  | `OtmCall`          |
/// | else    | `DeepItmPut`       |
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::Moneyness;
///
/// let band = Moneyness::classify(110.0_f64, 100.0);
/// assert_eq!(band, Moneyness::DeepItmCall);
/// assert_eq!(band.label(), "Deep ITM Call / OTM Put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moneyness {
    /// S/K > 1.05: the call is deep in the money.
    DeepItmCall,
    /// 1.01 < S/K ≤ 1.05: the call is in the money.
    ItmCall,
    /// 0.99 ≤ S/K ≤ 1.01: at the money.
    AtTheMoney,
    /// 0.95 ≤ S/K < 0.99: the call is out of the money.
    OtmCall,
    /// S/K < 0.95: the put is deep in the money.
    DeepItmPut,
}

impl Moneyness {
    /// Classifies the moneyness band for a spot/strike pair.
    pub fn classify<T: Float>(spot: T, strike: T) -> Self {
        let moneyness = spot / strike;

        if moneyness > T::from(1.05).unwrap() {
            Moneyness::DeepItmCall
        } else if moneyness > T::from(1.01).unwrap() {
            Moneyness::ItmCall
        } else if moneyness >= T::from(0.99).unwrap() {
            Moneyness::AtTheMoney
        } else if moneyness >= T::from(0.95).unwrap() {
            Moneyness::OtmCall
        } else {
            Moneyness::DeepItmPut
        }
    }

    /// Returns the human-readable band label.
    pub fn label(self) -> &'static str {
        match self {
            Moneyness::DeepItmCall => "Deep ITM Call / OTM Put",
            Moneyness::ItmCall => "ITM Call / OTM Put",
            Moneyness::AtTheMoney => "ATM",
            Moneyness::OtmCall => "OTM Call / ITM Put",
            Moneyness::DeepItmPut => "OTM Call / Deep ITM Put",
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified market state: moneyness band plus a parity-violation flag.
///
/// The parity check compares the actual call-put price difference against
/// the theoretical S - K·e^(-rT); a deviation exceeding 1% of spot flags a
/// violation. `Display` renders the band label with the literal suffix
/// `" [Parity Violation]"` when flagged.
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::{BlackScholes, MarketState};
/// use xlpricer_models::market::MarketSnapshot;
///
/// let snapshot = MarketSnapshot::new(100.0_f64, 100.0, 1.0, 0.05, 0.20).unwrap();
/// let bs = BlackScholes::from_snapshot(&snapshot);
/// let call = bs.price_call(snapshot.strike(), snapshot.expiry());
/// let put = bs.price_put(snapshot.strike(), snapshot.expiry());
///
/// let state = MarketState::classify(call, put, &snapshot);
/// assert_eq!(state.to_string(), "ATM");
/// assert!(!state.is_parity_violation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketState {
    moneyness: Moneyness,
    parity_violation: bool,
}

impl MarketState {
    /// Classifies a priced snapshot.
    ///
    /// # Arguments
    /// * `call_price` - Observed or computed call premium
    /// * `put_price` - Observed or computed put premium
    /// * `snapshot` - The snapshot that produced the two premiums
    pub fn classify<T: Float>(
        call_price: T,
        put_price: T,
        snapshot: &MarketSnapshot<T>,
    ) -> Self {
        // Put-call parity: C - P = S - K*e^(-rT)
        let discount = (-snapshot.rate() * snapshot.expiry()).exp();
        let theoretical_diff = snapshot.spot() - snapshot.strike() * discount;
        let actual_diff = call_price - put_price;
        let parity_deviation = (actual_diff - theoretical_diff).abs();

        let moneyness = Moneyness::classify(snapshot.spot(), snapshot.strike());

        // Violation when the deviation exceeds 1% of spot; spot > 0 is
        // guaranteed by snapshot validation
        let threshold = T::from(0.01).unwrap();
        let parity_violation = parity_deviation / snapshot.spot() > threshold;

        Self {
            moneyness,
            parity_violation,
        }
    }

    /// Returns the moneyness band.
    #[inline]
    pub fn moneyness(&self) -> Moneyness {
        self.moneyness
    }

    /// Returns true when put-call parity deviates by more than 1% of spot.
    #[inline]
    pub fn is_parity_violation(&self) -> bool {
        self.parity_violation
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.moneyness.label())?;
        if self.parity_violation {
            f.write_str(" [Parity Violation]")?;
        }
        Ok(())
    }
}
