//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` to support both `f64` and `f32`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Rational coefficient of the Abramowitz and Stegun approximation.
const AS_P: f64 = 0.231_641_9;

/// Polynomial coefficients of the Abramowitz and Stegun approximation
/// (formula 26.2.17), lowest order first.
const AS_COEFFS: [f64; 5] = [
    0.319_381_53,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the Abramowitz and Stegun
/// rational approximation (formula 26.2.17): a degree-5 polynomial in
/// t = 1/(1 + 0.2316419·|x|) weighted by the normal density, with the
/// negative half-line recovered through the symmetry Φ(-x) = 1 - Φ(x).
///
/// Inputs beyond ±7 saturate to exactly `0.0` / `1.0`; the true CDF is
/// within 1.3e-12 of those values there, well inside the approximation's
/// absolute error bound of ~7.5e-8.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// // Tail saturation is exact
/// assert_eq!(norm_cdf(8.0_f64), 1.0);
/// assert_eq!(norm_cdf(-8.0_f64), 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let seven = T::from(7.0).unwrap();

    // Saturate in the far tails
    if x < -seven {
        return zero;
    }
    if x > seven {
        return one;
    }

    let negative = x < zero;
    let x = x.abs();

    let b1 = T::from(AS_COEFFS[0]).unwrap();
    let b2 = T::from(AS_COEFFS[1]).unwrap();
    let b3 = T::from(AS_COEFFS[2]).unwrap();
    let b4 = T::from(AS_COEFFS[3]).unwrap();
    let b5 = T::from(AS_COEFFS[4]).unwrap();
    let p = T::from(AS_P).unwrap();

    // t = 1 / (1 + p·x)
    let t = one / (one + p * x);

    // Horner's method for the degree-5 polynomial
    let y = t * (b1 + t * (b2 + t * (b3 + t * (b4 + t * b5))));

    // z = φ(x), the standard normal density
    let z = norm_pdf(x);

    if negative {
        z * y
    } else {
        one - z * y
    }
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use xlpricer_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    // -x² / 2
    let exponent = -half * x * x;

    frac_1_sqrt_2pi * exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        // Φ(0) = 0.5 (within approximation accuracy of ~7.5e-8)
        let result = norm_cdf(0.0_f64);
        assert_relative_eq!(result, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all |x| < 7 (within approximation accuracy)
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            let cdf_pos = norm_cdf(x);
            let cdf_neg = norm_cdf(-x);
            assert_relative_eq!(cdf_pos + cdf_neg, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables
        // Φ(1) ≈ 0.8413447
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);

        // Φ(-1) ≈ 0.1586553
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);

        // Φ(2) ≈ 0.9772499
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);

        // Φ(-2) ≈ 0.0227501
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-5);

        // Φ(3) ≈ 0.9986501
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_saturation_exact() {
        // Tail saturation must be exact, not approximate
        assert_eq!(norm_cdf(7.5_f64), 1.0);
        assert_eq!(norm_cdf(100.0_f64), 1.0);
        assert_eq!(norm_cdf(-7.5_f64), 0.0);
        assert_eq!(norm_cdf(-100.0_f64), 0.0);
    }

    #[test]
    fn test_norm_cdf_boundary_at_seven_not_saturated() {
        // Saturation is strict: at exactly ±7.0 the polynomial still
        // applies, one ulp beyond it does not
        let cdf = norm_cdf(7.0_f64);
        assert!(cdf < 1.0);
        assert!(cdf > 1.0 - 1e-11);

        let cdf_neg = norm_cdf(-7.0_f64);
        assert!(cdf_neg > 0.0);
        assert!(cdf_neg < 1e-11);

        // Symmetry holds across the boundary pair
        assert_relative_eq!(cdf + cdf_neg, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_near_saturation_boundary() {
        // Just inside the boundary the polynomial still applies
        let cdf = norm_cdf(6.99_f64);
        assert!(cdf > 0.999999);
        assert!(cdf <= 1.0);

        let cdf_neg = norm_cdf(-6.99_f64);
        assert!(cdf_neg < 1e-6);
        assert!(cdf_neg >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        // CDF should be non-decreasing
        let values: Vec<f64> = (-60..=60).map(|i| i as f64 * 0.1).collect();
        for i in 0..values.len() - 1 {
            let cdf_a = norm_cdf(values[i]);
            let cdf_b = norm_cdf(values[i + 1]);
            assert!(
                cdf_b >= cdf_a,
                "CDF not monotonic at x = {}",
                values[i]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        // Result should always be in [0, 1]
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!(result >= 0.0, "CDF < 0 at x = {}", x);
            assert!(result <= 1.0, "CDF > 1 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        // φ(0) = 1 / sqrt(2π) ≈ 0.3989422804014327
        assert_relative_eq!(norm_pdf(0.0_f64), 0.3989422804014327, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_at_one() {
        // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.24197072451914337
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        // φ(-x) = φ(x)
        for x in [0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_pdf_non_negative() {
        for i in -50..=50 {
            let x = i as f64 * 0.2;
            assert!(norm_pdf(x) >= 0.0);
        }
    }
}
