//! Probability distributions.
//!
//! Density and cumulative evaluators for the standard uniform and the
//! normal distribution, plus a bisection inverse of the normal CDF.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | PDF | CDF |
//! |---|---|---|---|
//! | Uniform | — (support `[0, 1)`) | [`uniform_pdf`] | [`uniform_cdf`] |
//! | Normal | μ, σ | [`normal_pdf`] | [`normal_cdf`] |
//!
//! # Design Notes
//!
//! The free functions do **not** validate their parameters. A zero or
//! negative σ flows through the formulas and comes out as `Inf`, `NaN` or a
//! scale-inverted value. Use [`Normal::new`] for a validated handle.
//!
//! Evaluation order in [`normal_pdf`] and [`normal_cdf`] is fixed; changing
//! it changes the last bits of the results.

use log::{debug, trace, warn};

use crate::special;

/// Mean μ of the standard normal distribution.
pub const STANDARD_MEAN: f64 = 0.0;

/// Standard deviation σ of the standard normal distribution.
pub const STANDARD_SIGMA: f64 = 1.0;

/// Default convergence tolerance for [`inverse_normal_cdf`].
pub const DEFAULT_TOLERANCE: f64 = 0.00001;

/// Lower end of the standard-normal bisection bracket.
///
/// Φ saturates to 0 well inside this bound in double precision.
pub const BISECTION_LOWER: f64 = -10.0;

/// Upper end of the standard-normal bisection bracket.
pub const BISECTION_UPPER: f64 = 10.0;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
    /// A success probability outside `[0, 1]` (or NaN).
    InvalidProbability(f64),
    /// A non-positive number of trials.
    InvalidTrialCount(i64),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
            DistributionError::InvalidProbability(p) => {
                write!(f, "invalid probability p: {p}")
            }
            DistributionError::InvalidTrialCount(n) => {
                write!(f, "invalid parameter n: {n}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

// ============================================================================
// Uniform Distribution
// ============================================================================

/// PDF of the standard uniform distribution on `[0, 1)`.
///
/// Returns `1` if `0 ≤ x < 1`, otherwise `0` (including NaN).
///
/// # Examples
/// ```
/// use u_prob::uniform_pdf;
/// assert_eq!(uniform_pdf(0.0), 1);
/// assert_eq!(uniform_pdf(0.65), 1);
/// assert_eq!(uniform_pdf(1.0), 0);
/// ```
pub fn uniform_pdf(x: f64) -> u8 {
    if (0.0..1.0).contains(&x) {
        1
    } else {
        0
    }
}

/// CDF of the standard uniform distribution.
///
/// ```text
/// F(x) = 0  for x < 0
///      = x  for 0 ≤ x < 1
///      = 1  for x ≥ 1
/// ```
///
/// NaN fails both comparisons and maps to `1`.
///
/// # Examples
/// ```
/// use u_prob::uniform_cdf;
/// assert_eq!(uniform_cdf(-0.2), 0.0);
/// assert_eq!(uniform_cdf(0.3), 0.3);
/// assert_eq!(uniform_cdf(1.0), 1.0);
/// ```
pub fn uniform_cdf(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x < 1.0 {
        x
    } else {
        1.0
    }
}

// ============================================================================
// Normal Distribution
// ============================================================================

/// PDF of the normal distribution N(μ, σ²).
///
/// ```text
/// f(x) = exp(−(x−μ)² / (2σ²)) / (√(2π)·σ)
/// ```
///
/// No validation: `sigma == 0` gives `NaN` or `Inf`, a negative `sigma`
/// gives a negative density.
///
/// # Examples
/// ```
/// use u_prob::normal_pdf;
/// assert_eq!(normal_pdf(0.0, 0.0, 1.0), 0.3989422804014327);
/// assert_eq!(normal_pdf(1.0, 0.0, 1.0), normal_pdf(-1.0, 0.0, 1.0));
/// ```
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let sqrt_two_pi = special::sqrt_two_pi();
    let dev = x - mu;
    let exponent = -((dev * dev) / (2.0 * (sigma * sigma)));
    exponent.exp() / (sqrt_two_pi * sigma)
}

/// CDF of the normal distribution N(μ, σ²).
///
/// ```text
/// Φ(x) = (1 + erf((x−μ) / √2 / σ)) / 2
/// ```
///
/// The deviation is divided by `√2` before `σ`. A negative `sigma` flips the
/// sign of the erf argument; `sigma == 0` yields `NaN` at `x == μ`.
///
/// # Examples
/// ```
/// use u_prob::normal_cdf;
/// assert_eq!(normal_cdf(1.0, 1.0, 2.0), 0.5);
/// assert_eq!(normal_cdf(10.0, 0.0, 1.0), 1.0);
/// ```
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let e = special::erf((x - mu) / std::f64::consts::SQRT_2 / sigma);
    (1.0 + e) / 2.0
}

/// Inverse of the normal CDF by bisection.
///
/// Returns `x` with `normal_cdf(x, mu, sigma) ≈ p`. For anything other than
/// the standard normal, the standard-normal root `z` is rescaled to
/// `mu + sigma·z`.
///
/// # Algorithm
/// See [`Bisection::solve`]. The bracket is `[-10, 10]` and the loop runs
/// while its width exceeds `tolerance`.
///
/// # Edge cases
/// - `p` outside `[0, 1]` is not rejected: the search pins to a bracket edge.
/// - `p` NaN, or `tolerance ≥ 20` (or NaN), returns the default midpoint
///   `0.0`, i.e. `mu` after rescaling.
/// - `tolerance ≤ 0` runs until the bracket stops shrinking.
///
/// # Examples
/// ```
/// use u_prob::{inverse_normal_cdf, DEFAULT_TOLERANCE};
/// let z = inverse_normal_cdf(0.2, 0.0, 1.0, DEFAULT_TOLERANCE);
/// assert_eq!(z, -0.8416271209716797);
/// assert_eq!(inverse_normal_cdf(0.5, 0.0, 1.0, DEFAULT_TOLERANCE), 0.0);
/// ```
pub fn inverse_normal_cdf(p: f64, mu: f64, sigma: f64, tolerance: f64) -> f64 {
    let z = Bisection::with_tolerance(tolerance).solve(p);
    if mu != STANDARD_MEAN || sigma != STANDARD_SIGMA {
        return mu + sigma * z;
    }
    z
}

/// Bisection search for the standard-normal quantile.
///
/// Holds the search bracket and the convergence tolerance. The default is
/// `[BISECTION_LOWER, BISECTION_UPPER]` with [`DEFAULT_TOLERANCE`].
///
/// # Examples
/// ```
/// use u_prob::Bisection;
/// let z = Bisection::with_tolerance(1e-9).solve(0.975);
/// assert!((z - 1.959963984540054).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    lower: f64,
    upper: f64,
    tolerance: f64,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            lower: BISECTION_LOWER,
            upper: BISECTION_UPPER,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Bisection {
    /// Default bracket with a custom tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Custom bracket `[lower, upper]` and tolerance.
    pub fn with_bracket(lower: f64, upper: f64, tolerance: f64) -> Self {
        Self {
            lower,
            upper,
            tolerance,
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Finds `z` in the bracket with `Φ(z) ≈ p` for the standard normal.
    ///
    /// # Algorithm
    /// Invariant: `lower ≤ z* ≤ upper`. Each step evaluates Φ at the
    /// midpoint and keeps the half containing the root; an exact hit stops
    /// the search. The loop runs while `upper − lower > tolerance` and
    /// returns the last midpoint evaluated, or `0.0` if none was.
    ///
    /// A step that leaves the bracket unchanged (adjacent floats, reachable
    /// only with `tolerance ≤ 0`) also stops the search.
    pub fn solve(&self, p: f64) -> f64 {
        let mut lo = self.lower;
        let mut hi = self.upper;
        let mut mid = 0.0;

        if !(hi - lo > self.tolerance) {
            warn!(
                "bisection bracket [{lo}, {hi}] already within tolerance {}; returning default midpoint",
                self.tolerance
            );
            return mid;
        }

        let mut iterations = 0_u32;
        while hi - lo > self.tolerance {
            mid = (lo + hi) / 2.0;
            let mid_p = normal_cdf(mid, STANDARD_MEAN, STANDARD_SIGMA);
            iterations += 1;
            trace!("bisection step {iterations}: z={mid}, Φ(z)={mid_p}");

            let (prev_lo, prev_hi) = (lo, hi);
            if mid_p < p {
                lo = mid;
            } else if mid_p > p {
                hi = mid;
            } else {
                break;
            }

            if lo == prev_lo && hi == prev_hi {
                warn!(
                    "bisection stalled at z={mid} with tolerance {}; bracket cannot shrink further",
                    self.tolerance
                );
                break;
            }
        }

        debug!("bisection for p={p} finished after {iterations} steps: z={mid}");
        mid
    }
}

/// Normal (Gaussian) distribution N(μ, σ²) with validated parameters.
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: (1 + erf((x−μ)/(σ√2))) / 2
/// - Mean: μ
/// - Variance: σ²
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `Err` if `sigma ≤ 0` or parameters are not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: STANDARD_MEAN,
            sigma: STANDARD_SIGMA,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    pub fn std_dev(&self) -> f64 {
        self.sigma
    }

    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x, self.mu, self.sigma)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        normal_cdf(x, self.mu, self.sigma)
    }

    /// Inverse CDF (quantile) at [`DEFAULT_TOLERANCE`].
    ///
    /// Returns `None` if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if p <= 0.0 || p >= 1.0 || p.is_nan() {
            return None;
        }
        Some(inverse_normal_cdf(p, self.mu, self.sigma, DEFAULT_TOLERANCE))
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- Uniform ---

        #[test]
        fn uniform_pdf_indicator(x in -2.0_f64..2.0) {
            let expected = if (0.0..1.0).contains(&x) { 1 } else { 0 };
            prop_assert_eq!(uniform_pdf(x), expected);
        }

        #[test]
        fn uniform_cdf_in_01_and_monotonic(x1 in -5.0_f64..5.0, x2 in -5.0_f64..5.0) {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            let (c_lo, c_hi) = (uniform_cdf(lo), uniform_cdf(hi));
            prop_assert!((0.0..=1.0).contains(&c_lo));
            prop_assert!((0.0..=1.0).contains(&c_hi));
            prop_assert!(c_lo <= c_hi, "uniform_cdf not monotonic: {lo} -> {c_lo}, {hi} -> {c_hi}");
        }

        // --- Normal ---

        #[test]
        fn normal_pdf_symmetric(x in -40.0_f64..40.0) {
            prop_assert_eq!(normal_pdf(x, 0.0, 1.0), normal_pdf(-x, 0.0, 1.0));
        }

        #[test]
        fn normal_pdf_non_negative(x in -50.0_f64..50.0, mu in -10.0_f64..10.0, sigma in 0.01_f64..20.0) {
            prop_assert!(normal_pdf(x, mu, sigma) >= 0.0);
        }

        #[test]
        fn normal_cdf_half_at_mean(mu in -1e3_f64..1e3, sigma in 1e-3_f64..1e3, negate in any::<bool>()) {
            let sigma = if negate { -sigma } else { sigma };
            prop_assert_eq!(normal_cdf(mu, mu, sigma), 0.5);
        }

        #[test]
        fn normal_cdf_monotonic(x1 in -8.0_f64..8.0, x2 in -8.0_f64..8.0) {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            prop_assert!(
                normal_cdf(lo, 0.0, 1.0) <= normal_cdf(hi, 0.0, 1.0) + 1e-15,
                "CDF not monotonic"
            );
        }

        #[test]
        fn normal_cdf_in_01(x in -50.0_f64..50.0, mu in -10.0_f64..10.0, sigma in 0.01_f64..20.0) {
            let c = normal_cdf(x, mu, sigma);
            prop_assert!((0.0..=1.0).contains(&c), "CDF({x}) = {c} out of [0,1]");
        }

        // --- Inverse ---

        #[test]
        fn inverse_roundtrip(
            p in 0.001_f64..0.999,
            mu in -100.0_f64..100.0,
            sigma in 0.1_f64..10.0,
            tolerance in 1e-9_f64..1e-5,
        ) {
            let x = inverse_normal_cdf(p, mu, sigma, tolerance);
            let p_back = normal_cdf(x, mu, sigma);
            prop_assert!(
                (p_back - p).abs() <= tolerance,
                "roundtrip: p={p} -> x={x} -> p_back={p_back}"
            );
        }

        #[test]
        fn inverse_stays_in_bracket(p in -1.0_f64..2.0) {
            let z = inverse_normal_cdf(p, 0.0, 1.0, DEFAULT_TOLERANCE);
            prop_assert!((BISECTION_LOWER..=BISECTION_UPPER).contains(&z));
        }
    }
}
