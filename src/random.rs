//! Random number generation, Bernoulli trials and Binomial sampling.
//!
//! Provides seeded RNG construction and the two sampling primitives.
//! Every sampler takes the generator as an argument; there is no
//! process-wide random source.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform. Passing `&mut rand::rng()` uses the thread-local
//! generator instead, whose output depends on which thread runs the call.

use log::debug;
use rand::Rng;

use crate::distributions::DistributionError;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_prob::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Performs one Bernoulli trial with success probability `p`.
///
/// Draws a single uniform value `u ∈ [0, 1)` from `rng` and returns `1` if
/// `u < p`, otherwise `0`. `p` is not validated: `p ≤ 0` always yields `0`
/// and `p ≥ 1` always yields `1`.
///
/// # Examples
/// ```
/// use u_prob::random::{bernoulli_trial, create_rng};
/// let mut rng = create_rng(7);
/// assert_eq!(bernoulli_trial(1.0, &mut rng), 1);
/// assert_eq!(bernoulli_trial(0.0, &mut rng), 0);
/// ```
pub fn bernoulli_trial<R: Rng + ?Sized>(p: f64, rng: &mut R) -> i64 {
    let u: f64 = rng.random();
    if u < p {
        1
    } else {
        0
    }
}

/// Draws a Binomial(n, p) sample as the sum of `n` Bernoulli trials.
///
/// # Errors
/// - [`DistributionError::InvalidProbability`] if `p` is NaN or outside
///   `[0, 1]`.
/// - [`DistributionError::InvalidTrialCount`] if `n ≤ 0`.
///
/// The probability is checked first. Nothing is drawn from `rng` when the
/// parameters are rejected.
///
/// # Complexity
/// Time: O(n), one generator draw per trial.
///
/// # Examples
/// ```
/// use u_prob::random::{create_rng, try_binomial};
/// let mut rng = create_rng(42);
/// let k = try_binomial(0.3, 100, &mut rng).unwrap();
/// assert!((0..=100).contains(&k));
/// assert!(try_binomial(1.2, 10, &mut rng).is_err());
/// ```
pub fn try_binomial<R: Rng + ?Sized>(
    p: f64,
    n: i64,
    rng: &mut R,
) -> Result<i64, DistributionError> {
    if !(0.0..=1.0).contains(&p) {
        debug!("rejecting binomial sample: p={p}");
        return Err(DistributionError::InvalidProbability(p));
    }
    if n <= 0 {
        debug!("rejecting binomial sample: n={n}");
        return Err(DistributionError::InvalidTrialCount(n));
    }
    Ok((0..n).map(|_| bernoulli_trial(p, &mut *rng)).sum())
}

/// Draws a Binomial(n, p) sample, failing fast on invalid parameters.
///
/// Same as [`try_binomial`] but treats invalid parameters as a broken
/// precondition.
///
/// # Panics
/// Panics with `"invalid probability p: …"` if `p` is NaN or outside
/// `[0, 1]`, and with `"invalid parameter n: …"` if `n ≤ 0`.
///
/// # Examples
/// ```
/// use u_prob::random::{binomial, create_rng};
/// let mut rng = create_rng(42);
/// assert_eq!(binomial(1.0, 1000, &mut rng), 1000);
/// assert_eq!(binomial(0.0, 250, &mut rng), 0);
/// ```
pub fn binomial<R: Rng + ?Sized>(p: f64, n: i64, rng: &mut R) -> i64 {
    match try_binomial(p, n, rng) {
        Ok(k) => k,
        Err(e) => panic!("{e}"),
    }
}

// ============================================================================
// Tests
// ============================================================================
