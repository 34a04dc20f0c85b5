//! Special mathematical functions.
//!
//! Thin, bit-reproducible building blocks for the normal distribution.

/// √(2π) ≈ 2.5066282746310002
///
/// Computed at runtime as `(2π).sqrt()` in [`sqrt_two_pi`]; this literal is
/// the same double and is kept for tests and documentation.
pub const SQRT_2PI: f64 = 2.5066282746310002;

/// Returns `√(2π)` evaluated as `sqrt(2·π)`.
///
/// # Examples
/// ```
/// use u_prob::special::{sqrt_two_pi, SQRT_2PI};
/// assert_eq!(sqrt_two_pi(), SQRT_2PI);
/// ```
#[inline]
pub fn sqrt_two_pi() -> f64 {
    (2.0 * std::f64::consts::PI).sqrt()
}

/// Gauss error function.
///
/// ```text
/// erf(x) = (2/√π) ∫₀ˣ exp(-t²) dt
/// ```
///
/// # Algorithm
/// Sun Microsystems fdlibm `s_erf.c` (via the `libm` crate): rational
/// approximations on `[0, 0.84375)`, `[0.84375, 1.25)`, `[1.25, 1/0.35)`
/// and `[1/0.35, 6)`, saturating to ±1 beyond 6.
///
/// # Accuracy
/// Error below 1 ulp. Results match other fdlibm-derived libms bit for bit,
/// which the normal CDF relies on.
///
/// # Examples
/// ```
/// use u_prob::special::erf;
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-15);
/// ```
#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// # Examples
/// ```
/// use u_prob::special::erfc;
/// assert!((erfc(0.0) - 1.0).abs() < 1e-15);
/// assert!(erfc(3.0) < 3e-5);
/// ```
#[inline]
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_two_pi_constant() {
        assert_eq!(sqrt_two_pi(), SQRT_2PI);
        assert!((SQRT_2PI * SQRT_2PI - 2.0 * std::f64::consts::PI).abs() < 1e-14);
    }

    #[test]
    fn test_erf_at_zero() {
        assert_eq!(erf(0.0), 0.0);
        assert_eq!(erf(-0.0), 0.0);
    }

    #[test]
    fn test_erf_known_values() {
        assert!((erf(0.5) - 0.5204998778130465).abs() < 1e-15);
        assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-15);
        assert!((erf(2.0) - 0.9953222650189527).abs() < 1e-15);
    }

    #[test]
    fn test_erf_saturates() {
        assert_eq!(erf(6.0), 1.0);
        assert_eq!(erf(-6.0), -1.0);
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_erf_nan() {
        assert!(erf(f64::NAN).is_nan());
    }

    #[test]
    fn test_erfc_complements_erf() {
        for &x in &[-2.0, -0.5, 0.0, 0.3, 1.0, 2.5] {
            let sum = erf(x) + erfc(x);
            assert!((sum - 1.0).abs() < 1e-15, "erf({x}) + erfc({x}) = {sum}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn erf_odd_symmetry(x in -8.0_f64..8.0) {
            prop_assert_eq!(erf(-x), -erf(x));
        }

        #[test]
        fn erf_in_range(x in -50.0_f64..50.0) {
            let e = erf(x);
            prop_assert!((-1.0..=1.0).contains(&e), "erf({x}) = {e} out of [-1,1]");
        }

        #[test]
        fn erf_is_monotonic(x1 in -6.0_f64..6.0, x2 in -6.0_f64..6.0) {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            prop_assert!(erf(lo) <= erf(hi) + 1e-15, "erf not monotonic");
        }
    }
}
