//! # u-prob
//!
//! Probability-distribution primitives for the U-Engine ecosystem.
//!
//! Density and cumulative evaluators for the standard uniform and normal
//! distributions, a bisection inverse of the normal CDF, and Bernoulli /
//! Binomial sampling over a caller-supplied random source.
//!
//! ## Modules
//!
//! - [`special`] — Error function and related constants
//! - [`distributions`] — Uniform and normal PDF/CDF, inverse normal CDF
//! - [`random`] — Seeded RNG construction, Bernoulli and Binomial sampling
//!
//! ## Design Philosophy
//!
//! - **Reproducible floats**: evaluation order is fixed so results are
//!   bit-identical to the reference values pinned in the tests
//! - **No hidden state**: samplers take the generator as an argument
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod distributions;
pub mod random;
pub mod special;

pub use distributions::{
    inverse_normal_cdf, normal_cdf, normal_pdf, uniform_cdf, uniform_pdf, Bisection,
    DistributionError, Normal, BISECTION_LOWER, BISECTION_UPPER, DEFAULT_TOLERANCE,
    STANDARD_MEAN, STANDARD_SIGMA,
};
pub use random::{bernoulli_trial, binomial, create_rng, try_binomial};
