//! Monte Carlo Scheme
//!
//! Plain (non-stratified) Monte Carlo estimate over a one-dimensional interval.
//!
//! # Behavior
//!
//! - Draws `samples` points independently and uniformly from `[start, end)`
//! - Evaluates the integrand once over all points
//! - Returns `sum * (end - start) / samples`
//!
//! # Determinism
//!
//! A fresh [`RngManager`] is created inside every `integrate` call. With a
//! seed, the same seed, sample count and interval always draw the same
//! points. Without one, each call seeds from process entropy. No variance
//! estimate is produced.

use std::fmt;

use super::QuadratureScheme;
use crate::core::error::{require_positive, IntegrationError};
use crate::integrand::Integrand;
use crate::rng::RngManager;

/// Monte Carlo scheme with a fixed sample count and optional seed
///
/// # Example
///
/// ```
/// use quadrature_core_rs::{MonteCarloScheme, QuadratureScheme};
///
/// let scheme = MonteCarloScheme::new(1000, Some(42)).unwrap();
/// let first = scheme.integrate(&|x: f64| x, 0.0, 1.0);
/// let second = scheme.integrate(&|x: f64| x, 0.0, 1.0);
///
/// assert_eq!(first, second); // seeded: same draws every call
/// assert!((first - 0.5).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloScheme {
    samples: u64,
    seed: Option<u64>,
}

impl MonteCarloScheme {
    /// Create new Monte Carlo scheme
    ///
    /// # Arguments
    /// * `samples` - Number of random points per call
    /// * `seed` - Fixes the point sequence; `None` draws fresh points every call
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `samples` is zero.
    pub fn new(samples: u64, seed: Option<u64>) -> Result<Self, IntegrationError> {
        let samples = require_positive("samples", samples)?;
        Ok(Self { samples, seed })
    }

    /// Unseeded scheme: every call draws a fresh point set
    pub fn unseeded(samples: u64) -> Result<Self, IntegrationError> {
        Self::new(samples, None)
    }

    /// Number of random points per call
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Seed, if the point sequence is fixed
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the sample points for one call
    ///
    /// Exposed so callers can inspect exactly which points a seeded scheme
    /// will evaluate.
    pub fn sample_points(&self, start: f64, end: f64) -> Vec<f64> {
        let mut rng = match self.seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy(),
        };

        (0..self.samples).map(|_| rng.uniform(start, end)).collect()
    }
}

impl fmt::Display for MonteCarloScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monte Carlo scheme with {} random points", self.samples)?;
        if let Some(seed) = self.seed {
            write!(f, " and seed {}", seed)?;
        }
        Ok(())
    }
}

impl QuadratureScheme for MonteCarloScheme {
    fn integrate(&self, integrand: &dyn Integrand, start: f64, end: f64) -> f64 {
        let points = self.sample_points(start, end);
        let values = integrand.evaluate(&points);
        let average_dx = (end - start) / self.samples as f64;

        log::debug!("{}: evaluated {} points over [{}, {})", self, points.len(), start, end);

        values.iter().sum::<f64>() * average_dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_samples_rejected() {
        let err = MonteCarloScheme::new(0, None).unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = MonteCarloScheme::new(0, Some(42)).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_label_without_seed() {
        let scheme = MonteCarloScheme::unseeded(32).unwrap();
        assert_eq!(scheme.to_string(), "Monte Carlo scheme with 32 random points");
    }

    #[test]
    fn test_label_with_seed() {
        let scheme = MonteCarloScheme::new(32, Some(2137)).unwrap();
        assert_eq!(
            scheme.to_string(),
            "Monte Carlo scheme with 32 random points and seed 2137"
        );
    }

    #[test]
    fn test_label_with_zero_seed() {
        let scheme = MonteCarloScheme::new(8, Some(0)).unwrap();
        assert_eq!(
            scheme.to_string(),
            "Monte Carlo scheme with 8 random points and seed 0"
        );
    }

    #[test]
    fn test_seeded_points_repeat() {
        let scheme = MonteCarloScheme::new(64, Some(7)).unwrap();
        assert_eq!(scheme.sample_points(-1.0, 1.0), scheme.sample_points(-1.0, 1.0));
    }

    #[test]
    fn test_points_in_half_open_interval() {
        let scheme = MonteCarloScheme::new(10_000, Some(99)).unwrap();

        for x in scheme.sample_points(2.0, 3.0) {
            assert!((2.0..3.0).contains(&x), "point {} outside [2, 3)", x);
        }
    }

    #[test]
    fn test_constant_integrand_exact_for_any_draw() {
        let scheme = MonteCarloScheme::new(1, Some(5)).unwrap();
        let result = scheme.integrate(&|_x: f64| 4.0, 1.0, 3.5);

        assert_eq!(result, 10.0);
    }
}
