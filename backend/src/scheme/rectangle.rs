//! Rectangle Scheme
//!
//! Deterministic sampling rule driven by sample density.
//!
//! # Behavior
//!
//! - Samples `steps` evenly spaced points covering `[start, end]`, both
//!   endpoints included (linear spacing with `steps - 1` gaps)
//! - Evaluates the integrand once over all points
//! - Scales the sum by `dx = (end - start) / steps`
//!
//! The scale divides by `steps`, not by the `steps - 1` gaps between points.
//! This is not the textbook midpoint or trapezoid rule, and reference outputs
//! depend on it. For `steps == 1` the single sample is `start`.

use std::fmt;

use super::QuadratureScheme;
use crate::core::error::{require_positive, IntegrationError};
use crate::integrand::Integrand;

/// Rectangle scheme with a fixed number of sample points
///
/// # Example
///
/// ```
/// use quadrature_core_rs::{QuadratureScheme, RectangleScheme};
///
/// let scheme = RectangleScheme::new(4).unwrap();
/// let area = scheme.integrate(&|_x: f64| 3.0, 0.0, 2.0);
///
/// assert_eq!(area, 6.0);
/// assert_eq!(scheme.to_string(), "Rectangle scheme with 4 steps");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleScheme {
    steps: u64,
}

impl RectangleScheme {
    /// Create new rectangle scheme
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `steps` is zero.
    pub fn new(steps: u64) -> Result<Self, IntegrationError> {
        let steps = require_positive("steps", steps)?;
        Ok(Self { steps })
    }

    /// Number of sample points
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Sample points: `steps` values evenly spaced over `[start, end]`
    ///
    /// The last point is pinned to `end` so accumulated rounding in the
    /// spacing never moves it off the interval.
    pub fn sample_points(&self, start: f64, end: f64) -> Vec<f64> {
        let count = self.steps as usize;
        if count == 1 {
            return vec![start];
        }

        let spacing = (end - start) / (count - 1) as f64;
        let mut points: Vec<f64> = (0..count).map(|i| start + i as f64 * spacing).collect();
        points[count - 1] = end;
        points
    }
}

impl fmt::Display for RectangleScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle scheme with {} steps", self.steps)
    }
}

impl QuadratureScheme for RectangleScheme {
    fn integrate(&self, integrand: &dyn Integrand, start: f64, end: f64) -> f64 {
        let points = self.sample_points(start, end);
        let values = integrand.evaluate(&points);
        let dx = (end - start) / self.steps as f64;

        log::debug!("{}: evaluated {} points over [{}, {}]", self, points.len(), start, end);

        values.iter().sum::<f64>() * dx
    }
}
