//! Integrand abstraction
//!
//! Schemes evaluate the integrand once per call over the whole batch of
//! sample points, so the interface is batch-oriented:
//!
//! - Any `Fn(f64) -> f64` closure or function is an integrand and is
//!   evaluated point by point.
//! - [`Vectorized`] wraps a batch function `Fn(&[f64]) -> Vec<f64>` that
//!   evaluates all points in one call.
//!
//! # Example
//!
//! ```
//! use quadrature_core_rs::{Integrand, Vectorized};
//!
//! let pointwise = |x: f64| x * x;
//! assert_eq!(pointwise.evaluate(&[1.0, 2.0]), vec![1.0, 4.0]);
//!
//! let batch = Vectorized::new(|xs: &[f64]| xs.iter().map(|x| x * x).collect());
//! assert_eq!(batch.evaluate(&[1.0, 2.0]), vec![1.0, 4.0]);
//! ```

/// A real-valued function of a real argument, evaluated over batches
///
/// Implementations must return exactly one value per input point, in order.
/// Evaluation is assumed infallible; a panicking integrand unwinds through
/// the scheme and integrator unchanged.
pub trait Integrand: Send + Sync {
    /// Evaluate the integrand at every point, elementwise
    fn evaluate(&self, points: &[f64]) -> Vec<f64>;

    /// Evaluate the integrand at a single point
    fn evaluate_at(&self, x: f64) -> f64 {
        self.evaluate(&[x])[0]
    }
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&x| self(x)).collect()
    }

    fn evaluate_at(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Batch integrand: one call evaluates every sample point
pub struct Vectorized<F> {
    func: F,
}

impl<F> Vectorized<F>
where
    F: Fn(&[f64]) -> Vec<f64> + Send + Sync,
{
    /// Wrap a batch function
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Integrand for Vectorized<F>
where
    F: Fn(&[f64]) -> Vec<f64> + Send + Sync,
{
    /// # Panics
    /// Panics if the wrapped function returns a different number of values than points.
    fn evaluate(&self, points: &[f64]) -> Vec<f64> {
        let values = (self.func)(points);
        assert_eq!(
            values.len(),
            points.len(),
            "vectorized integrand must return one value per point"
        );
        values
    }
}

impl<F> std::fmt::Debug for Vectorized<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vectorized").finish_non_exhaustive()
    }
}
