//! Quadrature Scheme Module
//!
//! This module defines the strategy interface for numerical integration
//! algorithms.
//!
//! # Overview
//!
//! A scheme owns only its tunable parameters (step count, sample count,
//! seed). The integrand and interval arrive with every call, so one scheme
//! value can be reused across any number of integrators and threads.
//!
//! # Scheme Interface
//!
//! All schemes implement the `QuadratureScheme` trait:
//! ```rust
//! use std::fmt;
//! use quadrature_core_rs::{Integrand, QuadratureScheme};
//!
//! #[derive(Debug)]
//! struct LeftEndpoint;
//!
//! impl fmt::Display for LeftEndpoint {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Left endpoint scheme")
//!     }
//! }
//!
//! impl QuadratureScheme for LeftEndpoint {
//!     fn integrate(&self, integrand: &dyn Integrand, start: f64, end: f64) -> f64 {
//!         integrand.evaluate_at(start) * (end - start)
//!     }
//! }
//! ```
//!
//! Available schemes:
//! 1. **Rectangle**: evenly spaced samples over the closed interval
//! 2. **MonteCarlo**: uniformly random samples, optionally seeded
//!
//! Schemes can also be described as data with [`SchemeConfig`] and built
//! through its factory.

pub mod config;
pub mod monte_carlo;
pub mod rectangle;

pub use config::SchemeConfig;
pub use monte_carlo::MonteCarloScheme;
pub use rectangle::RectangleScheme;

use std::fmt;

use crate::integrand::Integrand;

/// Numerical integration algorithm
///
/// `Display` provides the human-readable label logged by
/// [`Integrator::apply`](crate::Integrator::apply); it has no effect on the
/// computed value.
///
/// Implementations must not keep per-call mutable state on `self`: any
/// random generator or scratch buffer is created inside `integrate`, which
/// keeps a shared scheme safe to use from several threads at once.
pub trait QuadratureScheme: fmt::Debug + fmt::Display + Send + Sync {
    /// Approximate the integral of `integrand` over `[start, end]`
    ///
    /// Callers guarantee `start < end` with both bounds finite.
    fn integrate(&self, integrand: &dyn Integrand, start: f64, end: f64) -> f64;
}

impl<S> QuadratureScheme for Box<S>
where
    S: QuadratureScheme + ?Sized,
{
    fn integrate(&self, integrand: &dyn Integrand, start: f64, end: f64) -> f64 {
        (**self).integrate(integrand, start, end)
    }
}
