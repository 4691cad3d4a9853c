//! Integrator - binds an integrand to an interval
//!
//! The binding is set once at construction and never changes. `apply` only
//! reads it, so one integrator can be shared across threads and used with
//! any number of schemes in any order.
//!
//! # Example
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use quadrature_core_rs::{Integrator, MonteCarloScheme, RectangleScheme};
//!
//! let integrator = Integrator::new(|x: f64| x.sin() + x.cos(), 0.0, FRAC_PI_2).unwrap();
//!
//! let rectangle = integrator.apply(&RectangleScheme::new(1 << 16).unwrap());
//! let monte_carlo = integrator.apply(&MonteCarloScheme::new(1 << 16, Some(42)).unwrap());
//!
//! assert!((rectangle - 2.0).abs() < 1e-3);
//! assert!((monte_carlo - 2.0).abs() < 1e-2);
//! ```

use crate::core::error::IntegrationError;
use crate::core::interval::Interval;
use crate::integrand::Integrand;
use crate::scheme::QuadratureScheme;

/// An integrand bound to a closed interval
#[derive(Debug)]
pub struct Integrator<I> {
    integrand: I,
    interval: Interval,
}

impl<I: Integrand> Integrator<I> {
    /// Create a new integrator
    ///
    /// No integrand evaluation happens here.
    ///
    /// # Errors
    /// Returns `InvalidInterval` if `start >= end` or either bound is not finite.
    pub fn new(integrand: I, start: f64, end: f64) -> Result<Self, IntegrationError> {
        let interval = Interval::new(start, end)?;
        Ok(Self::with_interval(integrand, interval))
    }

    /// Bind an integrand to an already validated interval
    pub fn with_interval(integrand: I, interval: Interval) -> Self {
        Self {
            integrand,
            interval,
        }
    }

    /// Approximate the definite integral using `scheme`
    ///
    /// Logs which scheme is used at `info` level, then delegates to
    /// [`QuadratureScheme::integrate`] with the bound integrand and interval.
    pub fn apply<S>(&self, scheme: &S) -> f64
    where
        S: QuadratureScheme + ?Sized,
    {
        log::info!("Using {}.", scheme);
        scheme.integrate(&self.integrand, self.interval.start(), self.interval.end())
    }

    /// The bound interval
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Lower bound of the interval
    pub fn start(&self) -> f64 {
        self.interval.start()
    }

    /// Upper bound of the interval
    pub fn end(&self) -> f64 {
        self.interval.end()
    }

    /// The bound integrand
    pub fn integrand(&self) -> &I {
        &self.integrand
    }
}
