//! Quadrature Core - Rust Engine
//!
//! Numerical integration of a real function over a closed interval using
//! interchangeable quadrature schemes.
//!
//! # Architecture
//!
//! - **core**: Interval type and error type
//! - **integrand**: Vectorized integrand abstraction
//! - **scheme**: Quadrature schemes (Rectangle, Monte Carlo) and their config
//! - **integrator**: Binds an integrand to an interval and applies schemes
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Intervals satisfy `start < end`, checked once at construction
//! 2. Step and sample counts are positive, checked once at construction
//! 3. Schemes hold no per-call state; every random stream is created inside the call
//!
//! # Example
//!
//! ```
//! use quadrature_core_rs::{Integrator, RectangleScheme};
//!
//! let integrator = Integrator::new(|x: f64| 2.0 * x, 0.0, 1.0).unwrap();
//! let area = integrator.apply(&RectangleScheme::new(1000).unwrap());
//!
//! assert!((area - 1.0).abs() < 1e-2);
//! ```

// Module declarations
pub mod core;
pub mod integrand;
pub mod integrator;
pub mod rng;
pub mod scheme;

// Re-exports for convenience
pub use crate::core::{IntegrationError, Interval};
pub use integrand::{Integrand, Vectorized};
pub use integrator::Integrator;
pub use rng::RngManager;
pub use scheme::{MonteCarloScheme, QuadratureScheme, RectangleScheme, SchemeConfig};
