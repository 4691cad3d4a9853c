//! Scheme configuration
//!
//! Serializable description of a quadrature scheme, for config files and
//! command-line drivers. `build()` is the factory that turns a config into a
//! ready-to-use scheme, applying the same validation as the constructors.
//!
//! JSON form:
//!
//! ```json
//! {"type": "Rectangle", "steps": 1024}
//! {"type": "MonteCarlo", "samples": 1024, "seed": 42}
//! ```

use serde::{Deserialize, Serialize};

use super::{MonteCarloScheme, QuadratureScheme, RectangleScheme};
use crate::core::error::IntegrationError;

/// Scheme selection and parameters
///
/// # Example
///
/// ```
/// use quadrature_core_rs::SchemeConfig;
///
/// let config = SchemeConfig::from_json(r#"{"type": "MonteCarlo", "samples": 64}"#).unwrap();
/// let scheme = config.build().unwrap();
///
/// assert_eq!(scheme.to_string(), "Monte Carlo scheme with 64 random points");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SchemeConfig {
    /// Evenly spaced samples over the closed interval
    Rectangle {
        /// Number of sample points (must be > 0)
        steps: u64,
    },

    /// Uniform random samples
    MonteCarlo {
        /// Number of random points (must be > 0)
        samples: u64,
        /// Optional seed; absent means a fresh stream per call
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl SchemeConfig {
    /// Parse a single scheme config from JSON
    pub fn from_json(json: &str) -> Result<Self, IntegrationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured scheme
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the step or sample count is zero.
    pub fn build(&self) -> Result<Box<dyn QuadratureScheme>, IntegrationError> {
        let scheme: Box<dyn QuadratureScheme> = match *self {
            SchemeConfig::Rectangle { steps } => Box::new(RectangleScheme::new(steps)?),
            SchemeConfig::MonteCarlo { samples, seed } => {
                Box::new(MonteCarloScheme::new(samples, seed)?)
            }
        };
        Ok(scheme)
    }
}

impl From<RectangleScheme> for SchemeConfig {
    fn from(scheme: RectangleScheme) -> Self {
        SchemeConfig::Rectangle {
            steps: scheme.steps(),
        }
    }
}

impl From<MonteCarloScheme> for SchemeConfig {
    fn from(scheme: MonteCarloScheme) -> Self {
        SchemeConfig::MonteCarlo {
            samples: scheme.samples(),
            seed: scheme.seed(),
        }
    }
}
