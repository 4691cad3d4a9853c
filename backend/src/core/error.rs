//! Errors raised while building integrators and schemes
//!
//! Every variant is produced synchronously by a constructor. An invalid
//! interval or scheme is never built, so `integrate`/`apply` cannot fail.

use thiserror::Error;

/// Errors that can occur while constructing engine values
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Invalid interval [{start}, {end}]: start must be less than end with a finite width")]
    InvalidInterval { start: f64, end: f64 },

    #[error("Invalid parameter '{name}' = {value}: must be greater than 0")]
    InvalidParameter { name: &'static str, value: u64 },

    #[error("Invalid scheme configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl IntegrationError {
    /// True for [`IntegrationError::InvalidInterval`]
    pub fn is_invalid_interval(&self) -> bool {
        matches!(self, IntegrationError::InvalidInterval { .. })
    }

    /// True for [`IntegrationError::InvalidParameter`]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, IntegrationError::InvalidParameter { .. })
    }
}

/// Reject a zero sample/step count
pub(crate) fn require_positive(name: &'static str, value: u64) -> Result<u64, IntegrationError> {
    if value == 0 {
        return Err(IntegrationError::InvalidParameter { name, value });
    }
    Ok(value)
}
