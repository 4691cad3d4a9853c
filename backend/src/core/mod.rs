//! Core value types: the integration interval and the engine's error type

pub mod error;
pub mod interval;

pub use error::IntegrationError;
pub use interval::Interval;
