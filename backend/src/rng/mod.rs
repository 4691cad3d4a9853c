//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! Monte Carlo sampling draws every point through this module.

mod xorshift;

pub use xorshift::RngManager;
