//! Closed integration interval
//!
//! The interval is validated once, when it is built. Every other part of the
//! engine can assume `start < end` with both bounds and the width finite.

use serde::{Deserialize, Serialize};

use super::error::IntegrationError;

/// A closed interval `[start, end]` with `start < end`
///
/// # Example
/// ```
/// use quadrature_core_rs::Interval;
///
/// let interval = Interval::new(0.0, 2.0).unwrap();
/// assert_eq!(interval.width(), 2.0);
///
/// assert!(Interval::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create a new interval
    ///
    /// # Errors
    /// Returns `InvalidInterval` if `start >= end`, either bound is NaN or
    /// infinite, or the width `end - start` overflows to infinity.
    pub fn new(start: f64, end: f64) -> Result<Self, IntegrationError> {
        let finite = start.is_finite() && end.is_finite() && (end - start).is_finite();
        if !finite || start >= end {
            return Err(IntegrationError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound
    pub fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`, always positive
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = IntegrationError;

    fn try_from((start, end): (f64, f64)) -> Result<Self, Self::Error> {
        Interval::new(start, end)
    }
}

// Deserialize through `new` so a config file cannot smuggle in an inverted interval.
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawInterval {
            start: f64,
            end: f64,
        }

        let raw = RawInterval::deserialize(deserializer)?;
        Interval::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_bound_rejected() {
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_bound_rejected() {
        assert!(Interval::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let err = Interval::new(-f64::MAX, f64::MAX).unwrap_err();
        assert!(err.is_invalid_interval());

        let widest = Interval::new(0.0, f64::MAX).unwrap();
        assert!(widest.width().is_finite());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Interval = serde_json::from_str(r#"{"start": 0.0, "end": 1.5}"#).unwrap();
        assert_eq!(ok.width(), 1.5);

        let inverted: Result<Interval, _> = serde_json::from_str(r#"{"start": 2.0, "end": 1.0}"#);
        assert!(inverted.is_err());
    }
}
