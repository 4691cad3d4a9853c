//! Built-in integrands selectable from the command line
//!
//! Each entry carries its closed-form antiderivative so the study can report
//! the exact value next to the adaptive reference.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinFunction {
    /// sin(x) + cos(x)
    #[default]
    SinPlusCos,
    /// sin(x)
    Sin,
    /// e^x
    Exp,
    /// x^2
    Square,
    /// x^3 - 2x
    Cubic,
}

impl BuiltinFunction {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            BuiltinFunction::SinPlusCos => x.sin() + x.cos(),
            BuiltinFunction::Sin => x.sin(),
            BuiltinFunction::Exp => x.exp(),
            BuiltinFunction::Square => x * x,
            BuiltinFunction::Cubic => x * x * x - 2.0 * x,
        }
    }

    fn antiderivative(self, x: f64) -> f64 {
        match self {
            BuiltinFunction::SinPlusCos => x.sin() - x.cos(),
            BuiltinFunction::Sin => -x.cos(),
            BuiltinFunction::Exp => x.exp(),
            BuiltinFunction::Square => x * x * x / 3.0,
            BuiltinFunction::Cubic => x.powi(4) / 4.0 - x * x,
        }
    }

    /// Closed-form value of the integral over `[start, end]`
    pub fn exact(self, start: f64, end: f64) -> f64 {
        self.antiderivative(end) - self.antiderivative(start)
    }

    /// Interval used when none is given
    pub fn default_interval(self) -> (f64, f64) {
        match self {
            BuiltinFunction::SinPlusCos | BuiltinFunction::Sin => (0.0, FRAC_PI_2),
            BuiltinFunction::Exp | BuiltinFunction::Square => (0.0, 1.0),
            BuiltinFunction::Cubic => (-1.0, 2.0),
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuiltinFunction::SinPlusCos => "sin(x) + cos(x)",
            BuiltinFunction::Sin => "sin(x)",
            BuiltinFunction::Exp => "exp(x)",
            BuiltinFunction::Square => "x^2",
            BuiltinFunction::Cubic => "x^3 - 2x",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BuiltinFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <BuiltinFunction as clap::ValueEnum>::from_str(s, true)
    }
}
