//! Convergence study
//!
//! Applies Rectangle and Monte Carlo schemes with sample counts `2^k` to one
//! built-in integrand and reports each value with its error against an
//! adaptive Simpson reference.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use quadrature_core_rs::{Integrator, SchemeConfig};
use serde::{Deserialize, Serialize};

use crate::functions::BuiltinFunction;
use crate::reference::adaptive_simpson;

const REFERENCE_TOLERANCE: f64 = 1e-12;
const REFERENCE_MAX_DEPTH: u32 = 50;

/// Study parameters, loadable from a JSON file
///
/// Missing fields fall back to the defaults; `start`/`end` default to the
/// function's own interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub function: BuiltinFunction,
    pub start: Option<f64>,
    pub end: Option<f64>,
    /// Largest exponent k for sample counts 2^k
    pub max_exponent: u32,
    /// Step between consecutive exponents
    pub stride: u32,
    /// Seed for the Monte Carlo runs; `None` draws fresh points every run
    pub seed: Option<u64>,
    /// Explicit scheme list; replaces the generated 2^k sweep when non-empty
    pub schemes: Vec<SchemeConfig>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            function: BuiltinFunction::default(),
            start: None,
            end: None,
            max_exponent: 20,
            stride: 5,
            seed: None,
            schemes: Vec::new(),
        }
    }
}

impl StudyConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open study config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse study config {}", path.display()))?;
        Ok(config)
    }

    pub fn interval(&self) -> (f64, f64) {
        let (default_start, default_end) = self.function.default_interval();
        (
            self.start.unwrap_or(default_start),
            self.end.unwrap_or(default_end),
        )
    }

    /// Sample counts 2^0, 2^stride, 2^(2*stride), ... up to 2^max_exponent
    pub fn sample_counts(&self) -> Result<Vec<u64>> {
        anyhow::ensure!(self.stride > 0, "stride must be greater than 0");
        anyhow::ensure!(
            self.max_exponent < 64,
            "max exponent {} does not fit a 64-bit sample count",
            self.max_exponent
        );
        Ok((0..=self.max_exponent)
            .step_by(self.stride as usize)
            .map(|k| 1u64 << k)
            .collect())
    }

    /// Schemes to run, in report order
    pub fn scheme_configs(&self) -> Result<Vec<SchemeConfig>> {
        if !self.schemes.is_empty() {
            return Ok(self.schemes.clone());
        }

        let counts = self.sample_counts()?;
        let rectangles = counts
            .iter()
            .map(|&steps| SchemeConfig::Rectangle { steps });
        let monte_carlo = counts.iter().map(|&samples| SchemeConfig::MonteCarlo {
            samples,
            seed: self.seed,
        });
        Ok(rectangles.chain(monte_carlo).collect())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyRow {
    pub scheme: String,
    pub value: f64,
    pub abs_error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub function: String,
    pub start: f64,
    pub end: f64,
    pub exact: f64,
    pub reference: f64,
    pub rows: Vec<StudyRow>,
}

pub fn run(config: &StudyConfig) -> Result<StudyReport> {
    let function = config.function;
    let (start, end) = config.interval();

    let integrator = Integrator::new(move |x: f64| function.eval(x), start, end)
        .context("invalid integration interval")?;

    let reference = adaptive_simpson(
        |x| function.eval(x),
        start,
        end,
        REFERENCE_TOLERANCE,
        REFERENCE_MAX_DEPTH,
    );
    log::info!("Reference value for {}: {}", function, reference);

    let mut rows = Vec::new();
    for scheme_config in config.scheme_configs()? {
        let scheme = scheme_config
            .build()
            .with_context(|| format!("invalid scheme {:?}", scheme_config))?;
        let value = integrator.apply(&scheme);
        rows.push(StudyRow {
            scheme: scheme.to_string(),
            value,
            abs_error: (value - reference).abs(),
        });
    }

    Ok(StudyReport {
        function: function.to_string(),
        start,
        end,
        exact: function.exact(start, end),
        reference,
        rows,
    })
}

impl StudyReport {
    pub fn render_table(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|row| row.scheme.len())
            .max()
            .unwrap_or(0)
            .max("scheme".len());

        let mut out = String::new();
        out.push_str(&format!(
            "integral of {} over [{}, {}]\n",
            self.function, self.start, self.end
        ));
        out.push_str(&format!("exact:     {:.15}\n", self.exact));
        out.push_str(&format!("reference: {:.15}\n\n", self.reference));
        out.push_str(&format!(
            "{:<width$}  {:>20}  {:>12}\n",
            "scheme",
            "value",
            "abs error",
            width = width
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "{:<width$}  {:>20.15}  {:>12.3e}\n",
                row.scheme,
                row.value,
                row.abs_error,
                width = width
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_counts() {
        let config = StudyConfig::default();
        assert_eq!(
            config.sample_counts().unwrap(),
            vec![1, 1 << 5, 1 << 10, 1 << 15, 1 << 20]
        );
    }

    #[test]
    fn test_zero_stride_rejected() {
        let config = StudyConfig {
            stride: 0,
            ..StudyConfig::default()
        };
        assert!(config.sample_counts().is_err());
    }

    #[test]
    fn test_generated_schemes_share_seed() {
        let config = StudyConfig {
            max_exponent: 5,
            seed: Some(42),
            ..StudyConfig::default()
        };

        assert_eq!(
            config.scheme_configs().unwrap(),
            vec![
                SchemeConfig::Rectangle { steps: 1 },
                SchemeConfig::Rectangle { steps: 32 },
                SchemeConfig::MonteCarlo {
                    samples: 1,
                    seed: Some(42)
                },
                SchemeConfig::MonteCarlo {
                    samples: 32,
                    seed: Some(42)
                },
            ]
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StudyConfig =
            serde_json::from_str(r#"{"function": "exp", "seed": 7}"#).unwrap();

        assert_eq!(config.function, BuiltinFunction::Exp);
        assert_eq!(config.interval(), (0.0, 1.0));
        assert_eq!(config.max_exponent, 20);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_run_small_study() {
        let config = StudyConfig {
            max_exponent: 10,
            seed: Some(42),
            ..StudyConfig::default()
        };
        let report = run(&config).unwrap();

        assert_eq!(report.rows.len(), 6);
        assert!((report.reference - 2.0).abs() < 1e-10);
        assert_eq!(report.rows[0].scheme, "Rectangle scheme with 1 steps");
        assert!(report.rows[2].abs_error < report.rows[1].abs_error);
        assert!(report
            .render_table()
            .contains("Monte Carlo scheme with 1024 random points and seed 42"));
    }

    #[test]
    fn test_explicit_schemes_replace_sweep() {
        let config = StudyConfig {
            schemes: vec![SchemeConfig::Rectangle { steps: 8 }],
            ..StudyConfig::default()
        };
        let report = run(&config).unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].scheme, "Rectangle scheme with 8 steps");
    }

    #[test]
    fn test_invalid_interval_reported() {
        let config = StudyConfig {
            start: Some(1.0),
            end: Some(1.0),
            ..StudyConfig::default()
        };
        assert!(run(&config).is_err());
    }
}
