//! Quadrature CLI
//!
//! Runs a convergence study: one built-in integrand, Rectangle and Monte Carlo
//! schemes over a sweep of sample counts, compared against an adaptive
//! reference value.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

mod functions;
mod reference;
mod study;

use functions::BuiltinFunction;
use study::StudyConfig;

#[derive(Parser)]
#[command(name = "quadrature-cli")]
#[command(about = "Compare quadrature schemes against a reference integral")]
#[command(version)]
struct Cli {
    /// JSON study config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Integrand to study
    #[arg(long, value_enum)]
    function: Option<BuiltinFunction>,

    /// Interval start (defaults to the function's standard interval)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,

    /// Interval end (defaults to the function's standard interval)
    #[arg(long, allow_negative_numbers = true)]
    end: Option<f64>,

    /// Largest exponent k for sample counts 2^k
    #[arg(long)]
    max_exponent: Option<u32>,

    /// Step between consecutive exponents
    #[arg(long)]
    stride: Option<u32>,

    /// Seed for Monte Carlo runs (unseeded if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn study_config(&self) -> Result<StudyConfig> {
        let mut config = match &self.config {
            Some(path) => StudyConfig::from_file(path)?,
            None => StudyConfig::default(),
        };

        if let Some(function) = self.function {
            config.function = function;
        }
        if self.start.is_some() {
            config.start = self.start;
        }
        if self.end.is_some() {
            config.end = self.end;
        }
        if let Some(max_exponent) = self.max_exponent {
            config.max_exponent = max_exponent;
        }
        if let Some(stride) = self.stride {
            config.stride = stride;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.study_config()?;
    let report = study::run(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_table());
    }
    Ok(())
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
