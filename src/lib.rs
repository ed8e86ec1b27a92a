//! EZ-diffusion simulate-and-recover tooling.
//!
//! This crate generates synthetic two-choice response time data from known
//! EZ-diffusion parameters, recovers parameter estimates from that data with
//! the model's closed-form inversion, and drives the generate/recover pair
//! across sample sizes and repetitions so that bias and variance of the
//! estimates can be studied offline from the emitted CSV.

pub mod config;
pub mod model;
pub mod output;
pub mod recover;
pub mod simulate;
pub mod sweep;

use std::path::PathBuf;

use thiserror::Error;

pub use config::{ParamRange, SweepConfig};
pub use model::{accuracy_probability, ModelParameters, DEFAULT_SCALING};
pub use output::{default_results_path, write_results_csv};
pub use recover::{recover, RecoveredParameters, RecoveryError};
pub use simulate::simulate;
pub use sweep::{run_sweep, SweepBatch, TrialRow};

#[derive(Debug, Error)]
pub enum EzError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Runs the configured sweep and writes the result table to
/// `results/simulation_results.csv`, overwriting any prior file.
pub fn run_full_sweep(config: &SweepConfig) -> Result<PathBuf, EzError> {
    let batch = sweep::run_sweep(config)?;
    let path = output::default_results_path();
    output::write_results_csv(&path, &batch.rows)?;
    Ok(path)
}
