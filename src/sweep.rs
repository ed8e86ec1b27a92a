//! The simulate-and-recover experiment harness.
//!
//! For every configured sample size the harness runs the configured number
//! of repetitions: draw true parameters uniformly from the ranges, simulate
//! a response time sample, derive the theoretical accuracy probability from
//! the true parameters, and invert it back to estimates. Each successful
//! repetition contributes one row; a degenerate repetition is skipped and
//! the sweep keeps going. A single seeded random stream drives the whole
//! sweep, so a given configuration always reproduces the same table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SweepConfig;
use crate::model::{accuracy_probability, ModelParameters};
use crate::recover::recover;
use crate::simulate::simulate;
use crate::EzError;

/// One successful simulate-and-recover repetition: the sample size, the
/// true parameters and the recovered estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialRow {
    pub sample_size: usize,
    pub boundary: f64,
    pub drift: f64,
    pub non_decision: f64,
    pub boundary_hat: f64,
    pub drift_hat: f64,
    pub non_decision_hat: f64,
}

/// Result of a full sweep, rows grouped by sample size in configured order.
#[derive(Debug, Clone, Default)]
pub struct SweepBatch {
    pub rows: Vec<TrialRow>,
    /// Repetitions dropped because recovery was degenerate for that draw.
    pub skipped: usize,
}

impl SweepBatch {
    pub fn rows_for_sample_size(&self, n: usize) -> usize {
        self.rows.iter().filter(|row| row.sample_size == n).count()
    }
}

pub fn run_sweep(config: &SweepConfig) -> Result<SweepBatch, EzError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut batch = SweepBatch::default();

    for &sample_size in &config.sample_sizes {
        for _ in 0..config.repetitions {
            let params = draw_parameters(config, &mut rng);
            let sample = simulate(&params, sample_size, config.scaling, &mut rng);
            let p = accuracy_probability(params.boundary, params.drift, config.scaling);

            match recover(&sample, p, config.scaling) {
                Ok(estimates) => batch.rows.push(TrialRow {
                    sample_size,
                    boundary: params.boundary,
                    drift: params.drift,
                    non_decision: params.non_decision,
                    boundary_hat: estimates.boundary,
                    drift_hat: estimates.drift,
                    non_decision_hat: estimates.non_decision,
                }),
                Err(_) => batch.skipped += 1,
            }
        }
    }

    Ok(batch)
}

fn draw_parameters<R: Rng>(config: &SweepConfig, rng: &mut R) -> ModelParameters {
    ModelParameters {
        boundary: config.boundary_range.sample(rng),
        drift: config.drift_range.sample(rng),
        non_decision: config.non_decision_range.sample(rng),
    }
}
