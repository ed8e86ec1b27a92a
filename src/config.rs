use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::model::DEFAULT_SCALING;
use crate::EzError;

/// Closed interval a true parameter is drawn from, uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &str) -> Result<(), EzError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EzError::InvalidConfig(format!(
                "{name} bounds must be finite"
            )));
        }

        if self.max < self.min {
            return Err(EzError::InvalidConfig(format!(
                "{name} max must be greater than or equal to min"
            )));
        }

        Ok(())
    }

    fn validate_positive(&self, name: &str) -> Result<(), EzError> {
        self.validate(name)?;
        if self.min <= 0.0 {
            return Err(EzError::InvalidConfig(format!(
                "{name} bounds must be strictly positive"
            )));
        }
        Ok(())
    }
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub sample_sizes: Vec<usize>,
    #[serde_as(as = "DefaultOnNull")]
    pub repetitions: usize,
    pub boundary_range: ParamRange,
    pub drift_range: ParamRange,
    pub non_decision_range: ParamRange,
    #[serde_as(as = "DefaultOnNull")]
    pub scaling: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sample_sizes: vec![10, 40, 4000],
            repetitions: 1000,
            boundary_range: ParamRange::new(0.5, 2.0),
            drift_range: ParamRange::new(0.5, 2.0),
            non_decision_range: ParamRange::new(0.1, 0.5),
            scaling: DEFAULT_SCALING,
            seed: 0xE2DF_2026_u64,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), EzError> {
        if self.sample_sizes.is_empty() {
            return Err(EzError::InvalidConfig(
                "sample_sizes must not be empty".to_string(),
            ));
        }

        if self.sample_sizes.iter().any(|&n| n == 0) {
            return Err(EzError::InvalidConfig(
                "sample_sizes must contain only values greater than zero".to_string(),
            ));
        }

        if self.repetitions == 0 {
            return Err(EzError::InvalidConfig(
                "repetitions must be greater than zero".to_string(),
            ));
        }

        self.boundary_range.validate_positive("boundary_range")?;
        self.drift_range.validate_positive("drift_range")?;

        self.non_decision_range.validate("non_decision_range")?;
        if self.non_decision_range.min < 0.0 {
            return Err(EzError::InvalidConfig(
                "non_decision_range bounds must be non-negative".to_string(),
            ));
        }

        if !self.scaling.is_finite() || self.scaling <= 0.0 {
            return Err(EzError::InvalidConfig(
                "scaling must be finite and strictly positive".to_string(),
            ));
        }

        Ok(())
    }
}
