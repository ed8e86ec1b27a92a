//! Closed-form EZ-diffusion parameter recovery.
//!
//! The inversion works from three numbers only: the sample mean, the
//! population variance (divide by N, matching the generator's role as
//! ground truth), and the probit of the theoretical accuracy probability.
//! Degenerate inputs are expected in normal operation at small sample sizes,
//! so they are reported as an explicit error value the sweep can branch on
//! rather than a panic.

use statrs::distribution::{ContinuousCDF, Normal};
use thiserror::Error;

/// Point estimates produced by one inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveredParameters {
    pub boundary: f64,
    pub drift: f64,
    pub non_decision: f64,
}

/// Per-iteration recovery failures. These never abort a sweep; the harness
/// skips the offending iteration and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecoveryError {
    /// Accuracy probability outside the open interval (0, 1); the probit is
    /// undefined or infinite there.
    #[error("accuracy probability {p} is outside the open interval (0, 1)")]
    DegenerateAccuracy { p: f64 },
    /// Empty sample or non-positive sample variance.
    #[error("sample variance {variance} is not strictly positive")]
    DegenerateSample { variance: f64 },
    /// The boundary estimate came out exactly zero and cannot be used as a
    /// divisor for the drift estimate.
    #[error("boundary estimate is zero")]
    ZeroBoundary,
    /// An estimate overflowed or otherwise left the finite range.
    #[error("recovered estimates are not finite")]
    NonFiniteEstimate,
}

/// Recovers `{a, v, t}` estimates from a response time sample and the
/// theoretical accuracy probability `p`.
pub fn recover(
    sample: &[f64],
    accuracy: f64,
    scaling: f64,
) -> Result<RecoveredParameters, RecoveryError> {
    if !(accuracy > 0.0 && accuracy < 1.0) {
        return Err(RecoveryError::DegenerateAccuracy { p: accuracy });
    }

    let (mean_rt, var_rt) = mean_and_population_variance(sample);
    if var_rt <= 0.0 {
        return Err(RecoveryError::DegenerateSample { variance: var_rt });
    }

    let l = probit(accuracy);
    let s2 = scaling * scaling;

    let boundary = s2 * l / var_rt.sqrt();
    if boundary == 0.0 {
        return Err(RecoveryError::ZeroBoundary);
    }

    let drift = scaling * l * mean_rt / boundary;
    let non_decision = mean_rt - (boundary / drift) * (1.0 - (-drift * boundary / s2).exp());

    let recovered = RecoveredParameters {
        boundary,
        drift,
        non_decision,
    };
    if !recovered.boundary.is_finite()
        || !recovered.drift.is_finite()
        || !recovered.non_decision.is_finite()
    {
        return Err(RecoveryError::NonFiniteEstimate);
    }

    Ok(recovered)
}

/// Inverse standard-normal CDF.
fn probit(p: f64) -> f64 {
    Normal::standard().inverse_cdf(p)
}

fn mean_and_population_variance(sample: &[f64]) -> (f64, f64) {
    if sample.is_empty() {
        return (0.0, 0.0);
    }

    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (mean, variance)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{probit, recover, RecoveryError};
    use crate::model::{accuracy_probability, ModelParameters, DEFAULT_SCALING};
    use crate::simulate::simulate;

    #[test]
    fn probit_matches_reference_values() {
        assert!(probit(0.5).abs() < 1.0e-12);
        assert!((probit(0.975) - 1.959_964).abs() < 1.0e-4);
        assert!((probit(0.025) + 1.959_964).abs() < 1.0e-4);
    }

    #[test]
    fn boundary_accuracy_values_are_rejected() {
        let sample = vec![0.9, 1.1, 1.3];
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            let err = recover(&sample, p, DEFAULT_SCALING).unwrap_err();
            assert!(matches!(err, RecoveryError::DegenerateAccuracy { .. }), "p = {p}");
        }
    }

    #[test]
    fn constant_sample_is_rejected() {
        let sample = vec![1.0; 50];
        let err = recover(&sample, 0.9, DEFAULT_SCALING).unwrap_err();
        assert!(matches!(err, RecoveryError::DegenerateSample { .. }));
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = recover(&[], 0.9, DEFAULT_SCALING).unwrap_err();
        assert!(matches!(err, RecoveryError::DegenerateSample { .. }));
    }

    #[test]
    fn chance_level_accuracy_yields_zero_boundary() {
        // probit(0.5) = 0, so the boundary estimate collapses to zero.
        let sample = vec![0.9, 1.1, 1.3, 1.5];
        let err = recover(&sample, 0.5, DEFAULT_SCALING).unwrap_err();
        assert_eq!(err, RecoveryError::ZeroBoundary);
    }

    #[test]
    fn large_sample_recovery_is_stable() {
        let params = ModelParameters {
            boundary: 1.0,
            drift: 1.0,
            non_decision: 0.3,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let sample = simulate(&params, 4000, DEFAULT_SCALING, &mut rng);
        let p = accuracy_probability(params.boundary, params.drift, DEFAULT_SCALING);
        assert!((p - 0.999_999_997_9).abs() < 1.0e-8);

        let recovered = recover(&sample, p, DEFAULT_SCALING).unwrap();

        // With sigma(RT) = 0.1 and L = probit(p) = 5.88 the inversion's
        // fixed points are a_hat = s^2 L / sigma = 0.588, v_hat =
        // MRT sigma / s = 1.3 and t_hat = MRT - a_hat / v_hat = 0.848.
        // At N = 4000 the sampling noise on each is around one percent.
        assert!((recovered.boundary - 0.588).abs() < 0.05, "{recovered:?}");
        assert!((recovered.drift - 1.3).abs() < 0.08, "{recovered:?}");
        assert!((recovered.non_decision - 0.848).abs() < 0.05, "{recovered:?}");
    }

    #[test]
    fn estimate_spread_shrinks_with_sample_size() {
        let params = ModelParameters {
            boundary: 1.0,
            drift: 1.0,
            non_decision: 0.3,
        };
        let p = accuracy_probability(params.boundary, params.drift, DEFAULT_SCALING);

        let spread = |n: usize, seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let drifts: Vec<f64> = (0..200)
                .filter_map(|_| {
                    let sample = simulate(&params, n, DEFAULT_SCALING, &mut rng);
                    recover(&sample, p, DEFAULT_SCALING).ok()
                })
                .map(|r| r.drift)
                .collect();
            assert!(drifts.len() > 150, "too many failures at n = {n}");
            let mean = drifts.iter().sum::<f64>() / drifts.len() as f64;
            drifts.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / drifts.len() as f64
        };

        let var_small = spread(10, 21);
        let var_large = spread(4000, 22);
        assert!(
            var_large < var_small / 10.0,
            "var at N=4000 ({var_large}) not well below var at N=10 ({var_small})"
        );
    }
}
