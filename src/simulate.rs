//! Response time generator.
//!
//! Decision time is drawn from an Inverse-Gaussian (Wald) distribution with
//! mean `a / v` and shape `a² / s²`; the constant non-decision time is added
//! on top. The distribution's support is the positive reals, so every
//! generated response time is strictly greater than the non-decision time.

use rand::Rng;
use rand_distr::{Distribution, InverseGaussian};

use crate::model::ModelParameters;

/// Draws `n` simulated response times for the given true parameters.
///
/// The drift rate must be strictly positive: a non-positive drift would put
/// the decision-time mean `a / v` outside the Inverse-Gaussian's support.
/// Randomness comes entirely from the caller-supplied stream, so a seeded
/// generator reproduces the sample exactly.
pub fn simulate<R: Rng>(params: &ModelParameters, n: usize, scaling: f64, rng: &mut R) -> Vec<f64> {
    assert!(n > 0, "n must be > 0");
    assert!(params.boundary > 0.0, "boundary must be > 0");
    assert!(params.drift > 0.0, "drift must be > 0");
    assert!(params.non_decision >= 0.0, "non_decision must be >= 0");
    assert!(scaling > 0.0, "scaling must be > 0");

    let mean = params.boundary / params.drift;
    let shape = params.boundary * params.boundary / (scaling * scaling);
    let decision_time = InverseGaussian::new(mean, shape).expect("positive mean and shape");

    (0..n)
        .map(|_| params.non_decision + decision_time.sample(rng))
        .collect()
}
