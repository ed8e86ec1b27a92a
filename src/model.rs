//! Core EZ-diffusion quantities shared by the generator and the recoverer.
//!
//! The accuracy probability here is the *theoretical* probability of a
//! correct decision derived from the true parameters, not a proportion
//! measured from simulated error trials. The generator never produces error
//! trials, so the theoretical value is the only accuracy signal available to
//! the inversion. This is a deliberate simplification of canonical
//! EZ-diffusion recovery, which works from observed proportion correct.

use serde::{Deserialize, Serialize};

/// Diffusion noise scale, fixed by convention.
pub const DEFAULT_SCALING: f64 = 0.1;

/// True generative parameters for one simulated subject/condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Boundary separation `a`, strictly positive.
    pub boundary: f64,
    /// Drift rate `v`, strictly positive here (the decision-time mean `a/v`
    /// must stay inside the Inverse-Gaussian's support).
    pub drift: f64,
    /// Non-decision time `t`, non-negative.
    pub non_decision: f64,
}

/// Theoretical probability of a correct decision under an unbiased starting
/// point: `1 / (1 + exp(-2·a·v / s))`.
///
/// Total for `a > 0`, `s > 0` and any finite `v`; strictly increasing in
/// `v`, equal to 0.5 at `v = 0`, and bounded in the open interval (0, 1).
/// For large `a·v / s` the result saturates to 1.0 in f64; callers that
/// feed the result into a probit must treat that as a degenerate case.
pub fn accuracy_probability(boundary: f64, drift: f64, scaling: f64) -> f64 {
    1.0 / (1.0 + (-2.0 * boundary * drift / scaling).exp())
}
