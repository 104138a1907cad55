//! Tolerance defaults and loop configuration.
//!
//! Policy
//! - The noise floor is a fixed constant shared by every degenerate-case
//!   check. Changing it in one place only would let the zero-direction,
//!   collinearity and threshold checks disagree on what "zero" means.

/// Numerical noise floor: `1000 * f64::EPSILON`.
///
/// Used for the coincident-centroid short-circuit, the collinear-simplex
/// fallback and the minimum accepted threshold.
pub const NOISE_EPS: f64 = 1000.0 * f64::EPSILON;

/// Iteration cap used by `within_distance`.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// GJK loop configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GjkCfg {
    /// Upper bound on simplex refinements; must be positive.
    pub max_iterations: usize,
}

impl Default for GjkCfg {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
