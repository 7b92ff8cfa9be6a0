//! Derivative-free minimization.
//!
//! Curve calibration minimizes a sum-of-squares objective over the free
//! discount factors. The objective is cheap but has no analytic gradient,
//! so the default algorithm is Powell's direction-set method, which needs
//! only function evaluations.
//!
//! The [`Minimizer`] trait decouples the calibration engine from the
//! concrete algorithm; tests substitute deterministic stubs.

mod powell;

pub use powell::{PowellConfig, PowellMinimizer};

use crate::error::MathResult;

/// Result of a minimization run.
#[derive(Debug, Clone)]
pub struct MinimizerResult {
    /// Parameters at the minimum found.
    pub parameters: Vec<f64>,
    /// Objective function value at the minimum.
    pub objective_value: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Whether the run satisfied the convergence criterion.
    pub converged: bool,
}

/// A multi-dimensional minimizer driven purely by function evaluations.
pub trait Minimizer: Send + Sync {
    /// Minimizes `objective` starting from `initial`.
    ///
    /// Implementations return the best point found even when the
    /// convergence criterion was not met; callers inspect
    /// [`MinimizerResult::converged`].
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is empty or the objective is not
    /// finite at the starting point.
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        initial: &[f64],
    ) -> MathResult<MinimizerResult>;
}
