//! Classical optimizers for the variational loop.

pub mod gradient_descent;

pub use gradient_descent::GradientDescent;

use qvar_sim::{Differentiable, SimResult};

/// Progress reported to an observer after every optimizer update.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport<'a> {
    /// Update number, starting at 1.
    pub step: usize,
    /// Cost at the updated parameters.
    pub cost: f64,
    /// Parameters after the update.
    pub params: &'a [f64],
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Final parameter values.
    pub optimal_params: Vec<f64>,
    /// Cost at `optimal_params`.
    pub optimal_value: f64,
    /// Cost at the initial parameters.
    pub initial_value: f64,
    /// Number of updates performed.
    pub num_iterations: usize,
    /// Number of cost evaluations.
    pub num_evaluations: usize,
    /// Number of gradient evaluations.
    pub num_gradient_evaluations: usize,
    /// `history[0]` is the initial cost, `history[k]` the cost after update `k`.
    pub history: Vec<f64>,
}

/// A minimizer of a [`Differentiable`] cost.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial`, calling `observer`
    /// after every update.
    ///
    /// Errors from the objective abort the run.
    fn minimize<D, F>(
        &self,
        objective: &D,
        initial: Vec<f64>,
        observer: F,
    ) -> SimResult<OptimizationResult>
    where
        D: Differentiable + ?Sized,
        F: FnMut(&StepReport<'_>);
}
