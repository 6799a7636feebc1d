//! Fixed-step gradient descent.
//!
//! Each update moves the parameters against the gradient:
//! `θ ← θ − η ∇f(θ)`. There is no line search and no convergence test; the
//! optimizer always performs the configured number of updates.

use tracing::debug;

use qvar_sim::{Differentiable, SimResult};

use super::{OptimizationResult, Optimizer, StepReport};

/// Gradient descent with a constant step size.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescent {
    /// Step size η.
    pub stepsize: f64,
    /// Number of updates.
    pub steps: usize,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            stepsize: 0.4,
            steps: 10,
        }
    }
}

impl GradientDescent {
    /// Create an optimizer with step size 0.4 and 10 updates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step size.
    pub fn with_stepsize(mut self, stepsize: f64) -> Self {
        self.stepsize = stepsize;
        self
    }

    /// Set the number of updates.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Perform a single update and return the new parameters.
    pub fn step<D>(&self, objective: &D, params: &[f64]) -> SimResult<Vec<f64>>
    where
        D: Differentiable + ?Sized,
    {
        let grad = objective.gradient(params)?;
        Ok(params
            .iter()
            .zip(&grad)
            .map(|(p, g)| p - self.stepsize * g)
            .collect())
    }
}

impl Optimizer for GradientDescent {
    fn minimize<D, F>(
        &self,
        objective: &D,
        initial: Vec<f64>,
        mut observer: F,
    ) -> SimResult<OptimizationResult>
    where
        D: Differentiable + ?Sized,
        F: FnMut(&StepReport<'_>),
    {
        let initial_value = objective.cost(&initial)?;
        let mut history = Vec::with_capacity(self.steps + 1);
        history.push(initial_value);
        debug!(
            stepsize = self.stepsize,
            steps = self.steps,
            initial_value,
            "Starting gradient descent"
        );

        let mut params = initial;
        let mut cost = initial_value;
        for step in 1..=self.steps {
            params = self.step(objective, &params)?;
            cost = objective.cost(&params)?;
            history.push(cost);
            debug!(step, cost, ?params, "Gradient descent update");
            observer(&StepReport {
                step,
                cost,
                params: &params,
            });
        }

        Ok(OptimizationResult {
            optimal_params: params,
            optimal_value: cost,
            initial_value,
            num_iterations: self.steps,
            num_evaluations: self.steps + 1,
            num_gradient_evaluations: self.steps,
            history,
        })
    }
}
