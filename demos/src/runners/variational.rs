//! Variational optimization of the two-qubit ansatz.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use qvar_sim::{CircuitEvaluator, Differentiable, SimResult};

use crate::optimizers::{GradientDescent, Optimizer, StepReport};

/// Result of a variational run.
#[derive(Debug, Clone)]
pub struct VariationalResult {
    /// Parameters the run started from.
    pub initial_params: Vec<f64>,
    /// Cost at `initial_params`.
    pub initial_cost: f64,
    /// Parameters after the last update.
    pub final_params: Vec<f64>,
    /// Cost at `final_params`.
    pub final_cost: f64,
    /// Cost before the first update and after each update.
    pub history: Vec<f64>,
}

impl VariationalResult {
    /// Decrease in cost over the run.
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.final_cost
    }
}

/// Drives a [`GradientDescent`] over a circuit evaluator.
#[derive(Debug, Clone)]
pub struct VariationalRunner {
    evaluator: CircuitEvaluator,
    optimizer: GradientDescent,
    seed: Option<u64>,
}

impl VariationalRunner {
    /// Runner with the default optimizer and an entropy-seeded RNG.
    pub fn new(evaluator: CircuitEvaluator) -> Self {
        Self {
            evaluator,
            optimizer: GradientDescent::default(),
            seed: None,
        }
    }

    /// Replace the optimizer.
    pub fn with_optimizer(mut self, optimizer: GradientDescent) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Draw initial parameters from a fixed seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Initial parameters, uniform in [0, 1).
    pub fn initial_parameters(&self) -> Vec<f64> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        (0..self.evaluator.num_parameters())
            .map(|_| rng.r#gen::<f64>())
            .collect()
    }

    /// Optimize from random initial parameters.
    pub fn run<F>(&self, observer: F) -> SimResult<VariationalResult>
    where
        F: FnMut(&StepReport<'_>),
    {
        self.run_with_params(self.initial_parameters(), observer)
    }

    /// Optimize from the given initial parameters.
    pub fn run_with_params<F>(&self, initial: Vec<f64>, observer: F) -> SimResult<VariationalResult>
    where
        F: FnMut(&StepReport<'_>),
    {
        let initial_params = initial.clone();
        let result = self.optimizer.minimize(&self.evaluator, initial, observer)?;
        info!(
            initial_cost = result.initial_value,
            final_cost = result.optimal_value,
            evaluations = result.num_evaluations,
            gradients = result.num_gradient_evaluations,
            "Optimization finished"
        );

        Ok(VariationalResult {
            initial_params,
            initial_cost: result.initial_value,
            final_params: result.optimal_params,
            final_cost: result.optimal_value,
            history: result.history,
        })
    }

    /// Cost at `params`.
    pub fn cost(&self, params: &[f64]) -> SimResult<f64> {
        self.evaluator.cost(params)
    }
}
