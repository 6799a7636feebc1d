//! Circuit evaluation and parameter-shift differentiation.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use qvar_ir::{Circuit, Observable};

use crate::device::DeviceConfig;
use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Shift applied to a rotation angle by the parameter-shift rule.
pub const PARAMETER_SHIFT: f64 = FRAC_PI_2;

/// A scalar cost over a parameter vector that can report its own gradient.
///
/// This is the seam between a circuit and the classical optimizer driving it.
pub trait Differentiable {
    /// Length of the parameter vector the cost expects.
    fn num_parameters(&self) -> usize;

    /// Evaluate the cost.
    fn cost(&self, params: &[f64]) -> SimResult<f64>;

    /// Gradient of the cost with respect to each parameter.
    fn gradient(&self, params: &[f64]) -> SimResult<Vec<f64>>;
}

/// Evaluates a circuit's observable on a device by exact statevector
/// simulation.
#[derive(Debug, Clone)]
pub struct CircuitEvaluator {
    device: DeviceConfig,
    circuit: Circuit,
    observable: Observable,
    num_parameters: usize,
}

impl CircuitEvaluator {
    /// Bind a circuit to a device.
    ///
    /// Fails when the circuit has no observable or needs more wires than
    /// the device has.
    pub fn new(device: DeviceConfig, circuit: Circuit) -> SimResult<Self> {
        let observable = circuit.require_observable()?;
        if !device.fits(circuit.num_qubits()) {
            return Err(SimError::DeviceTooSmall {
                device: device.name.clone(),
                wires: device.wires,
                required: circuit.num_qubits(),
            });
        }
        let num_parameters = circuit.num_parameters();
        debug!(
            "Evaluator ready: circuit '{}' on {}, {} parameters",
            circuit.name(),
            device,
            num_parameters
        );
        Ok(Self {
            device,
            circuit,
            observable,
            num_parameters,
        })
    }

    /// The device this evaluator simulates on.
    pub fn device(&self) -> &DeviceConfig {
        &self.device
    }

    /// The circuit being evaluated.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Length of the parameter vector [`evaluate`](Self::evaluate) expects.
    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    fn check_params(&self, params: &[f64]) -> SimResult<()> {
        if params.len() != self.num_parameters {
            return Err(SimError::ParameterCount {
                expected: self.num_parameters,
                got: params.len(),
            });
        }
        if let Some((index, &value)) = params.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::NonFiniteParameter { index, value });
        }
        Ok(())
    }

    /// Run the circuit from |0…0⟩, adding `shift` to the angle of the
    /// instruction at `shifted`.
    fn simulate(&self, params: &[f64], shifted: Option<(usize, f64)>) -> SimResult<Statevector> {
        let mut state = Statevector::new(self.device.wires as usize);
        for (i, inst) in self.circuit.instructions().iter().enumerate() {
            let shift = match shifted {
                Some((at, s)) if at == i => s,
                _ => 0.0,
            };
            state.apply(inst, params, shift)?;
        }
        Ok(state)
    }

    /// Final state of the circuit for `params`.
    pub fn statevector(&self, params: &[f64]) -> SimResult<Statevector> {
        self.check_params(params)?;
        self.simulate(params, None)
    }

    /// Expectation value of the observable for `params`, in [-1, 1].
    pub fn evaluate(&self, params: &[f64]) -> SimResult<f64> {
        self.check_params(params)?;
        let value = self
            .simulate(params, None)?
            .expectation(&self.observable);
        trace!(?params, value, "evaluated circuit");
        Ok(value)
    }

    /// Gradient of [`evaluate`](Self::evaluate) by the parameter-shift rule.
    ///
    /// Each rotation reading slot `k` contributes
    /// `[f(θ + π/2) − f(θ − π/2)] / 2` to component `k`, so slots shared by
    /// several gates get the sum of their contributions.
    pub fn gradient(&self, params: &[f64]) -> SimResult<Vec<f64>> {
        self.check_params(params)?;
        let mut grad = vec![0.0; self.num_parameters];
        for (index, slot) in self.circuit.parameterized_instructions() {
            let plus = self
                .simulate(params, Some((index, PARAMETER_SHIFT)))?
                .expectation(&self.observable);
            let minus = self
                .simulate(params, Some((index, -PARAMETER_SHIFT)))?
                .expectation(&self.observable);
            grad[slot] += (plus - minus) / 2.0;
        }
        trace!(?grad, "parameter-shift gradient");
        Ok(grad)
    }

    /// Cost and gradient in one call.
    pub fn cost_and_gradient(&self, params: &[f64]) -> SimResult<(f64, Vec<f64>)> {
        Ok((self.evaluate(params)?, self.gradient(params)?))
    }
}

impl Differentiable for CircuitEvaluator {
    fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    fn cost(&self, params: &[f64]) -> SimResult<f64> {
        self.evaluate(params)
    }

    fn gradient(&self, params: &[f64]) -> SimResult<Vec<f64>> {
        CircuitEvaluator::gradient(self, params)
    }
}
