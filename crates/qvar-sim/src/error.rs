//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while evaluating a circuit or its gradient.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Parameter vector length does not match the circuit.
    #[error("Circuit expects {expected} parameters, got {got}")]
    ParameterCount {
        /// Number of parameters the circuit reads.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// A parameter is NaN or infinite.
    #[error("Parameter {index} is not finite ({value})")]
    NonFiniteParameter {
        /// Position in the parameter vector.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The circuit uses more wires than the device provides.
    #[error("Device '{device}' has {wires} wires but the circuit needs {required}")]
    DeviceTooSmall {
        /// Device name.
        device: String,
        /// Wires available on the device.
        wires: u32,
        /// Wires required by the circuit.
        required: usize,
    },

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qvar_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
