//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or binding a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit with {num_qubits} qubits (gate: {gate_name})")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
        /// Gate that referenced the qubit.
        gate_name: String,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Gate that repeated the qubit.
        gate_name: String,
    },

    /// Gate applied to the wrong number of qubits.
    #[error("Gate {gate_name} acts on {expected} qubits, got {got}")]
    ArityMismatch {
        /// Gate name.
        gate_name: String,
        /// Number of qubits the gate acts on.
        expected: u32,
        /// Number of operands supplied.
        got: usize,
    },

    /// Parameter slot has no value in the supplied parameter vector.
    #[error("Parameter slot {slot} is unbound (parameter vector has {len} entries)")]
    UnboundParameter {
        /// The slot index referenced by a gate.
        slot: usize,
        /// Length of the parameter vector supplied for binding.
        len: usize,
    },

    /// Circuit has no observable to measure.
    #[error("Circuit '{0}' has no observable")]
    MissingObservable(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
