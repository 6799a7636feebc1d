//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// A gate applied to concrete qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate to apply.
    pub gate: StandardGate,
    /// Qubits this instruction operates on; for controlled gates the
    /// control comes first.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Name of the underlying gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Lowest and highest wire touched by this instruction.
    pub fn span(&self) -> (QubitId, QubitId) {
        let lo = self.qubits.iter().min().copied().unwrap_or(QubitId(0));
        let hi = self.qubits.iter().max().copied().unwrap_or(QubitId(0));
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_orders_operands() {
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(2), QubitId(0));
        assert_eq!(inst.span(), (QubitId(0), QubitId(2)));
        assert_eq!(inst.name(), "cx");
    }
}
