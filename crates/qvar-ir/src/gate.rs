//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// Standard gates with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    /// Hadamard gate.
    H,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),

    // Two-qubit gates, first operand is the control
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
        }
    }

    /// Label drawn in circuit diagrams. Controlled gates are labelled by
    /// the operation applied to the target.
    pub fn label(&self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X | StandardGate::CX => "X",
            StandardGate::Y => "Y",
            StandardGate::Z | StandardGate::CZ => "Z",
            StandardGate::H => "H",
            StandardGate::Rx(_) => "RX",
            StandardGate::Ry(_) => "RY",
            StandardGate::Rz(_) => "RZ",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX | StandardGate::CZ => 2,
            _ => 1,
        }
    }

    /// Check whether the first operand acts as a control.
    pub fn is_controlled(&self) -> bool {
        matches!(self, StandardGate::CX | StandardGate::CZ)
    }

    /// Get the rotation angle of this gate, if it has one.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        match self {
            StandardGate::Rx(p) | StandardGate::Ry(p) | StandardGate::Rz(p) => Some(p),
            _ => None,
        }
    }

    /// Check if this gate reads the parameter vector.
    pub fn is_parameterized(&self) -> bool {
        self.parameter().is_some_and(ParameterExpression::is_symbolic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::CX.name(), "cx");
        assert_eq!(StandardGate::Ry(ParameterExpression::slot(0)).name(), "ry");
    }

    #[test]
    fn test_gate_arity() {
        assert_eq!(StandardGate::X.num_qubits(), 1);
        assert_eq!(StandardGate::Rz(0.5.into()).num_qubits(), 1);
        assert_eq!(StandardGate::CZ.num_qubits(), 2);
    }

    #[test]
    fn test_parameterized() {
        assert!(StandardGate::Ry(ParameterExpression::slot(0)).is_parameterized());
        assert!(!StandardGate::Ry(0.3.into()).is_parameterized());
        assert!(!StandardGate::CX.is_parameterized());
        assert!(StandardGate::CX.parameter().is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(StandardGate::Ry(0.1.into()).label(), "RY");
        assert_eq!(StandardGate::CX.label(), "X");
        assert!(StandardGate::CX.is_controlled());
        assert!(!StandardGate::H.is_controlled());
    }
}
