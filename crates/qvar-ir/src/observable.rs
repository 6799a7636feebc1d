//! Measured observables.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PauliOp::I => "I",
            PauliOp::X => "X",
            PauliOp::Y => "Y",
            PauliOp::Z => "Z",
        };
        f.write_str(s)
    }
}

/// Expectation-value measurement of a Pauli operator on one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observable {
    /// The operator measured.
    pub op: PauliOp,
    /// The qubit it acts on.
    pub qubit: QubitId,
}

impl Observable {
    /// Pauli-Z on `qubit`.
    pub fn z(qubit: QubitId) -> Self {
        Self {
            op: PauliOp::Z,
            qubit,
        }
    }

    /// Pauli-X on `qubit`.
    pub fn x(qubit: QubitId) -> Self {
        Self {
            op: PauliOp::X,
            qubit,
        }
    }

    /// Pauli-Y on `qubit`.
    pub fn y(qubit: QubitId) -> Self {
        Self {
            op: PauliOp::Y,
            qubit,
        }
    }
}

/// Renders as the diagram terminal, e.g. `<Z>`.
impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.op)
    }
}
