//! qvar Circuit Description
//!
//! Core data structures for the variational circuits qvar simulates and
//! draws: qubits, gates, parameter slots, instructions and the measured
//! observable.
//!
//! # Example: The Demo Ansatz
//!
//! ```rust
//! use qvar_ir::{Circuit, Observable, ParameterExpression, QubitId};
//!
//! let mut circuit = Circuit::with_size("variational", 2);
//! circuit
//!     .ry(ParameterExpression::slot(0), QubitId(0)).unwrap()
//!     .ry(ParameterExpression::slot(1), QubitId(1)).unwrap()
//!     .cx(QubitId(0), QubitId(1)).unwrap()
//!     .ry(ParameterExpression::slot(2), QubitId(0)).unwrap()
//!     .expval(Observable::z(QubitId(0))).unwrap();
//!
//! assert_eq!(circuit.num_parameters(), 3);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod observable;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use observable::{Observable, PauliOp};
pub use parameter::ParameterExpression;
pub use qubit::QubitId;
