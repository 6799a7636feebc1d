//! qvar Simulator: exact statevector evaluation of variational circuits.
//!
//! A [`CircuitEvaluator`] binds a [`qvar_ir::Circuit`] to a [`DeviceConfig`]
//! and returns the expectation value of the circuit's observable for a given
//! parameter vector, together with its gradient by the parameter-shift rule.
//! Simulation is exact: there is no shot sampling, so results are
//! deterministic.
//!
//! # Quick start
//!
//! ```rust
//! use qvar_ir::{Circuit, Observable, ParameterExpression, QubitId};
//! use qvar_sim::{CircuitEvaluator, DeviceConfig};
//!
//! let mut circuit = Circuit::with_size("single", 1);
//! circuit
//!     .ry(ParameterExpression::slot(0), QubitId(0)).unwrap()
//!     .expval(Observable::z(QubitId(0))).unwrap();
//!
//! let eval = CircuitEvaluator::new(DeviceConfig::default_qubit(1), circuit).unwrap();
//! let theta = 0.4_f64;
//! assert!((eval.evaluate(&[theta]).unwrap() - theta.cos()).abs() < 1e-12);
//! assert!((eval.gradient(&[theta]).unwrap()[0] + theta.sin()).abs() < 1e-12);
//! ```

pub mod device;
pub mod error;
pub mod evaluator;
pub mod statevector;

pub use device::DeviceConfig;
pub use error::{SimError, SimResult};
pub use evaluator::{CircuitEvaluator, Differentiable, PARAMETER_SHIFT};
pub use statevector::Statevector;
