//! The two-qubit variational ansatz.
//!
//! ```text
//! 0: ──RY(θ0)──╭●──RY(θ2)─┤  <Z>
//! 1: ──RY(θ1)──╰X─────────┤
//! ```
//!
//! The cost is ⟨Z⟩ on qubit 0, which works out to
//! `cos θ0 · cos θ2 − sin θ0 · sin θ1 · sin θ2`.

use qvar_ir::{Circuit, IrResult, Observable, ParameterExpression, QubitId};

/// Number of trainable angles.
pub const NUM_PARAMETERS: usize = 3;

/// Angles used to draw the circuit before training.
pub const PREVIEW_PARAMS: [f64; NUM_PARAMETERS] = [0.1, 0.2, 0.3];

/// Build the ansatz: RY(θ0) q0, RY(θ1) q1, CX q0→q1, RY(θ2) q0, measure ⟨Z0⟩.
pub fn variational_circuit() -> IrResult<Circuit> {
    let (q0, q1) = (QubitId(0), QubitId(1));
    let mut circuit = Circuit::with_size("variational", 2);
    circuit
        .ry(ParameterExpression::slot(0), q0)?
        .ry(ParameterExpression::slot(1), q1)?
        .cx(q0, q1)?
        .ry(ParameterExpression::slot(2), q0)?
        .expval(Observable::z(q0))?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qvar_ir::{PauliOp, StandardGate};

    #[test]
    fn test_variational_circuit_shape() {
        let circuit = variational_circuit().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_parameters(), NUM_PARAMETERS);
        assert_eq!(circuit.instructions().len(), 4);
        assert_eq!(circuit.depth(), 3);

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["ry", "ry", "cx", "ry"]);
        assert_eq!(circuit.instructions()[2].gate, StandardGate::CX);
        assert_eq!(circuit.instructions()[2].qubits, vec![QubitId(0), QubitId(1)]);

        let obs = circuit.observable().unwrap();
        assert_eq!(obs.op, PauliOp::Z);
        assert_eq!(obs.qubit, QubitId(0));
    }

    #[test]
    fn test_slots_in_gate_order() {
        let circuit = variational_circuit().unwrap();
        let slots: Vec<_> = circuit.parameterized_instructions().map(|(_, s)| s).collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }
}
