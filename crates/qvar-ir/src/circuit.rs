//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::observable::Observable;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered gate list over a fixed number of wires,
/// finished by one expectation-value measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits (wires).
    num_qubits: u32,
    /// Gates in application order.
    instructions: Vec<Instruction>,
    /// Observable measured at the end of the circuit.
    observable: Option<Observable>,
}

impl Circuit {
    /// Create a new empty circuit with no qubits.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_size(name, 0)
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
            observable: None,
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Append an instruction after checking its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let expected = instruction.gate.num_qubits();
        if instruction.qubits.len() != expected as usize {
            return Err(IrError::ArityMismatch {
                gate_name: instruction.name().to_string(),
                expected,
                got: instruction.qubits.len(),
            });
        }
        for (i, &q) in instruction.qubits.iter().enumerate() {
            self.check_qubit(q, instruction.name())?;
            if instruction.qubits[..i].contains(&q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    gate_name: instruction.name().to_string(),
                });
            }
        }
        self.instructions.push(instruction);
        Ok(self)
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: &str) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitNotFound {
                qubit,
                num_qubits: self.num_qubits,
                gate_name: gate_name.to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Ry(theta.into()),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CX,
            control,
            target,
        ))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CZ,
            control,
            target,
        ))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Set the observable whose expectation value the circuit returns.
    /// Replaces any previously set observable.
    pub fn expval(&mut self, observable: Observable) -> IrResult<&mut Self> {
        self.check_qubit(observable.qubit, "expval")?;
        self.observable = Some(observable);
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Gates in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The measured observable, if set.
    pub fn observable(&self) -> Option<Observable> {
        self.observable
    }

    /// The measured observable, or an error naming the circuit.
    pub fn require_observable(&self) -> IrResult<Observable> {
        self.observable
            .ok_or_else(|| IrError::MissingObservable(self.name.clone()))
    }

    /// Length of the parameter vector this circuit expects.
    pub fn num_parameters(&self) -> usize {
        self.instructions
            .iter()
            .filter_map(|inst| inst.gate.parameter().and_then(ParameterExpression::slot_index))
            .map(|slot| slot + 1)
            .max()
            .unwrap_or(0)
    }

    /// Indices of instructions whose angle reads the parameter vector,
    /// paired with the slot they read.
    pub fn parameterized_instructions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.instructions.iter().enumerate().filter_map(|(i, inst)| {
            inst.gate
                .parameter()
                .and_then(ParameterExpression::slot_index)
                .map(|slot| (i, slot))
        })
    }

    /// Circuit depth counted over the qubits each gate acts on.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.num_qubits()];
        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .map(|q| levels[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                levels[q.index()] = level;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variational() -> Circuit {
        let mut circuit = Circuit::with_size("variational", 2);
        circuit
            .ry(ParameterExpression::slot(0), QubitId(0))
            .unwrap()
            .ry(ParameterExpression::slot(1), QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .ry(ParameterExpression::slot(2), QubitId(0))
            .unwrap()
            .expval(Observable::z(QubitId(0)))
            .unwrap();
        circuit
    }

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert!(circuit.observable().is_none());
    }

    #[test]
    fn test_add_qubit() {
        let mut circuit = Circuit::new("test");
        assert_eq!(circuit.add_qubit(), QubitId(0));
        assert_eq!(circuit.add_qubit(), QubitId(1));
        assert_eq!(circuit.num_qubits(), 2);
    }

    #[test]
    fn test_variational_structure() {
        let circuit = variational();
        assert_eq!(circuit.instructions().len(), 4);
        assert_eq!(circuit.num_parameters(), 3);
        assert_eq!(circuit.depth(), 3);
        assert_eq!(circuit.observable(), Some(Observable::z(QubitId(0))));

        let slots: Vec<_> = circuit.parameterized_instructions().collect();
        assert_eq!(slots, vec![(0, 0), (1, 1), (3, 2)]);
    }

    #[test]
    fn test_constant_angles_need_no_parameters() {
        let mut circuit = Circuit::with_size("fixed", 1);
        circuit.rx(0.5, QubitId(0)).unwrap().h(QubitId(0)).unwrap();
        assert_eq!(circuit.num_parameters(), 0);
        assert_eq!(circuit.parameterized_instructions().count(), 0);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2);
        let err = circuit.h(QubitId(2)).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitNotFound {
                qubit: QubitId(2),
                num_qubits: 2,
                ..
            }
        ));
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_duplicate_qubit() {
        let mut circuit = Circuit::with_size("test", 2);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_operand_count_checked() {
        let mut circuit = Circuit::with_size("test", 2);
        let err = circuit
            .apply(Instruction::gate(StandardGate::CX, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::ArityMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
        assert!(matches!(
            circuit.apply(Instruction::gate(StandardGate::H, Vec::<QubitId>::new())),
            Err(IrError::ArityMismatch {
                expected: 1,
                got: 0,
                ..
            })
        ));
        assert!(matches!(
            circuit.apply(Instruction::gate(StandardGate::X, [QubitId(0), QubitId(1)])),
            Err(IrError::ArityMismatch { got: 2, .. })
        ));
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_missing_observable() {
        let circuit = Circuit::with_size("bare", 1);
        assert!(matches!(
            circuit.require_observable(),
            Err(IrError::MissingObservable(name)) if name == "bare"
        ));
    }

    #[test]
    fn test_observable_qubit_checked() {
        let mut circuit = Circuit::with_size("test", 1);
        assert!(circuit.expval(Observable::z(QubitId(1))).is_err());
    }

    #[test]
    fn test_serializes_gate_list() {
        let json = serde_json::to_value(variational()).unwrap();
        assert_eq!(json["name"], "variational");
        assert_eq!(json["instructions"].as_array().unwrap().len(), 4);
        assert_eq!(json["observable"]["op"], "Z");
    }
}
