//! Column layout shared by the text and image drawers.

use qvar_ir::{Circuit, Observable, QubitId, StandardGate};

use crate::error::{DrawError, DrawResult};

/// How a gate is drawn on one of its wires.
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    /// Boxed label, e.g. `RY(0.10)`.
    Boxed(String),
    /// Filled control dot.
    Control,
    /// CNOT target (⊕ in images, `X` in text).
    Target,
    /// Controlled-Z target, drawn as a second dot in images.
    PhaseTarget,
}

/// A gate placed in a layout column.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGate {
    /// Column index.
    pub layer: usize,
    /// Lowest wire the gate spans.
    pub lo: QubitId,
    /// Highest wire the gate spans.
    pub hi: QubitId,
    /// Glyph drawn on each operand wire.
    pub glyphs: Vec<(QubitId, Glyph)>,
}

impl PlacedGate {
    /// Glyph drawn on `wire`, if the gate acts on it.
    pub fn glyph_on(&self, wire: QubitId) -> Option<&Glyph> {
        self.glyphs
            .iter()
            .find(|(q, _)| *q == wire)
            .map(|(_, g)| g)
    }

    /// Check whether the gate's connector passes through `wire`.
    pub fn spans(&self, wire: QubitId) -> bool {
        self.lo <= wire && wire <= self.hi
    }

    /// Check whether the gate spans more than one wire.
    pub fn is_multi_wire(&self) -> bool {
        self.lo != self.hi
    }
}

/// A circuit instantiated with concrete angles and packed into columns.
///
/// Each gate goes into the first column after the last one occupied on
/// any wire it spans, including wires its connector crosses.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Number of wires.
    pub num_wires: usize,
    /// Number of columns.
    pub num_layers: usize,
    /// Gates in circuit order.
    pub gates: Vec<PlacedGate>,
    /// Observable drawn after the last column.
    pub observable: Option<Observable>,
}

impl Layout {
    /// Bind `params` into `circuit` and assign columns.
    pub fn new(circuit: &Circuit, params: &[f64], decimals: usize) -> DrawResult<Self> {
        let expected = circuit.num_parameters();
        if params.len() != expected {
            return Err(DrawError::ParameterCount {
                expected,
                got: params.len(),
            });
        }

        let mut next_free = vec![0usize; circuit.num_qubits()];
        let mut gates = Vec::with_capacity(circuit.instructions().len());

        for inst in circuit.instructions() {
            let (lo, hi) = inst.span();
            let wires = lo.index()..=hi.index();
            let layer = next_free[wires.clone()].iter().copied().max().unwrap_or(0);
            for slot in &mut next_free[wires] {
                *slot = layer + 1;
            }

            let glyphs = if inst.gate.is_controlled() {
                let target = match inst.gate {
                    StandardGate::CZ => Glyph::PhaseTarget,
                    _ => Glyph::Target,
                };
                vec![(inst.qubits[0], Glyph::Control), (inst.qubits[1], target)]
            } else {
                let text = gate_label(&inst.gate, params, decimals)?;
                inst.qubits
                    .iter()
                    .map(|&q| (q, Glyph::Boxed(text.clone())))
                    .collect()
            };

            gates.push(PlacedGate {
                layer,
                lo,
                hi,
                glyphs,
            });
        }

        let num_layers = gates.iter().map(|g| g.layer + 1).max().unwrap_or(0);
        Ok(Self {
            num_wires: circuit.num_qubits(),
            num_layers,
            gates,
            observable: circuit.observable(),
        })
    }

    /// Gates placed in column `layer`.
    pub fn gates_in(&self, layer: usize) -> impl Iterator<Item = &PlacedGate> {
        self.gates.iter().filter(move |g| g.layer == layer)
    }

    /// Longest boxed label in column `layer`, in characters.
    pub fn label_width(&self, layer: usize) -> usize {
        self.gates_in(layer)
            .flat_map(|g| g.glyphs.iter())
            .map(|(_, glyph)| match glyph {
                Glyph::Boxed(text) => text.chars().count(),
                _ => 1,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Drawing label for a single-qubit gate, e.g. `RY(0.10)` or `H`.
fn gate_label(gate: &StandardGate, params: &[f64], decimals: usize) -> DrawResult<String> {
    Ok(match gate.parameter() {
        Some(expr) => {
            let angle = expr.bind(params)?;
            format!("{}({:.*})", gate.label(), decimals, angle)
        }
        None => gate.label().to_string(),
    })
}
