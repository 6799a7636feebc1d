//! Text circuit diagrams.
//!
//! ```text
//! 0: ──RY(0.10)──╭●──RY(0.30)─┤  <Z>
//! 1: ──RY(0.20)──╰X───────────┤
//! ```

use qvar_ir::{Circuit, QubitId};

use crate::error::DrawResult;
use crate::layout::{Glyph, Layout, PlacedGate};

/// Options for [`draw_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Digits after the decimal point in rotation labels.
    pub decimals: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Draw `circuit` instantiated with `params` as a unicode diagram.
///
/// The output depends only on its arguments.
pub fn draw_text(circuit: &Circuit, params: &[f64], options: &TextOptions) -> DrawResult<String> {
    let layout = Layout::new(circuit, params, options.decimals)?;
    Ok(render(&layout))
}

/// Render an already computed layout.
pub fn render(layout: &Layout) -> String {
    let label_width = layout.num_wires.saturating_sub(1).to_string().len();
    let mut lines: Vec<String> = (0..layout.num_wires)
        .map(|w| format!("{w:>label_width$}: ─"))
        .collect();

    for layer in 0..layout.num_layers {
        let cells: Vec<String> = (0..layout.num_wires)
            .map(|w| cell(layout, layer, QubitId::from(w)))
            .collect();
        let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        for (line, cell) in lines.iter_mut().zip(&cells) {
            line.push('─');
            line.push_str(cell);
            let fill = width - cell.chars().count();
            line.extend(std::iter::repeat_n('─', fill + 1));
        }
    }

    for (w, line) in lines.iter_mut().enumerate() {
        line.push('┤');
        if let Some(obs) = layout.observable.filter(|o| o.qubit.index() == w) {
            line.push_str("  ");
            line.push_str(&obs.to_string());
        }
    }

    lines.join("\n")
}

/// Text of column `layer` on `wire`; empty when nothing touches it.
fn cell(layout: &Layout, layer: usize, wire: QubitId) -> String {
    for gate in layout.gates_in(layer) {
        if !gate.spans(wire) {
            continue;
        }
        if !gate.is_multi_wire() {
            return symbol(gate, wire);
        }
        let corner = if wire == gate.lo {
            '╭'
        } else if wire == gate.hi {
            '╰'
        } else if gate.glyph_on(wire).is_some() {
            '├'
        } else {
            return "│".to_string();
        };
        return format!("{corner}{}", symbol(gate, wire));
    }
    String::new()
}

fn symbol(gate: &PlacedGate, wire: QubitId) -> String {
    match gate.glyph_on(wire) {
        Some(Glyph::Boxed(text)) => text.clone(),
        Some(Glyph::Control) => "●".to_string(),
        Some(Glyph::Target) => "X".to_string(),
        Some(Glyph::PhaseTarget) => "Z".to_string(),
        None => String::new(),
    }
}
