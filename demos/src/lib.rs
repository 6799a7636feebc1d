//! qvar Demo
//!
//! The variational demo end to end: build the two-qubit ansatz, draw it,
//! train its three angles by gradient descent on ⟨Z0⟩, and draw the
//! trained circuit.
//!
//! ```no_run
//! use qvar_demos::app::{DemoConfig, run_demo};
//! use qvar_draw::PlottersBackend;
//!
//! let outcome = run_demo(&DemoConfig::default(), PlottersBackend).unwrap();
//! assert!(outcome.result.final_cost <= outcome.result.initial_cost);
//! ```

pub mod app;
pub mod circuits;
pub mod optimizers;
pub mod runners;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Width of header and banner rules.
const RULE_WIDTH: usize = 50;

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print a horizontal rule.
pub fn print_rule() {
    println!("{}", style("═".repeat(RULE_WIDTH)).cyan());
}

/// Print a demo header.
pub fn print_header(title: &str) {
    print_rule();
    println!("{}", style(format!("  {title}")).cyan().bold());
    print_rule();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print a note about something that was skipped.
pub fn print_note(message: &str) {
    println!("{} {}", style("Note:").yellow(), message);
}

/// Format a parameter vector with four decimals, e.g. `[0.1000, -0.2500]`.
pub fn format_params(params: &[f64]) -> String {
    let items: Vec<String> = params.iter().map(|p| format!("{p:.4}")).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_params() {
        assert_eq!(format_params(&[0.1, -0.25, 1.0]), "[0.1000, -0.2500, 1.0000]");
        assert_eq!(format_params(&[]), "[]");
    }
}
