//! Integration tests for the variational demo.
//!
//! Diagrams go through a stand-in backend so the tests do not depend on
//! system fonts.

use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;

use qvar_demos::app::{CIRCUIT_IMAGE, DemoConfig, OPTIMIZED_IMAGE, run_demo};
use qvar_demos::circuits::{PREVIEW_PARAMS, variational_circuit};
use qvar_demos::optimizers::{GradientDescent, Optimizer};
use qvar_demos::runners::VariationalRunner;
use qvar_draw::{DrawError, DrawResult, ImageBackend, ImageOptions, Layout, Visualizer};
use qvar_sim::{CircuitEvaluator, DeviceConfig};

/// Writes a placeholder file for every diagram.
struct StubBackend;

impl ImageBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    fn draw(&self, layout: &Layout, path: &Path, _options: &ImageOptions) -> DrawResult<()> {
        fs::write(path, format!("{} gates", layout.gates.len()))?;
        Ok(())
    }
}

struct UnavailableBackend;

impl ImageBackend for UnavailableBackend {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn draw(&self, _layout: &Layout, _path: &Path, _options: &ImageOptions) -> DrawResult<()> {
        Err(DrawError::FontUnavailable { tried: vec![] })
    }
}

fn evaluator() -> CircuitEvaluator {
    CircuitEvaluator::new(DeviceConfig::default_qubit(2), variational_circuit().unwrap()).unwrap()
}

fn config(dir: &Path, seed: u64) -> DemoConfig {
    DemoConfig {
        seed: Some(seed),
        output_dir: dir.join("output"),
        ..DemoConfig::default()
    }
}

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_seeded_optimization_lowers_cost() {
    for seed in [0, 1, 42, 2024] {
        let runner = VariationalRunner::new(evaluator()).with_seed(Some(seed));
        let result = runner.run(|_| {}).unwrap();

        assert_eq!(result.initial_params.len(), 3);
        assert_eq!(result.final_params.len(), 3);
        assert!(
            result.final_cost < result.initial_cost,
            "seed {seed}: {} !< {}",
            result.final_cost,
            result.initial_cost
        );
    }
}

#[test]
fn test_cost_never_increases_with_default_step() {
    let runner = VariationalRunner::new(evaluator()).with_seed(Some(7));
    let result = runner.run(|_| {}).unwrap();
    assert_eq!(result.history.len(), 11);
    for pair in result.history.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12);
    }
    assert!(result.history.iter().all(|c| c.abs() <= 1.0 + 1e-12));
}

#[test]
fn test_reported_costs_match_evaluator() {
    let runner = VariationalRunner::new(evaluator());
    let mut reports = Vec::new();
    let result = runner
        .run_with_params(vec![0.5, 0.5, 0.5], |r| {
            reports.push((r.cost, r.params.to_vec()))
        })
        .unwrap();

    assert_eq!(reports.len(), 10);
    for (cost, params) in &reports {
        assert_abs_diff_eq!(*cost, runner.cost(params).unwrap(), epsilon = 1e-12);
    }
    let (last_cost, last_params) = reports.last().unwrap();
    assert_eq!(*last_cost, result.final_cost);
    assert_eq!(last_params, &result.final_params);
}

#[test]
fn test_first_step_matches_manual_update() {
    let eval = evaluator();
    let params = [0.3, 0.6, 0.9];
    let grad = eval.gradient(&params).unwrap();
    let next = GradientDescent::new().step(&eval, &params).unwrap();
    for k in 0..3 {
        assert_abs_diff_eq!(next[k], params[k] - 0.4 * grad[k], epsilon = 1e-15);
    }
}

#[test]
fn test_custom_optimizer_settings() {
    let optimizer = GradientDescent::new().with_stepsize(0.1).with_steps(3);
    let result = optimizer
        .minimize(&evaluator(), vec![0.2, 0.4, 0.6], |_| {})
        .unwrap();
    assert_eq!(result.num_iterations, 3);
    assert_eq!(result.history.len(), 4);
    assert!(result.optimal_value < result.initial_value);
}

#[test]
fn test_preview_diagram() {
    let text = Visualizer::new(variational_circuit().unwrap())
        .render_text(&PREVIEW_PARAMS)
        .unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "0: ──RY(0.10)──╭●──RY(0.30)─┤  <Z>");
    assert!(lines[1].starts_with("1: ──RY(0.20)──╰X"));
    assert!(lines[1].ends_with('┤'));
}

#[test]
fn test_end_to_end_writes_two_diagrams() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 42);

    let outcome = run_demo(&config, StubBackend).unwrap();

    assert!(outcome.result.final_cost < outcome.result.initial_cost);
    assert_eq!(outcome.result.final_params.len(), 3);
    assert_eq!(
        png_files(&config.output_dir),
        vec![CIRCUIT_IMAGE.to_string(), OPTIMIZED_IMAGE.to_string()]
    );
    assert_eq!(
        outcome.circuit_image.as_deref(),
        Some(config.output_dir.join(CIRCUIT_IMAGE).as_path())
    );
}

#[test]
fn test_end_to_end_rerun_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);

    let first = run_demo(&config, StubBackend).unwrap();
    let second = run_demo(&config, StubBackend).unwrap();

    assert_eq!(first.result.final_params, second.result.final_params);
    assert_eq!(png_files(&config.output_dir).len(), 2);
}

#[test]
fn test_end_to_end_without_image_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 42);

    let outcome = run_demo(&config, UnavailableBackend).unwrap();

    assert!(outcome.circuit_image.is_none());
    assert!(outcome.optimized_image.is_none());
    assert!(outcome.result.final_cost < outcome.result.initial_cost);
    // The directory is still created, but holds no diagrams.
    assert!(png_files(&config.output_dir).is_empty());
}

#[test]
fn test_end_to_end_reports_each_step() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 42);

    let outcome = run_demo(&config, UnavailableBackend).unwrap();

    assert_eq!(outcome.progress.len(), 10);
    for (k, line) in outcome.progress.iter().enumerate() {
        assert!(line.starts_with(&format!("Step {}: Cost = ", k + 1)), "{line}");
        assert!(line.contains(", Params = ["));
    }
    let last = outcome.progress.last().unwrap();
    assert!(last.contains(&format!("Cost = {:.4},", outcome.result.final_cost)));
}
