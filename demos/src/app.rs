//! The variational demo flow shared by the `qvar-demo` binary and tests.

use std::path::PathBuf;

use tracing::debug;

use qvar_draw::{ImageBackend, ImageOptions, Visualizer};
use qvar_sim::{CircuitEvaluator, DeviceConfig};

use crate::circuits::{PREVIEW_PARAMS, variational_circuit};
use crate::optimizers::GradientDescent;
use crate::runners::{VariationalResult, VariationalRunner};
use crate::{
    create_progress_bar, format_params, print_header, print_info, print_note, print_result,
    print_rule, print_section, print_success,
};

/// File name of the untrained circuit diagram.
pub const CIRCUIT_IMAGE: &str = "quantum_circuit.png";

/// File name of the trained circuit diagram.
pub const OPTIMIZED_IMAGE: &str = "quantum_circuit_optimized.png";

/// Settings for one demo run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Seed for the initial parameters; entropy when `None`.
    pub seed: Option<u64>,
    /// Optimizer settings.
    pub optimizer: GradientDescent,
    /// Directory diagrams are written to.
    pub output_dir: PathBuf,
    /// Raster diagram settings.
    pub image: ImageOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            optimizer: GradientDescent::default(),
            output_dir: PathBuf::from("output"),
            image: ImageOptions::default(),
        }
    }
}

/// What a demo run produced.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// The optimization result.
    pub result: VariationalResult,
    /// Progress lines printed after each optimizer step.
    pub progress: Vec<String>,
    /// Untrained circuit diagram, if it was written.
    pub circuit_image: Option<PathBuf>,
    /// Trained circuit diagram, if it was written.
    pub optimized_image: Option<PathBuf>,
}

/// Run the demo, printing progress to stdout.
///
/// Diagram failures are reported and skipped; circuit or optimizer errors
/// end the run.
pub fn run_demo<B: ImageBackend>(config: &DemoConfig, backend: B) -> anyhow::Result<DemoOutcome> {
    print_header("qvar Variational Circuit Demo");

    let circuit = variational_circuit()?;
    let device = DeviceConfig::default_qubit(2);
    let visualizer = Visualizer::new(circuit.clone())
        .with_image_options(config.image.clone())
        .with_backend(backend);
    debug!("Using {} image backend", visualizer.backend_name());

    // Untrained circuit
    println!();
    print_rule();
    println!("Quantum Circuit Visualization:");
    print_rule();
    println!("{}", visualizer.render_text(&PREVIEW_PARAMS)?);
    print_rule();

    println!();
    print_info("Generating visual circuit diagram...");
    let circuit_image =
        visualizer.render_image(&PREVIEW_PARAMS, config.output_dir.join(CIRCUIT_IMAGE));
    match &circuit_image {
        Some(path) => print_success(&format!("Circuit diagram saved to: {}", path.display())),
        None => {
            print_note("Could not generate visual diagram.");
            print_note("Text visualization is still available above.");
        }
    }

    // Optimization
    print_section("Optimization");
    let evaluator = CircuitEvaluator::new(device, circuit)?;
    let runner = VariationalRunner::new(evaluator)
        .with_optimizer(config.optimizer.clone())
        .with_seed(config.seed);
    let initial = runner.initial_parameters();
    print_result("Initial parameters", format_params(&initial));
    print_result("Step size", config.optimizer.stepsize);
    print_result("Steps", config.optimizer.steps);
    println!();

    let pb = create_progress_bar(config.optimizer.steps as u64, "Optimizing");
    let mut progress = Vec::with_capacity(config.optimizer.steps);
    let result = runner.run_with_params(initial, |report| {
        let line = format!(
            "Step {}: Cost = {:.4}, Params = {}",
            report.step,
            report.cost,
            format_params(report.params)
        );
        pb.suspend(|| println!("{line}"));
        pb.inc(1);
        progress.push(line);
    })?;
    pb.finish_and_clear();

    println!();
    print_result("Final parameters", format_params(&result.final_params));
    print_result("Final cost", format!("{:.4}", result.final_cost));

    // Trained circuit
    println!();
    print_info("Generating optimized circuit visualization...");
    let optimized_image =
        visualizer.render_image(&result.final_params, config.output_dir.join(OPTIMIZED_IMAGE));
    match &optimized_image {
        Some(path) => print_success(&format!(
            "Optimized circuit diagram saved to: {}",
            path.display()
        )),
        None => print_note("Could not generate optimized diagram."),
    }

    println!();
    print_rule();
    print_success("Demo completed successfully!");
    if circuit_image.is_some() {
        print_info(&format!(
            "Check the '{}' directory for visualization files!",
            config.output_dir.display()
        ));
    }
    print_rule();

    Ok(DemoOutcome {
        result,
        progress,
        circuit_image,
        optimized_image,
    })
}
