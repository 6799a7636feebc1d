//! Variational Circuit Demo
//!
//! Draws the two-qubit ansatz, trains it by gradient descent on ⟨Z0⟩ and
//! writes PNG diagrams of the circuit before and after training.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use qvar_demos::app::{DemoConfig, run_demo};
use qvar_demos::optimizers::GradientDescent;
use qvar_draw::{ImageOptions, PlottersBackend};

#[derive(Parser, Debug)]
#[command(name = "qvar-demo")]
#[command(author, version, about = "Train and draw a two-qubit variational circuit", long_about = None)]
struct Args {
    /// Seed for the initial parameters (random when omitted)
    #[arg(long, env = "QVAR_SEED")]
    seed: Option<u64>,

    /// Number of gradient descent steps
    #[arg(long, env = "QVAR_STEPS", default_value = "10")]
    steps: usize,

    /// Gradient descent step size
    #[arg(long, env = "QVAR_STEP_SIZE", default_value = "0.4")]
    step_size: f64,

    /// Directory for circuit diagrams
    #[arg(short, long, env = "QVAR_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Resolution of circuit diagrams
    #[arg(long, env = "QVAR_DPI", default_value = "150", value_parser = clap::value_parser!(u32).range(1..=1200))]
    dpi: u32,

    /// TrueType font for diagram labels
    #[arg(long, env = "QVAR_FONT")]
    font: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> DemoConfig {
        let mut image = ImageOptions::default().with_dpi(self.dpi);
        image.font = self.font.clone();
        DemoConfig {
            seed: self.seed,
            optimizer: GradientDescent::new()
                .with_stepsize(self.step_size)
                .with_steps(self.steps),
            output_dir: self.output_dir.clone(),
            image,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run_demo(&args.config(), PlottersBackend)?;
    Ok(())
}
