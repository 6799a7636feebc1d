//! Error types for the draw crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while drawing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrawError {
    /// Parameter vector length does not match the circuit.
    #[error("Circuit expects {expected} parameters, got {got}")]
    ParameterCount {
        /// Number of parameters the circuit reads.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// No TrueType font could be found for gate labels.
    #[error("No font available for diagram labels (tried: {})", format_paths(.tried))]
    FontUnavailable {
        /// Font paths that were checked.
        tried: Vec<PathBuf>,
    },

    /// A font file was found but could not be parsed.
    #[error("Font file {0} is not a valid TrueType/OpenType font")]
    InvalidFont(PathBuf),

    /// The raster backend failed while drawing or encoding.
    #[error("Image backend error: {0}")]
    Backend(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Circuit IR error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qvar_ir::IrError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "none".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for drawing operations.
pub type DrawResult<T> = Result<T, DrawError>;
