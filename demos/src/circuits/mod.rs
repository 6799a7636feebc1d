//! Circuit generators for demos.

pub mod variational;

pub use variational::{NUM_PARAMETERS, PREVIEW_PARAMS, variational_circuit};
