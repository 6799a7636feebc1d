//! Demo runners.

pub mod variational;

pub use variational::{VariationalResult, VariationalRunner};
