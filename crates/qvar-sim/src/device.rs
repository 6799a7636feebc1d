//! Simulator device configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the exact statevector device.
pub const DEFAULT_QUBIT: &str = "default.qubit";

/// A simulator handle: built once at startup and handed to every
/// evaluator that runs on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Name of the device.
    pub name: String,
    /// Number of wires (qubits) the device simulates.
    pub wires: u32,
}

impl DeviceConfig {
    /// Create a device configuration.
    pub fn new(name: impl Into<String>, wires: u32) -> Self {
        Self {
            name: name.into(),
            wires,
        }
    }

    /// The local exact statevector simulator with `wires` qubits.
    pub fn default_qubit(wires: u32) -> Self {
        Self::new(DEFAULT_QUBIT, wires)
    }

    /// Check whether a circuit of `num_qubits` fits this device.
    pub fn fits(&self, num_qubits: usize) -> bool {
        num_qubits <= self.wires as usize
    }
}

impl fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} wires)", self.name, self.wires)
    }
}
