//! Core types for building Quastor circuits
//!
//! This crate provides the descriptive half of the engine:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: A gate kind plus the qubits (and angle) it applies to
//! - [`Circuit`]: Validated, append-only gate sequence with measurement specs
//!
//! Nothing here executes anything; circuits are handed to `quastor-sim`
//! for sampling.
//!
//! # Example
//! ```
//! use quastor_core::{Circuit, Gate, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.push(Gate::h(QubitId::new(0))).unwrap();
//! circuit.push(Gate::cnot(QubitId::new(0), QubitId::new(1))).unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Basis, Circuit, Measurement, MAX_QUBITS};
pub use error::CircuitError;
pub use gate::{Gate, GateKind};
pub use qubit::QubitId;

/// Type alias for results in quastor-core
pub type Result<T> = std::result::Result<T, CircuitError>;
