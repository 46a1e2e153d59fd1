//! Error types for sampling and evaluation

use quastor_core::CircuitError;
use quastor_state::StateError;
use thiserror::Error;

/// Errors that can occur during sampling and superposition evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    /// Circuit construction or validation failure
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// State vector failure
    #[error(transparent)]
    State(#[from] StateError),

    /// Superposition evaluation over an empty candidate list
    #[error("Superposition evaluation requires at least one candidate")]
    NoCandidates,
}

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SimulatorError>;
