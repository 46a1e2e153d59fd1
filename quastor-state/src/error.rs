//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubit { index: usize, num_qubits: usize },

    /// Register size above the supported cap
    #[error("{requested} qubits exceeds the supported maximum of {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Amplitude slice length does not match 2^n
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Rotation gate without an angle
    #[error("Gate '{gate}' requires a rotation angle")]
    MissingAngle { gate: &'static str },

    /// Invalid basis state index
    #[error("Basis state {index} out of range for dimension {dimension}")]
    InvalidBasisState { index: usize, dimension: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
