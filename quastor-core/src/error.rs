//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building a circuit
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircuitError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {index}: circuit has only {num_qubits} qubits")]
    InvalidQubit { index: usize, num_qubits: usize },

    /// Gate carries the wrong number of target qubits
    #[error("Gate '{gate}' requires {expected} target qubits, but {actual} were provided")]
    InvalidTargetCount {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Rotation gate without an angle
    #[error("Gate '{gate}' requires a rotation angle")]
    MissingAngle { gate: &'static str },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Circuit has no qubits
    #[error("Circuit must have at least one qubit")]
    EmptyRegister,

    /// State vector size is 2^n; registers above the cap are rejected
    /// before any allocation is attempted
    #[error("{requested} qubits exceeds the supported maximum of {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Gate appended after the circuit has been executed
    #[error("Circuit is sealed: gates cannot be appended after the first run")]
    Sealed,
}

impl CircuitError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit { index, num_qubits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_error() {
        let err = CircuitError::invalid_qubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_invalid_target_count_error() {
        let err = CircuitError::InvalidTargetCount {
            gate: "SWAP",
            expected: 2,
            actual: 1,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("SWAP"));
        assert!(msg.contains("2"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn test_duplicate_qubit_error() {
        let err = CircuitError::DuplicateQubit(QubitId::new(2));
        assert!(format!("{}", err).contains("q2"));
    }

    #[test]
    fn test_sealed_error() {
        let err = CircuitError::Sealed;
        assert!(format!("{}", err).contains("sealed"));
    }
}
