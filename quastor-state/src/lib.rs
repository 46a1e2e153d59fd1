//! State-vector engine
//!
//! Holds the complex amplitude vector for a qubit register and applies
//! circuit gates to it in place. Every supported gate is unitary, so the
//! sum of squared magnitudes stays ≈ 1 (floating tolerance) after any
//! gate sequence.
//!
//! # Example
//! ```
//! use quastor_core::{Gate, QubitId};
//! use quastor_state::{apply_gate, StateVector};
//!
//! let mut state = StateVector::new(2).unwrap();
//! apply_gate(&mut state, &Gate::h(QubitId::new(0))).unwrap();
//! apply_gate(&mut state, &Gate::cnot(QubitId::new(0), QubitId::new(1))).unwrap();
//!
//! // Bell state: only |00⟩ and |11⟩ carry probability
//! let probs = state.probabilities();
//! assert!(probs[1].abs() < 1e-12 && probs[2].abs() < 1e-12);
//! ```

pub mod apply;
pub mod error;
pub mod matrices;
pub mod state_vector;

pub use apply::{apply_gate, apply_single_qubit, apply_swap};
pub use error::StateError;
pub use num_complex::Complex64;
pub use state_vector::StateVector;

/// Type alias for results in quastor-state
pub type Result<T> = std::result::Result<T, StateError>;
