//! Quantum-inspired heuristics over discrete solution spaces
//!
//! Two search heuristics that share nothing with the state-vector
//! machinery: a simulated-annealing optimizer with a tunneling-boosted
//! acceptance rule, and a closed-form estimate of Grover amplitude
//! amplification. Both consume only a candidate list and a scoring or
//! predicate function.
//!
//! # Example
//! ```
//! use quastor_opt::{Annealer, AnnealerConfig};
//!
//! let space: Vec<i64> = (-20..=20).collect();
//! let annealer = Annealer::new(AnnealerConfig::default().with_seed(7));
//! let outcome = annealer.anneal(&space, |&x| ((x - 3) * (x - 3)) as f64);
//!
//! assert_eq!(outcome.best, Some(3));
//! ```

pub mod annealing;
pub mod error;
pub mod grover;

pub use annealing::{
    AnnealStep, Annealer, AnnealerConfig, AnnealingOutcome, CandidateEnergy,
};
pub use error::OptimizeError;
pub use grover::{grover_search, GroverEstimate, GroverEstimator};

/// Type alias for results in quastor-opt
pub type Result<T> = std::result::Result<T, OptimizeError>;
