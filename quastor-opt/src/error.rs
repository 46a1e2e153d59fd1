//! Error types for the optimization heuristics

use thiserror::Error;

/// Errors that can occur during optimization runs
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The caller's energy function failed; the run is aborted
    /// immediately and no partial result is synthesized.
    #[error("Energy function failed: {0}")]
    Energy(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for optimization operations
pub type Result<T> = std::result::Result<T, OptimizeError>;
