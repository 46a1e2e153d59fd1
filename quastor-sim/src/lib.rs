//! Shot sampler and superposition evaluator
//!
//! A shot is one independent simulated execution-and-measurement of a
//! circuit: the sampler replays the circuit from |0...0⟩ on a fresh state
//! vector, then draws a classical outcome by inverse-CDF sampling of the
//! squared amplitudes. Shots share no mutable state, so multi-shot runs
//! parallelize across threads and merge histograms by summation.
//!
//! # Example
//! ```
//! use quastor_core::{Circuit, Gate, QubitId};
//! use quastor_sim::{Sampler, SamplerConfig};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.push(Gate::h(QubitId::new(0))).unwrap();
//! circuit.push(Gate::cnot(QubitId::new(0), QubitId::new(1))).unwrap();
//!
//! let sampler = Sampler::new(SamplerConfig::default().with_seed(7));
//! let histogram = sampler.sample(&circuit, 1000).unwrap();
//!
//! // Bell state: only "00" and "11" ever occur
//! assert_eq!(histogram.count(1) + histogram.count(2), 0);
//! assert_eq!(histogram.shots(), 1000);
//! ```

pub mod config;
pub mod error;
pub mod histogram;
pub mod sampler;
pub mod superposition;

pub use config::SamplerConfig;
pub use error::SimulatorError;
pub use histogram::OutcomeHistogram;
pub use sampler::Sampler;
pub use superposition::{CandidateState, Superposition, SuperpositionOutcome};

/// Type alias for results in quastor-sim
pub type Result<T> = std::result::Result<T, SimulatorError>;
