//! Superposition evaluation over a candidate list
//!
//! Builds an implicit all-Hadamard circuit over ⌈log₂(N)⌉ qubits, samples
//! it, and maps the empirical outcome distribution back onto the
//! candidates. When N is a power of two the distribution approaches
//! uniform 1/N for large shot counts; otherwise basis states ≥ N are
//! discarded, which biases the reported distribution by construction (the
//! probabilities then sum to less than 1 — documented, not corrected).

use num_complex::Complex64;
use quastor_core::{Circuit, Gate, QubitId};

use crate::{config::SamplerConfig, sampler::Sampler, Result, SimulatorError};

/// One candidate's share of the sampled distribution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateState<T> {
    /// The candidate value
    pub solution: T,
    /// Empirical probability: observed count / shots
    pub probability: f64,
    /// Reconstructed amplitude, √probability as the real part (phase is
    /// not observable from counts)
    pub amplitude: Complex64,
}

/// Result of a superposition evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperpositionOutcome<T> {
    /// Per-candidate empirical distribution, in input order
    pub states: Vec<CandidateState<T>>,
    /// The candidate with the highest empirical probability
    pub collapsed: T,
}

/// Superposition evaluator
///
/// # Example
/// ```
/// use quastor_sim::{SamplerConfig, Superposition};
///
/// let evaluator = Superposition::new(SamplerConfig::default().with_seed(3));
/// let outcome = evaluator.evaluate(&["a", "b", "c", "d"]).unwrap();
///
/// assert_eq!(outcome.states.len(), 4);
/// assert!(["a", "b", "c", "d"].contains(&outcome.collapsed));
/// ```
pub struct Superposition {
    sampler: Sampler,
}

impl Superposition {
    /// Create an evaluator with the given sampler configuration
    ///
    /// The configured `shots` count drives the sampling.
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            sampler: Sampler::new(config),
        }
    }

    /// Evaluate a candidate list under a uniform superposition
    ///
    /// # Errors
    /// Returns [`SimulatorError::NoCandidates`] for an empty list.
    pub fn evaluate<T: Clone>(&self, options: &[T]) -> Result<SuperpositionOutcome<T>> {
        let n = options.len();
        if n == 0 {
            return Err(SimulatorError::NoCandidates);
        }
        if n == 1 {
            return Ok(SuperpositionOutcome {
                states: vec![CandidateState {
                    solution: options[0].clone(),
                    probability: 1.0,
                    amplitude: Complex64::new(1.0, 0.0),
                }],
                collapsed: options[0].clone(),
            });
        }

        let num_qubits = ceil_log2(n);
        let mut circuit = Circuit::with_capacity(num_qubits, num_qubits)?;
        for qubit in 0..num_qubits {
            circuit.push(Gate::h(QubitId::new(qubit)))?;
        }

        let shots = self.sampler.config().shots;
        let histogram = self.sampler.sample(&circuit, shots)?;

        // Basis states >= n (present whenever n is not a power of two)
        // are dropped here, not redistributed.
        let states: Vec<CandidateState<T>> = options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let probability = histogram.frequency(index as u64);
                CandidateState {
                    solution: option.clone(),
                    probability,
                    amplitude: Complex64::new(probability.sqrt(), 0.0),
                }
            })
            .collect();

        let collapsed_index = states
            .iter()
            .enumerate()
            .fold(0, |best, (index, state)| {
                if state.probability > states[best].probability {
                    index
                } else {
                    best
                }
            });

        Ok(SuperpositionOutcome {
            collapsed: options[collapsed_index].clone(),
            states,
        })
    }
}

impl Default for Superposition {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

/// Smallest k with 2^k >= n, for n >= 2
fn ceil_log2(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}
