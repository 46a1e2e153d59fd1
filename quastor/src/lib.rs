//! Quastor: quantum-inspired simulation and optimization
//!
//! A classical state-vector simulator for small quantum circuits plus two
//! derived heuristics built on the same primitives: a simulated-annealing
//! optimizer with tunneling-boosted acceptance and a closed-form Grover
//! search estimate.
//!
//! The pieces, leaves first:
//! - [`Circuit`] / [`Gate`] — immutable-after-first-run circuit description
//! - [`StateVector`] + [`apply_gate`] — in-place gate application
//! - [`Sampler`] — per-shot replay with inverse-CDF outcome draws
//! - [`Superposition`] — candidate-list evaluation over an all-Hadamard circuit
//! - [`Annealer`] — annealing over an arbitrary discrete solution space
//! - [`grover_search`] — analytic amplitude-amplification estimate
//!
//! # Example
//! ```
//! use quastor::{Circuit, Gate, QubitId, Sampler, SamplerConfig};
//!
//! // Bell state: H then CNOT, sampled 1000 times
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.push(Gate::h(QubitId::new(0))).unwrap();
//! circuit.push(Gate::cnot(QubitId::new(0), QubitId::new(1))).unwrap();
//!
//! let sampler = Sampler::new(SamplerConfig::default().with_seed(42));
//! let histogram = sampler.sample(&circuit, 1000).unwrap();
//!
//! // Outcomes land only on |00⟩ and |11⟩
//! assert_eq!(histogram.count(0b01), 0);
//! assert_eq!(histogram.count(0b10), 0);
//! assert_eq!(histogram.shots(), 1000);
//! ```

pub use quastor_core::{
    Basis, Circuit, CircuitError, Gate, GateKind, Measurement, QubitId, MAX_QUBITS,
};
pub use quastor_opt::{
    grover_search, AnnealStep, Annealer, AnnealerConfig, AnnealingOutcome, CandidateEnergy,
    GroverEstimate, GroverEstimator, OptimizeError,
};
pub use quastor_sim::{
    CandidateState, OutcomeHistogram, Sampler, SamplerConfig, SimulatorError, Superposition,
    SuperpositionOutcome,
};
pub use quastor_state::{apply_gate, matrices, Complex64, StateError, StateVector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_superposition_pick() {
        let evaluator = Superposition::new(SamplerConfig::default().with_seed(1));
        let options = ["plan-a", "plan-b", "plan-c", "plan-d"];
        let outcome = evaluator.evaluate(&options).unwrap();
        assert!(options.contains(&outcome.collapsed));
    }

    #[test]
    fn test_end_to_end_annealing() {
        let space: Vec<i32> = (0..64).collect();
        let annealer = Annealer::new(AnnealerConfig::default().with_iterations(5000).with_seed(2));
        let outcome = annealer.anneal(&space, |&x| ((x - 40) * (x - 40)) as f64);
        assert_eq!(outcome.best, Some(40));
    }

    #[test]
    fn test_reexports_compose() {
        use approx::assert_relative_eq;

        let mut state = StateVector::new(1).unwrap();
        apply_gate(&mut state, &Gate::h(QubitId::new(0))).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(state.probability(0).unwrap(), 0.5, epsilon = 1e-10);
    }
}
