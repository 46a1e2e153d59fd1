//! Per-shot circuit replay and outcome sampling

use quastor_core::Circuit;
use quastor_state::{apply_gate, StateVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::{config::SamplerConfig, histogram::OutcomeHistogram, Result};

/// Norm drift beyond this triggers a renormalization before sampling
const NORM_DRIFT_TOLERANCE: f64 = 1e-9;

/// Mixing constant for deriving per-shot RNG streams (splitmix64 increment)
const SHOT_STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Shot sampler
///
/// Replays a circuit from the zero state once per shot on a freshly
/// allocated state vector, then draws one classical outcome by
/// inverse-CDF sampling of the squared amplitudes. Shots are fully
/// independent, so multi-shot runs are distributed across threads and
/// merged by count summation.
///
/// As the shot count grows, the empirical frequency of each bitstring
/// converges to its Born-rule probability |amplitude|²; this is a
/// statistical property, tested with tolerances rather than equality.
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a new sampler with the given configuration
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Get the sampler configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Run the circuit once and draw a single outcome
    ///
    /// # Errors
    /// Returns an error if a gate cannot be applied to the state.
    pub fn run_once(&self, circuit: &Circuit) -> Result<u64> {
        circuit.seal();
        self.shot(circuit, 0)
    }

    /// Sample the circuit over the given number of shots
    ///
    /// Seals the circuit on first use. Every shot replays the full gate
    /// sequence on its own state vector; no state is shared or reused
    /// across shots. The returned histogram's counts sum to `shots`.
    ///
    /// # Errors
    /// Returns an error if a gate cannot be applied to the state.
    pub fn sample(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeHistogram> {
        circuit.seal();

        if shots == 0 {
            return Ok(OutcomeHistogram::new());
        }

        log::debug!(
            "sampling {} shots over {} qubits, {} gates",
            shots,
            circuit.num_qubits(),
            circuit.len()
        );

        let histogram = if shots >= self.config.parallel_threshold {
            (0..shots as u64)
                .into_par_iter()
                .map(|shot| self.shot(circuit, shot))
                .collect::<Result<Vec<u64>>>()?
                .into_iter()
                .collect()
        } else {
            let mut histogram = OutcomeHistogram::new();
            for shot in 0..shots as u64 {
                histogram.record(self.shot(circuit, shot)?);
            }
            histogram
        };

        Ok(histogram)
    }

    /// Execute one independent shot: fresh state, full replay, one draw
    fn shot(&self, circuit: &Circuit, shot: u64) -> Result<u64> {
        let mut state = StateVector::new(circuit.num_qubits())?;
        for gate in circuit.gates() {
            apply_gate(&mut state, gate)?;
        }

        // Drift policy: long gate sequences can accumulate floating-point
        // error in the norm; rescale before the distribution is read.
        if !state.is_normalized(NORM_DRIFT_TOLERANCE) {
            log::debug!("renormalizing drifted state, norm = {}", state.norm());
            state.normalize();
        }

        let mut rng = self.shot_rng(shot);
        Ok(draw(&state, rng.gen::<f64>()))
    }

    /// RNG stream for one shot
    ///
    /// Seeded runs derive a distinct stream per shot index so results are
    /// deterministic regardless of how shots are scheduled across threads.
    fn shot_rng(&self, shot: u64) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ shot.wrapping_mul(SHOT_STREAM_MIX)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

/// Inverse-CDF draw over the squared amplitudes
///
/// Walks the cumulative distribution until it passes the uniform draw
/// `r ∈ [0, 1)`; the last basis state absorbs any floating-point
/// shortfall in the cumulative sum.
fn draw(state: &StateVector, r: f64) -> u64 {
    let mut cumulative = 0.0;
    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        cumulative += amplitude.norm_sqr();
        if r < cumulative {
            return index as u64;
        }
    }
    (state.dimension() - 1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use quastor_core::{Gate, QubitId};

    fn bell_circuit() -> Circuit {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        circuit
            .push(Gate::cnot(QubitId::new(0), QubitId::new(1)))
            .unwrap();
        circuit
    }

    #[test]
    fn test_draw_deterministic_state() {
        let state = StateVector::new(2).unwrap();
        // All probability on |00⟩
        assert_eq!(draw(&state, 0.0), 0);
        assert_eq!(draw(&state, 0.999), 0);
    }

    #[test]
    fn test_draw_cdf_boundaries() {
        let mut state = StateVector::new(1).unwrap();
        apply_gate(&mut state, &Gate::h(QubitId::new(0))).unwrap();

        assert_eq!(draw(&state, 0.25), 0);
        assert_eq!(draw(&state, 0.75), 1);
    }

    #[test]
    fn test_sample_counts_sum_to_shots() {
        let sampler = Sampler::new(SamplerConfig::default().with_seed(11));
        let histogram = sampler.sample(&bell_circuit(), 500).unwrap();

        assert_eq!(histogram.shots(), 500);
        let total: usize = histogram.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 500);
    }

    #[test]
    fn test_zero_shots() {
        let sampler = Sampler::default();
        let histogram = sampler.sample(&bell_circuit(), 0).unwrap();
        assert_eq!(histogram.shots(), 0);
    }

    #[test]
    fn test_sampling_seals_circuit() {
        let mut circuit = bell_circuit();
        let sampler = Sampler::new(SamplerConfig::default().with_seed(1));
        sampler.sample(&circuit, 10).unwrap();

        assert!(circuit.is_sealed());
        assert!(circuit.push(Gate::x(QubitId::new(0))).is_err());
    }

    #[test]
    fn test_seeded_runs_deterministic() {
        let circuit = bell_circuit();
        let a = Sampler::new(SamplerConfig::default().with_seed(99))
            .sample(&circuit, 300)
            .unwrap();
        let b = Sampler::new(SamplerConfig::default().with_seed(99))
            .sample(&circuit, 300)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Same seed, thresholds forcing each path
        let circuit = bell_circuit();
        let sequential = Sampler::new(
            SamplerConfig::default()
                .with_seed(5)
                .with_parallel_threshold(usize::MAX),
        )
        .sample(&circuit, 400)
        .unwrap();
        let parallel = Sampler::new(
            SamplerConfig::default()
                .with_seed(5)
                .with_parallel_threshold(1),
        )
        .sample(&circuit, 400)
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_run_once_deterministic_circuit() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::x(QubitId::new(0))).unwrap();
        circuit.push(Gate::x(QubitId::new(1))).unwrap();

        let sampler = Sampler::default();
        // All probability on |11⟩ regardless of the RNG draw
        assert_eq!(sampler.run_once(&circuit).unwrap(), 3);
    }
}
