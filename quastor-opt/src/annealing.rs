//! Simulated annealing with tunneling-boosted acceptance
//!
//! Classical simulated annealing over an arbitrary finite candidate list
//! (a neighbor is any other index: no locality structure is assumed),
//! with the Metropolis acceptance probability deliberately boosted by a
//! temperature-dependent factor so the search escapes local minima more
//! readily, emulating tunneling through barriers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{OptimizeError, Result};

/// Annealing schedule and RNG configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealerConfig {
    /// Number of annealing iterations
    ///
    /// Default: 1000
    pub iterations: usize,

    /// Starting temperature
    ///
    /// Default: 1.0
    pub initial_temperature: f64,

    /// Geometric decay factor applied every iteration
    ///
    /// Default: 0.99
    pub cooling_rate: f64,

    /// Tunneling boost: acceptance is multiplied by
    /// `1 + temperature * tunneling_boost`
    ///
    /// Default: 0.1
    pub tunneling_boost: f64,

    /// Random number generator seed for reproducibility
    ///
    /// Default: None (random)
    pub seed: Option<u64>,
}

impl Default for AnnealerConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 1.0,
            cooling_rate: 0.99,
            tunneling_boost: 0.1,
            seed: None,
        }
    }
}

impl AnnealerConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the starting temperature
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Set the geometric cooling rate
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Set the tunneling boost factor (0 recovers plain Metropolis
    /// acceptance)
    pub fn with_tunneling_boost(mut self, boost: f64) -> Self {
        self.tunneling_boost = boost;
        self
    }

    /// Set the RNG seed for deterministic runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One candidate's raw energy with its uniform prior probability
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateEnergy<T> {
    /// The candidate value
    pub solution: T,
    /// Raw energy (lower is better)
    pub energy: f64,
    /// Uniform prior 1/|space|, not the annealing visit frequency
    pub probability: f64,
}

/// Result of an annealing run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingOutcome<T> {
    /// Best candidate found; `None` only for an empty solution space
    pub best: Option<T>,
    /// Energy of the best candidate
    pub best_energy: Option<f64>,
    /// Every candidate's raw energy with a uniform prior
    pub all_states: Vec<CandidateEnergy<T>>,
    /// Number of iterations executed
    pub iterations: usize,
    /// Best-so-far energy after each iteration; non-increasing by
    /// construction (it records the best, never a regression)
    pub convergence_history: Vec<f64>,
}

/// Progress snapshot passed to an injected observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealStep {
    /// Iteration index, starting at 0
    pub iteration: usize,
    /// Temperature after decay for this iteration
    pub temperature: f64,
    /// Energy of the currently accepted candidate
    pub current_energy: f64,
    /// Best energy seen so far
    pub best_energy: f64,
}

/// Simulated-annealing optimizer
pub struct Annealer {
    config: AnnealerConfig,
}

impl Annealer {
    /// Create a new annealer with the given configuration
    pub fn new(config: AnnealerConfig) -> Self {
        Self { config }
    }

    /// Get the annealer configuration
    pub fn config(&self) -> &AnnealerConfig {
        &self.config
    }

    /// Anneal over a solution space with an infallible energy function
    ///
    /// Lower energy is better. An empty space yields the explicit
    /// no-result outcome (`best: None`, empty history) rather than an
    /// indexing error.
    pub fn anneal<T, F>(&self, space: &[T], mut energy: F) -> AnnealingOutcome<T>
    where
        T: Clone,
        F: FnMut(&T) -> f64,
    {
        let energies: Vec<f64> = space.iter().map(&mut energy).collect();
        self.run(space, &energies, None)
    }

    /// Anneal with a fallible energy function
    ///
    /// # Errors
    /// The first energy failure aborts the run immediately and propagates
    /// as [`OptimizeError::Energy`]; no partial result is returned.
    pub fn try_anneal<T, F, E>(&self, space: &[T], mut energy: F) -> Result<AnnealingOutcome<T>>
    where
        T: Clone,
        F: FnMut(&T) -> std::result::Result<f64, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let energies: Vec<f64> = space
            .iter()
            .map(|candidate| energy(candidate).map_err(|e| OptimizeError::Energy(e.into())))
            .collect::<Result<_>>()?;
        Ok(self.run(space, &energies, None))
    }

    /// Anneal with an injected progress observer
    ///
    /// The observer is called once per iteration; it decouples progress
    /// reporting from the numeric loop.
    pub fn anneal_with_progress<T, F, O>(
        &self,
        space: &[T],
        mut energy: F,
        mut observer: O,
    ) -> AnnealingOutcome<T>
    where
        T: Clone,
        F: FnMut(&T) -> f64,
        O: FnMut(AnnealStep),
    {
        let energies: Vec<f64> = space.iter().map(&mut energy).collect();
        self.run(space, &energies, Some(&mut observer))
    }

    /// Core loop over precomputed candidate energies
    ///
    /// The energy function is pure per the data model, so evaluating each
    /// candidate once up front is equivalent to re-evaluating neighbors
    /// and also feeds `all_states`.
    fn run<T: Clone>(
        &self,
        space: &[T],
        energies: &[f64],
        mut observer: Option<&mut dyn FnMut(AnnealStep)>,
    ) -> AnnealingOutcome<T> {
        let n = space.len();
        if n == 0 {
            log::debug!("annealing over an empty solution space");
            return AnnealingOutcome {
                best: None,
                best_energy: None,
                all_states: Vec::new(),
                iterations: 0,
                convergence_history: Vec::new(),
            };
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let iterations = self.config.iterations;
        let mut current = rng.gen_range(0..n);
        let mut current_energy = energies[current];
        let mut best = current;
        let mut best_energy = current_energy;
        let mut temperature = self.config.initial_temperature;
        let mut history = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            // Neighbor = any other index, chosen uniformly
            let neighbor = if n > 1 {
                let mut candidate = rng.gen_range(0..n - 1);
                if candidate >= current {
                    candidate += 1;
                }
                candidate
            } else {
                current
            };

            let delta = energies[neighbor] - current_energy;
            let accept = if delta < 0.0 {
                true
            } else {
                // Boosted above classical Metropolis acceptance to
                // emulate tunneling through barriers
                let tunneling = (-delta / temperature).exp()
                    * (1.0 + temperature * self.config.tunneling_boost);
                rng.gen::<f64>() < tunneling
            };

            if accept {
                current = neighbor;
                current_energy = energies[neighbor];
                if current_energy < best_energy {
                    best = current;
                    best_energy = current_energy;
                }
            }

            temperature *= self.config.cooling_rate;
            history.push(best_energy);

            if let Some(ref mut obs) = observer {
                obs(AnnealStep {
                    iteration,
                    temperature,
                    current_energy,
                    best_energy,
                });
            }
        }

        log::debug!(
            "annealing finished: best energy {} after {} iterations",
            best_energy,
            iterations
        );

        let prior = 1.0 / n as f64;
        let all_states = space
            .iter()
            .zip(energies)
            .map(|(solution, &energy)| CandidateEnergy {
                solution: solution.clone(),
                energy,
                probability: prior,
            })
            .collect();

        AnnealingOutcome {
            best: Some(space[best].clone()),
            best_energy: Some(best_energy),
            all_states,
            iterations,
            convergence_history: history,
        }
    }
}

impl Default for Annealer {
    fn default() -> Self {
        Self::new(AnnealerConfig::default())
    }
}
