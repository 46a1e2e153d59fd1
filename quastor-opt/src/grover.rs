//! Closed-form Grover search estimate
//!
//! Analytic shortcut, not a simulation: the optimal amplitude-
//! amplification iteration count and success probability come straight
//! from the Grover formulas, and `found` is a uniformly random element of
//! the matching items. No oracle/diffusion steps are executed on a state
//! vector, so callers must not read `found` as an actual quantum search
//! trajectory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_4;

/// Analytic estimate of a Grover amplitude-amplification run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroverEstimate<T> {
    /// A uniformly random matching item, or `None` when nothing matches
    pub found: Option<T>,
    /// Optimal iteration count ⌊π/4 · √(N/M)⌋
    pub iterations: usize,
    /// Success probability sin²((2k+1)·asin(√(M/N))), clamped to [0, 1]
    pub probability: f64,
}

impl<T> GroverEstimate<T> {
    /// The explicit no-result estimate: nothing matched
    pub fn not_found() -> Self {
        Self {
            found: None,
            iterations: 0,
            probability: 0.0,
        }
    }
}

/// Grover estimator with an optional RNG seed for the `found` pick
#[derive(Debug, Clone, Default)]
pub struct GroverEstimator {
    seed: Option<u64>,
}

impl GroverEstimator {
    /// Create an estimator drawing from entropy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed for a deterministic `found` pick
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Estimate a Grover search over `items` for the given predicate
    ///
    /// Empty input or an all-false predicate yields the explicit
    /// no-result estimate rather than an indexing error.
    pub fn search<T, P>(&self, items: &[T], predicate: P) -> GroverEstimate<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        let targets: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .map(|(index, _)| index)
            .collect();

        if targets.is_empty() {
            return GroverEstimate::not_found();
        }

        let n = items.len() as f64;
        let m = targets.len() as f64;

        let iterations = (FRAC_PI_4 * (n / m).sqrt()).floor() as usize;
        let theta = (m / n).sqrt().asin();
        let probability = ((2 * iterations + 1) as f64 * theta)
            .sin()
            .powi(2)
            .clamp(0.0, 1.0);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let found = items[targets[rng.gen_range(0..targets.len())]].clone();

        log::debug!(
            "grover estimate: {} of {} items match, {} iterations, p = {:.4}",
            targets.len(),
            items.len(),
            iterations,
            probability
        );

        GroverEstimate {
            found: Some(found),
            iterations,
            probability,
        }
    }
}

/// Estimate a Grover search with an entropy-seeded `found` pick
pub fn grover_search<T, P>(items: &[T], predicate: P) -> GroverEstimate<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    GroverEstimator::new().search(items, predicate)
}
