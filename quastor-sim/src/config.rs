//! Sampler configuration

/// Configuration for the shot sampler
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Default number of measurement shots for consumers that do not pass
    /// an explicit count (the superposition evaluator)
    ///
    /// Default: 1000
    pub shots: usize,

    /// Random number generator seed for reproducibility
    ///
    /// Seeded runs are deterministic, including across thread counts:
    /// each shot derives its own RNG stream from the base seed and the
    /// shot index. If None, every shot draws from entropy.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Minimum shot count before sampling goes parallel
    ///
    /// Smaller runs stay single-threaded to avoid scheduling overhead.
    ///
    /// Default: 256
    pub parallel_threshold: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            shots: 1000,
            seed: None,
            parallel_threshold: 256,
        }
    }
}

impl SamplerConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default shot count
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the RNG seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the parallelism threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
