//! Outcome histograms for multi-shot sampling

use std::collections::HashMap;

/// Counts of observed basis-state outcomes across shots
///
/// Invariant: the sum of counts equals the number of recorded shots; both
/// grow together through [`OutcomeHistogram::record`] and
/// [`OutcomeHistogram::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeHistogram {
    counts: HashMap<u64, usize>,
    shots: usize,
}

impl OutcomeHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single shot outcome
    pub fn record(&mut self, outcome: u64) {
        *self.counts.entry(outcome).or_insert(0) += 1;
        self.shots += 1;
    }

    /// Total number of recorded shots
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Count for a specific outcome
    pub fn count(&self, outcome: u64) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Empirical frequency of an outcome (count / shots)
    pub fn frequency(&self, outcome: u64) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.shots as f64
    }

    /// Number of distinct observed outcomes
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over (outcome, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts.iter().map(|(&outcome, &count)| (outcome, count))
    }

    /// All outcomes sorted by count, descending
    pub fn sorted(&self) -> Vec<(u64, usize)> {
        let mut outcomes: Vec<_> = self.iter().collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Counts keyed by fixed-width '0'/'1' bitstrings
    ///
    /// Qubit 0 is the least significant bit, i.e. the rightmost character.
    pub fn bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (format!("{:0width$b}", outcome, width = num_qubits), count))
            .collect()
    }

    /// Absorb another histogram's counts
    pub fn merge(&mut self, other: OutcomeHistogram) {
        for (outcome, count) in other.counts {
            *self.counts.entry(outcome).or_insert(0) += count;
        }
        self.shots += other.shots;
    }
}

impl FromIterator<u64> for OutcomeHistogram {
    fn from_iter<I: IntoIterator<Item = u64>>(outcomes: I) -> Self {
        let mut histogram = Self::new();
        for outcome in outcomes {
            histogram.record(outcome);
        }
        histogram
    }
}
