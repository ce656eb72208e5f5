//! Weighted table with cumulative-sum sampling.
use rand::RngCore;

use crate::error::{Error, Result};
use crate::selection::draw01;

/// One outcome and its relative likelihood.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEntry<T> {
    pub outcome: T,
    pub weight: f64,
}

/// A set of outcomes, each with a positive weight, sampled proportionally.
///
/// Entries keep their insertion order. A running prefix sum is maintained on every
/// [`WeightedTable::add`], so sampling is a binary search over cumulative weights.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
    cumulative: Vec<f64>,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cumulative: Vec::new(),
        }
    }

    /// Build a table from `(outcome, weight)` pairs, failing on the first bad weight.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut table = Self::new();
        for (outcome, weight) in entries {
            table.add(outcome, weight)?;
        }
        Ok(table)
    }

    /// Append an entry. Weights must be finite and strictly positive.
    pub fn add(&mut self, outcome: T, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        self.push_positive(outcome, weight);
        Ok(())
    }

    /// Append an entry whose weight is known to be valid.
    pub(crate) fn push_positive(&mut self, outcome: T, weight: f64) {
        debug_assert!(weight.is_finite() && weight > 0.0, "bad weight {weight}");
        let total = self.total_weight() + weight;
        self.entries.push(WeightedEntry { outcome, weight });
        self.cumulative.push(total);
    }

    /// Builder form of [`WeightedTable::add`].
    pub fn with(mut self, outcome: T, weight: f64) -> Result<Self> {
        self.add(outcome, weight)?;
        Ok(self)
    }

    /// Sum of all weights, `0.0` for an empty table.
    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.outcome)
    }

    /// Selection probability of the entry at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let total = self.total_weight();
        self.entries.get(index).map(|e| e.weight / total)
    }

    /// Map a uniform draw in `[0, 1)` to an outcome.
    ///
    /// Returns the first entry whose cumulative weight strictly exceeds
    /// `draw * total_weight`. A draw that rounds onto the total resolves to the
    /// last entry.
    pub fn sample(&self, draw: f64) -> Result<&T> {
        let last = self.entries.last().ok_or(Error::EmptyTable)?;
        debug_assert!(
            (0.0..1.0).contains(&draw),
            "draw must be in [0, 1), got {draw}"
        );

        let r = draw * self.total_weight();
        let index = self.cumulative.partition_point(|&c| c <= r);
        Ok(self
            .entries
            .get(index)
            .map(|e| &e.outcome)
            .unwrap_or(&last.outcome))
    }

    /// Sample with a fresh draw taken from `rng`.
    pub fn sample_with(&self, rng: &mut dyn RngCore) -> Result<&T> {
        self.sample(draw01(rng))
    }
}
