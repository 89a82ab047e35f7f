//! Vose's alias method over integer weights, O(1) sampling after O(n) setup.
//!
//! Probabilities are kept as fixed-point thresholds against the weight total, so
//! the table reproduces the input proportions exactly: for each index `j`,
//! `prob[j]` plus the slack `total - prob[i]` of every slot `i` aliased to `j`
//! equals `weight[j] * n`.
//!
//! The arithmetic runs in `u128`. A weight is below 2^63 and `n` is at most 2^64,
//! so every `weight * n`, and the weight total, stays below 2^127.

use crate::config::ZeroWeightPolicy;
use crate::error::ProbError;
use rand::Rng;

/// Alias table for discrete distribution sampling.
///
/// Immutable once built; share it freely across threads and drive it with any
/// `rand::Rng` (one per thread).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    n: usize,
    total: u128,
    uniform: bool,
    prob: Vec<u128>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if `weights` is empty.
    /// * [`ProbError::Negative`] for the first negative weight.
    /// * [`ProbError::ZeroSum`] if every weight is zero.
    pub fn new(weights: &[i64]) -> Result<Self, ProbError> {
        Self::with_policy(weights, ZeroWeightPolicy::Reject)
    }

    /// Like [`new`](Self::new), but an all-zero set follows `zero_weights`.
    pub fn with_policy(weights: &[i64], zero_weights: ZeroWeightPolicy) -> Result<Self, ProbError> {
        let n = weights.len();
        if n == 0 {
            return Err(ProbError::Empty);
        }

        let mut total = 0u128;
        let mut max = 0u128;
        let mut min = u128::MAX;
        for (i, &w) in weights.iter().enumerate() {
            let w = u128::try_from(w).map_err(|_| ProbError::Negative { index: i, value: w })?;
            total += w;
            max = max.max(w);
            min = min.min(w);
        }
        if total == 0 && zero_weights == ZeroWeightPolicy::Reject {
            return Err(ProbError::ZeroSum);
        }

        if max == min {
            tracing::debug!(n, total, "all weights equal, using uniform fast path");
            return Ok(Self {
                n,
                total,
                uniform: true,
                prob: Vec::new(),
                alias: Vec::new(),
            });
        }

        let scale = n as u128;
        let mut scaled: Vec<u128> = weights.iter().map(|&w| w as u128 * scale).collect();

        let mut prob = vec![0u128; n];
        let mut alias = (0..n).collect::<Vec<_>>();

        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);

        for (i, &p) in scaled.iter().enumerate() {
            if p < total {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        while let (Some(s), Some(l)) = (small.last().copied(), large.last().copied()) {
            small.pop();
            large.pop();

            prob[s] = scaled[s]; // in [0, total)
            alias[s] = l;

            // scaled[l] >= total > scaled[s], so this cannot underflow.
            scaled[l] -= total - scaled[s];

            if scaled[l] < total {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        for i in small.into_iter().chain(large) {
            prob[i] = total;
            alias[i] = i;
        }

        tracing::debug!(n, total, "built alias table");
        Ok(Self {
            n,
            total,
            uniform: false,
            prob,
            alias,
        })
    }

    /// Draw a single sample in O(1).
    ///
    /// Consumes one draw from `rng` on the uniform fast path, two otherwise.
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.n);
        if self.uniform {
            return i;
        }
        let r = rng.random_range(0..self.total);
        if r < self.prob[i] { i } else { self.alias[i] }
    }

    /// Draw k samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub(crate) fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.n];
        for _ in 0..draws {
            counts[self.sample_index(rng)] += 1;
        }
        counts
    }

    /// Number of outcomes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; construction rejects empty weight sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sum of the original (unscaled) weights.
    #[inline]
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Whether every outcome is equally likely and the table was skipped.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Scaled probability mass of each outcome, `weight[i] * n` (or `total` each on
    /// the fast path). Recomputed from the table; useful for audits, not for sampling.
    pub fn scaled_masses(&self) -> Vec<u128> {
        if self.uniform {
            return vec![self.total; self.n];
        }
        let mut mass = self.prob.clone();
        for (i, &a) in self.alias.iter().enumerate() {
            if a != i {
                mass[a] += self.total - self.prob[i];
            }
        }
        mass
    }
}
