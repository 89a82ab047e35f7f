//! Seedable uniform integer source.
//!
//! [`UniformSource`] owns a PCG32 stream and remembers the seed it was built from,
//! so the whole sequence can be replayed with [`UniformSource::reset`]. It also
//! implements [`rand::RngCore`], which makes it usable anywhere a `rand::Rng` is
//! expected (for instance [`AliasTable::sample_index`](crate::AliasTable::sample_index)).

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::ProbError;

/// Deterministic uniform integer generator.
///
/// Two sources built from the same seed yield identical outputs for identical
/// call sequences. Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u64,
    rng: Pcg32,
}

impl UniformSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed the current stream started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from the original seed.
    pub fn reset(&mut self) {
        tracing::trace!(seed = self.seed, "resetting uniform source");
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Switch to a new seed. Later calls to [`reset`](Self::reset) return here.
    pub fn reseed(&mut self, seed: u64) {
        tracing::trace!(old = self.seed, new = seed, "reseeding uniform source");
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Uniform integer in `[0, exclusive_upper)`.
    ///
    /// # Errors
    /// [`ProbError::InvalidBound`] if `exclusive_upper <= 0`.
    pub fn next_int(&mut self, exclusive_upper: i64) -> Result<i64, ProbError> {
        if exclusive_upper <= 0 {
            return Err(ProbError::InvalidBound {
                bound: exclusive_upper,
            });
        }
        Ok(self.rng.random_range(0..exclusive_upper))
    }

    /// Uniform integer in `[inclusive_lower, exclusive_upper)`.
    ///
    /// # Errors
    /// [`ProbError::InvalidRange`] if `inclusive_lower >= exclusive_upper`.
    pub fn next_int_range(
        &mut self,
        inclusive_lower: i64,
        exclusive_upper: i64,
    ) -> Result<i64, ProbError> {
        if inclusive_lower >= exclusive_upper {
            return Err(ProbError::InvalidRange {
                low: inclusive_lower,
                high: exclusive_upper,
            });
        }
        Ok(self.rng.random_range(inclusive_lower..exclusive_upper))
    }

    /// Uniform integer in `[inclusive_lower, i64::MAX)`.
    ///
    /// # Errors
    /// [`ProbError::InvalidRange`] if `inclusive_lower == i64::MAX`.
    pub fn next_int_from(&mut self, inclusive_lower: i64) -> Result<i64, ProbError> {
        self.next_int_range(inclusive_lower, i64::MAX)
    }

    /// `+1` or `-1` with equal odds.
    pub fn next_sign(&mut self) -> i64 {
        if self.rng.random_bool(0.5) { 1 } else { -1 }
    }

    /// Pick one element uniformly; `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..items.len());
        items.get(i)
    }
}

impl RngCore for UniformSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
