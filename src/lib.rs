//! # loadeddice
//!
//! Seedable "loaded dice": weighted random selection over integer weights,
//! reproducible from a single `u64` seed.
//!
//! The sampler is
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method) carried out
//! in exact integer arithmetic, so the table encodes the requested proportions
//! with no rounding drift, and every draw is O(1).
//!
//! There are three layers:
//!
//! 1. [`UniformSource`]: a seeded PCG32 stream of uniform integers that can be
//!    [`reset`](UniformSource::reset) to replay its sequence.
//! 2. [`AliasTable`]: the immutable table. Drive it with any `rand::Rng`.
//! 3. [`WeightedSampler`]: a table plus its own source, for `sample()` with no
//!    arguments.
//!
//! On top of those, [`DropTable`] pairs items with weights and the
//! [`WeightedEnum`] / [`UniformEnum`] derives turn enums into static tables.
//!
//! ## Quick start
//!
//! ```rust
//! use loadeddice::WeightedSampler;
//!
//! # fn main() -> Result<(), loadeddice::ProbError> {
//! // 3/9, 4/9 and 2/9.
//! let mut die = WeightedSampler::new(&[3, 4, 2], 42)?;
//! let face = die.sample();
//! assert!(face < die.count());
//!
//! // Same seed, same rolls.
//! die.reset();
//! assert_eq!(die.sample(), face);
//! # Ok(()) }
//! ```
//!
//! ## Items and enums
//!
//! ```rust,ignore
//! use loadeddice::{DropTable, UniformSource, WeightedEnum};
//!
//! #[derive(Copy, Clone, Debug, WeightedEnum)]
//! enum Loot {
//!     #[weight(60)] Common,
//!     #[weight(30)] Uncommon,
//!     #[weight(9)]  Rare,
//!     #[weight(1)]  Legendary,
//! }
//!
//! let mut src = UniformSource::new(7);
//! let loot = Loot::droptable()?;
//! let item = loot.sample_owned(&mut src);
//!
//! let tiers = DropTable::from_pairs([("bronze", 5), ("silver", 3), ("gold", 1)])?;
//! let tier = tiers.sample(&mut src); // &&str
//! ```
//!
//! ## Performance
//! * **Build**: O(n); skipped entirely when all weights are equal.
//! * **Sample**: O(1) per draw (2 random numbers, 1 branch; 1 number on the fast path).
//! * **Space**: 2 vectors of length `n` (u128 + usize), or none on the fast path.
//!
//! ## Gotchas
//! * Weights must be **non-negative** and not all zero (see [`ZeroWeightPolicy`]).
//! * Tables are *fixed*. To change weights, build a new one.
//! * Not for cryptography.

mod config;
mod error;
mod sampler;
mod source;
mod staticdt;
mod walker;

pub use config::{SamplerConfig, ZeroWeightPolicy};
pub use error::ProbError;
pub use sampler::WeightedSampler;
pub use source::UniformSource;
pub use staticdt::StaticDropTable;
pub use walker::AliasTable;

/// Derive macros imported from `loadeddice_macros`.
/// See the crate-level example for usage.
pub use loadeddice_macros::{UniformEnum, WeightedEnum};

use rand::Rng;

/// A generic "drop table": associates items with integer weights and samples
/// them using an internal [`AliasTable`].
///
/// Build it from any iterator of `(item, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct DropTable<T> {
    alias: AliasTable,
    items: Vec<T>,
}

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedEnum::ENTRIES`].
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs, in declaration order.
    const ENTRIES: &'static [(Self, i64)];
    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// Builds a table that samples variants in proportion to their weights.
    ///
    /// # Errors
    /// See [`AliasTable::new`].
    fn droptable() -> Result<StaticDropTable<Self>, ProbError> {
        let weights: Vec<i64> = Self::ENTRIES.iter().map(|&(_, w)| w).collect();
        let table = AliasTable::new(&weights)?;
        Ok(StaticDropTable::new(table, Self::VARIANTS))
    }
}

/// Trait implemented by the `UniformEnum` derive macro.
///
/// The uniform case is just equal weights, so the table takes the alias fast path
/// and stores nothing but its length.
pub trait UniformEnum: Sized + 'static {
    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// # Errors
    /// [`ProbError::Empty`] for an enum with no variants.
    fn droptable() -> Result<StaticDropTable<Self>, ProbError> {
        let table = AliasTable::new(&vec![1; Self::VARIANTS.len()])?;
        Ok(StaticDropTable::new(table, Self::VARIANTS))
    }
}

impl<T> DropTable<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if there are no items.
    /// * [`ProbError::Negative`] if any weight is negative.
    /// * [`ProbError::ZeroSum`] if every weight is zero.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let (items, weights): (Vec<T>, Vec<i64>) = pairs.into_iter().unzip();
        let alias = AliasTable::new(&weights)?;
        Ok(Self { alias, items })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    ///
    /// # Panics
    /// Never panics for a well-constructed table.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        let idx = self.alias.sample_index(rng);
        &self.items[idx]
    }

    /// Sample an item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don't need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.items[self.alias.sample_index(rng)].clone()
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.alias.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.alias.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}
