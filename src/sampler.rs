use crate::{config::SamplerConfig, error::ProbError, source::UniformSource, walker::AliasTable};

/// A loaded die: an [`AliasTable`] bundled with the [`UniformSource`] that rolls it.
///
/// `sample()` takes `&mut self` because every roll advances the source. To roll
/// one table from several threads, either wrap the sampler in a `Mutex` or share
/// [`table()`](Self::table) and give each thread its own source.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    table: AliasTable,
    source: UniformSource,
}

impl WeightedSampler {
    /// Build from weights and a seed, rejecting all-zero weight sets.
    ///
    /// # Errors
    /// See [`AliasTable::new`].
    pub fn new(weights: &[i64], seed: u64) -> Result<Self, ProbError> {
        Self::with_config(weights, SamplerConfig::default().with_seed(seed))
    }

    /// # Errors
    /// See [`AliasTable::with_policy`].
    pub fn with_config(weights: &[i64], config: SamplerConfig) -> Result<Self, ProbError> {
        let table = AliasTable::with_policy(weights, config.zero_weights)?;
        Ok(Self::from_parts(table, UniformSource::new(config.seed)))
    }

    pub fn from_parts(table: AliasTable, source: UniformSource) -> Self {
        Self { table, source }
    }

    pub fn into_parts(self) -> (AliasTable, UniformSource) {
        (self.table, self.source)
    }

    /// Roll the die: an index in `[0, count())` with probability `weight / total`.
    #[inline]
    pub fn sample(&mut self) -> usize {
        self.table.sample_index(&mut self.source)
    }

    /// Number of outcomes.
    #[inline]
    pub fn count(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn total(&self) -> u128 {
        self.table.total()
    }

    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.table.is_uniform()
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn source_mut(&mut self) -> &mut UniformSource {
        &mut self.source
    }

    /// Restart the roll sequence from the source's seed.
    pub fn reset(&mut self) {
        self.source.reset();
    }
}
