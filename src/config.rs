//! Construction-time options for [`WeightedSampler`](crate::WeightedSampler).

/// What to do with a weight set whose weights are all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroWeightPolicy {
    /// Fail with [`ProbError::ZeroSum`](crate::ProbError::ZeroSum).
    #[default]
    Reject,
    /// Treat the set as all-equal and sample uniformly.
    Uniform,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    pub seed: u64,
    pub zero_weights: ZeroWeightPolicy,
}

impl SamplerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_zero_weights(mut self, policy: ZeroWeightPolicy) -> Self {
        self.zero_weights = policy;
        self
    }
}
