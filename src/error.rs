use thiserror::Error;

/// Everything that can go wrong when building a table or drawing from a bounded range.
///
/// Every variant is an invalid-argument condition: the caller passed input that can
/// never be sampled. Nothing here is transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbError {
    #[error("weights slice is empty")]
    Empty,

    #[error("weights contain a negative value at index {index}: {value}")]
    Negative { index: usize, value: i64 },

    #[error("sum of weights is zero")]
    ZeroSum,

    #[error("exclusive upper bound must be positive, got {bound}")]
    InvalidBound { bound: i64 },

    #[error("lower bound {low} must be less than upper bound {high}")]
    InvalidRange { low: i64, high: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ProbError::Negative { index: 1, value: -1 };
        assert_eq!(
            err.to_string(),
            "weights contain a negative value at index 1: -1"
        );
        assert_eq!(
            ProbError::InvalidRange { low: 5, high: 5 }.to_string(),
            "lower bound 5 must be less than upper bound 5"
        );
    }
}
