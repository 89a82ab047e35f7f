use loadeddice::{AliasTable, ProbError, WeightedSampler};
use proptest::prelude::*;

fn weights_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10_000, 1..64).prop_filter("not all zero", |w| {
        w.iter().any(|&x| x > 0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn samples_stay_in_range(weights in weights_strategy(), seed in any::<u64>()) {
        let mut s = WeightedSampler::new(&weights, seed).unwrap();
        for _ in 0..200 {
            let i = s.sample();
            prop_assert!(i < weights.len());
            prop_assert!(weights[i] > 0, "drew zero-weight index {}", i);
        }
    }

    #[test]
    fn masses_match_weights_exactly(weights in weights_strategy()) {
        let t = AliasTable::new(&weights).unwrap();
        let n = weights.len() as u128;
        let total: u128 = weights.iter().map(|&w| w as u128).sum();
        prop_assert_eq!(t.total(), total);
        if t.is_uniform() {
            prop_assert!(weights.iter().all(|&w| w == weights[0]));
        }
        let masses = t.scaled_masses();
        if !t.is_uniform() {
            let expect: Vec<u128> = weights.iter().map(|&w| w as u128 * n).collect();
            prop_assert_eq!(masses, expect);
        }
    }

    #[test]
    fn same_seed_same_rolls(weights in weights_strategy(), seed in any::<u64>()) {
        let mut a = WeightedSampler::new(&weights, seed).unwrap();
        let mut b = WeightedSampler::new(&weights, seed).unwrap();
        let ra: Vec<usize> = (0..64).map(|_| a.sample()).collect();
        let rb: Vec<usize> = (0..64).map(|_| b.sample()).collect();
        prop_assert_eq!(&ra, &rb);

        a.reset();
        let again: Vec<usize> = (0..64).map(|_| a.sample()).collect();
        prop_assert_eq!(ra, again);
    }

    #[test]
    fn any_negative_weight_is_rejected(
        mut weights in prop::collection::vec(0i64..100, 1..32),
        at in any::<prop::sample::Index>(),
        neg in i64::MIN..0,
    ) {
        let idx = at.index(weights.len());
        weights[idx] = neg;
        let err = AliasTable::new(&weights).unwrap_err();
        prop_assert_eq!(err, ProbError::Negative { index: idx, value: neg });
    }
}
