//! Goodness-of-fit checks on long seeded runs.

use loadeddice::WeightedSampler;

const DRAWS: usize = 90_000;

fn counts(sampler: &mut WeightedSampler, draws: usize) -> Vec<u64> {
    let mut counts = vec![0u64; sampler.count()];
    for _ in 0..draws {
        counts[sampler.sample()] += 1;
    }
    counts
}

/// Pearson's statistic against expected proportions `weights / sum(weights)`.
fn chi_squared(counts: &[u64], weights: &[i64]) -> f64 {
    let draws: u64 = counts.iter().sum();
    let total: i64 = weights.iter().sum();
    counts
        .iter()
        .zip(weights)
        .map(|(&obs, &w)| {
            let expected = draws as f64 * w as f64 / total as f64;
            (obs as f64 - expected).powi(2) / expected
        })
        .sum()
}

#[test]
fn equal_weights_converge_to_quarter_each() {
    let weights = [1, 1, 1, 1];
    let mut s = WeightedSampler::new(&weights, 20_240_601).unwrap();
    assert!(s.is_uniform());

    let c = counts(&mut s, DRAWS);
    // df = 3, p = 0.001
    let stat = chi_squared(&c, &weights);
    assert!(stat < 16.27, "chi2={stat} counts={c:?}");
}

#[test]
fn loaded_die_converges_to_weights() {
    let weights = [3, 4, 2];
    let mut s = WeightedSampler::new(&weights, 77).unwrap();
    assert!(!s.is_uniform());
    assert_eq!(s.total(), 9);

    let c = counts(&mut s, DRAWS);
    // df = 2, p = 0.001
    let stat = chi_squared(&c, &weights);
    assert!(stat < 13.82, "chi2={stat} counts={c:?}");

    for (i, &w) in weights.iter().enumerate() {
        let emp = c[i] as f64 / DRAWS as f64;
        let p = w as f64 / 9.0;
        assert!((emp - p).abs() < 0.01, "i={i} emp={emp} p={p}");
    }
}

#[test]
fn skewed_weights_respect_zeros() {
    let weights = [150, 40, 0, 15, 3];
    let mut s = WeightedSampler::new(&weights, 5).unwrap();
    let c = counts(&mut s, DRAWS);
    assert_eq!(c[2], 0);

    let nonzero: Vec<(u64, i64)> = c
        .iter()
        .zip(weights)
        .filter(|&(_, w)| w > 0)
        .map(|(&c, w)| (c, w))
        .collect();
    let (obs, w): (Vec<u64>, Vec<i64>) = nonzero.into_iter().unzip();
    // df = 3, p = 0.001
    let stat = chi_squared(&obs, &w);
    assert!(stat < 16.27, "chi2={stat} counts={c:?}");
}
