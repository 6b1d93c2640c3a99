//! Numeric helpers shared by the selector and the agents.
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// The `p`-th percentile of `xs`, `0 <= p <= 100`, with linear
/// interpolation between order statistics.
///
/// These are the numpy default semantics: the rank is
/// `p / 100 * (len - 1)` and the value is interpolated between the two
/// neighboring order statistics. The reward bound of the elite selector is
/// computed with this rule, so it doubles as a stopping-condition input
/// and must stay consistent.
///
/// Panics if `xs` is empty or `p` is out of range; callers pass validated
/// batches and compiled-in percentiles.
pub fn percentile(xs: &[f32], p: f64) -> f32 {
    assert!(!xs.is_empty(), "percentile of an empty slice");
    assert!((0.0..=100.0).contains(&p), "percentile out of range: {}", p);

    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = (rank - lo as f64) as f32;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Arithmetic mean of `xs`. Panics on an empty slice.
pub fn mean(xs: &[f32]) -> f32 {
    assert!(!xs.is_empty(), "mean of an empty slice");
    xs.iter().sum::<f32>() / xs.len() as f32
}

/// Draws one index from the categorical distribution given by `probs`.
///
/// This is the single weighted-sampling routine used for action
/// selection. Randomness comes from the injected `rng`, so seeding the
/// caller's RNG makes sampling deterministic.
///
/// Panics if `probs` is not a valid weight vector (all zero, or a
/// negative entry); policies produce normalized distributions.
pub fn sample_weighted<R: Rng>(rng: &mut R, probs: &[f32]) -> usize {
    let dist = WeightedIndex::new(probs).expect("invalid probability vector");
    dist.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn percentile_interpolates_linearly() {
        let rewards = [10.0, 20.0, 30.0, 40.0];
        assert!((percentile(&rewards, 70.0) - 31.0).abs() < 1e-5);
        assert!((percentile(&rewards, 50.0) - 25.0).abs() < 1e-5);
        assert_eq!(percentile(&rewards, 0.0), 10.0);
        assert_eq!(percentile(&rewards, 100.0), 40.0);
    }

    #[test]
    fn percentile_of_single_element() {
        assert_eq!(percentile(&[3.5], 70.0), 3.5);
    }

    #[test]
    fn percentile_ignores_input_order() {
        assert!((percentile(&[40.0, 10.0, 30.0, 20.0], 70.0) - 31.0).abs() < 1e-5);
    }

    #[test]
    fn mean_of_rewards() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), 25.0);
    }

    #[test]
    fn sample_weighted_respects_support() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let ix = sample_weighted(&mut rng, &[0.0, 1.0, 0.0]);
            assert_eq!(ix, 1);
        }
    }

    #[test]
    fn sample_weighted_is_deterministic_under_seed() {
        let probs = [0.25, 0.5, 0.25];
        let draw = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..10).map(|_| sample_weighted(&mut rng, &probs)).collect::<Vec<_>>()
        };
        assert_eq!(draw(11), draw(11));
        for ix in draw(11) {
            assert!(ix < probs.len());
        }
    }
}
