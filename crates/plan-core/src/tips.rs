//! Daily health tip sampling.

use crate::content::HEALTH_TIPS;
use crate::random::RandomSource;

/// Number of tips attached to each day.
pub const TIPS_PER_DAY: usize = 2;

/// Draw `count` distinct tips from the pool in random order.
///
/// Shuffles a copy of the pool (Fisher-Yates) and takes the first `count`.
/// A `count` larger than the pool returns the whole pool shuffled.
pub fn sample_tips(count: usize, rng: &mut dyn RandomSource) -> Vec<String> {
    sample_from(&HEALTH_TIPS, count, rng)
}

/// Draw `count` distinct entries from `pool`.
pub fn sample_from(pool: &[&str], count: usize, rng: &mut dyn RandomSource) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = pick_index(rng.next_uniform(), i + 1);
        shuffled.swap(i, j);
    }

    shuffled
        .into_iter()
        .take(count)
        .map(str::to_string)
        .collect()
}

/// Map a uniform value onto `0..len`.
fn pick_index(uniform: f64, len: usize) -> usize {
    let index = (uniform * len as f64) as usize;
    index.min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use std::collections::HashSet;

    /// Replays a fixed list of values.
    struct Sequence {
        values: Vec<f64>,
        next: usize,
    }

    impl RandomSource for Sequence {
        fn next_uniform(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn test_two_distinct_tips_from_pool() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..100 {
            let tips = sample_tips(TIPS_PER_DAY, &mut rng);
            assert_eq!(tips.len(), 2);
            assert_ne!(tips[0], tips[1]);
            for tip in &tips {
                assert!(HEALTH_TIPS.contains(&tip.as_str()));
            }
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..7 {
            assert_eq!(sample_tips(2, &mut a), sample_tips(2, &mut b));
        }
    }

    #[test]
    fn test_injected_sequence() {
        // 0.0 always swaps the current tail with the head.
        let mut rng = Sequence {
            values: vec![0.0],
            next: 0,
        };
        let picked = sample_from(&["a", "b", "c"], 2, &mut rng);
        // [a,b,c] -> swap(2,0) [c,b,a] -> swap(1,0) [b,c,a]
        assert_eq!(picked, vec!["b", "c"]);
    }

    #[test]
    fn test_top_of_range_is_clamped() {
        assert_eq!(pick_index(0.999_999_999, 4), 3);
        assert_eq!(pick_index(0.0, 4), 0);
    }

    #[test]
    fn test_count_larger_than_pool() {
        let mut rng = SeededRandom::new(1);
        let tips = sample_tips(50, &mut rng);
        assert_eq!(tips.len(), HEALTH_TIPS.len());
        let unique: HashSet<_> = tips.iter().collect();
        assert_eq!(unique.len(), HEALTH_TIPS.len());
    }
}
