//! Seeded random sources.
//!
//! Every annealing run owns its generator; nothing in the crate touches a
//! process-wide RNG once a run has started.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives the seed of worker `index` from a base seed.
pub(crate) fn worker_seed(base: Option<u64>, index: usize) -> Option<u64> {
    base.map(|seed| seed.wrapping_add(index as u64 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_worker_seeds_are_distinct() {
        let seeds: Vec<_> = (0..6).map(|i| worker_seed(Some(42), i)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(worker_seed(None, 3), None);
    }
}
