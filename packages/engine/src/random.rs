//! Injectable randomness.
//!
//! Every shuffle and distractor draw goes through [`RandomSource`] so tests
//! can substitute a seeded generator for the ambient one.

use rand::Rng;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Any `rand` generator is a usable source, so `rand::thread_rng()` and a
/// seeded `ChaCha8Rng` both plug in directly.
impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Uniform index into `0..len`. `len` must be non-zero.
pub(crate) fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    debug_assert!(len > 0);
    // next_f64 < 1.0, but guard the cast against float rounding anyway
    ((rng.next_f64() * len as f64) as usize).min(len - 1)
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub(crate) fn shuffle<T>(rng: &mut dyn RandomSource, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = pick_index(rng, i + 1);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for len in 1..20 {
            for _ in 0..100 {
                assert!(pick_index(&mut rng, len) < len);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut values: Vec<u32> = (0..17).collect();
        shuffle(&mut rng, &mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..17).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut rng, &mut empty);
        let mut single = vec![7u32];
        shuffle(&mut rng, &mut single);
        assert_eq!(single, vec![7]);
    }
}
