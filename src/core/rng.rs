//! Random face sources for rolling dice.
//!
//! Dice never touch an RNG directly; they draw from a [`RandomSource`] so a
//! game can be driven by a seeded generator in play and by a fixed script in
//! tests.
//!
//! ```
//! use ship_of_fools::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.next_in_range(1, 6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_in_range(1, 6), b.next_in_range(1, 6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source over a closed range.
pub trait RandomSource {
    /// Draw a value in `min..=max`.
    fn next_in_range(&mut self, min: u8, max: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, min: u8, max: u8) -> u8 {
        (**self).next_in_range(min, max)
    }
}

/// Deterministic dice RNG.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, min: u8, max: u8) -> u8 {
        self.inner.gen_range(min..=max)
    }
}

/// Replays a fixed script of values.
///
/// Wraps around when the script runs out. Values outside the requested
/// range are clamped into it.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u8>,
    cursor: usize,
}

impl SequenceRng {
    /// Create a source that yields `values` in order.
    ///
    /// An empty script always yields the range minimum.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_in_range(&mut self, min: u8, max: u8) -> u8 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_in_range(1, 6), rng2.next_in_range(1, 6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.next_in_range(1, 6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.next_in_range(1, 6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let face = rng.next_in_range(1, 6);
            assert!((1..=6).contains(&face));
            seen[face as usize] = true;
        }
        assert!(seen[1..=6].iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut rng = SequenceRng::new([6, 5, 4]);
        let drawn: Vec<_> = (0..5).map(|_| rng.next_in_range(1, 6)).collect();
        assert_eq!(drawn, vec![6, 5, 4, 6, 5]);
        assert_eq!(rng.drawn(), 5);
    }

    #[test]
    fn test_sequence_clamps() {
        let mut rng = SequenceRng::new([0, 9]);
        assert_eq!(rng.next_in_range(1, 6), 1);
        assert_eq!(rng.next_in_range(1, 6), 6);
    }

    #[test]
    fn test_empty_sequence_yields_min() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.next_in_range(2, 6), 2);
    }

    #[test]
    fn test_mut_ref_is_source() {
        fn draw(mut source: impl RandomSource) -> u8 {
            source.next_in_range(1, 6)
        }
        let mut rng = SequenceRng::new([3]);
        assert_eq!(draw(&mut rng), 3);
        assert_eq!(rng.drawn(), 1);
    }
}
