//! A single die with a lock flag.

use serde::{Deserialize, Serialize};

use super::config::{MAX_FACE, MIN_FACE};
use super::error::DiceError;
use super::rng::RandomSource;

/// A die that can be rolled and banked.
///
/// A fresh die shows 0 until its first roll. The face only changes through
/// a roll, and a locked die refuses to roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    value: u8,
    min: u8,
    max: u8,
    locked: bool,
}

impl Default for Die {
    fn default() -> Self {
        Self::new(MIN_FACE, MAX_FACE)
    }
}

impl Die {
    /// Create an unrolled, unlocked die with faces `min..=max`.
    #[must_use]
    pub fn new(min: u8, max: u8) -> Self {
        assert!(min <= max, "Die face range must not be empty");
        Self {
            value: 0,
            min,
            max,
            locked: false,
        }
    }

    /// Current face (0 if never rolled).
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether the die is banked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Roll the die, returning the new face.
    ///
    /// Fails with `InvalidOperation` if the die is locked.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<u8, DiceError> {
        if self.locked {
            return Err(DiceError::InvalidOperation);
        }
        Ok(self.draw(rng))
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Draw a new face. Callers must have checked the lock.
    pub(crate) fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> u8 {
        debug_assert!(!self.locked);
        self.value = rng.next_in_range(self.min, self.max);
        self.value
    }

    #[cfg(test)]
    pub(crate) fn with_value(value: u8) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.locked { "--" } else { "  " };
        write!(f, "({}: {})", mark, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, SequenceRng};

    #[test]
    fn test_new_die_is_blank() {
        let die = Die::default();
        assert_eq!(die.value(), 0);
        assert!(!die.is_locked());
    }

    #[test]
    fn test_roll_sets_value() {
        let mut die = Die::default();
        let mut rng = SequenceRng::new([4]);
        assert_eq!(die.roll(&mut rng), Ok(4));
        assert_eq!(die.value(), 4);
    }

    #[test]
    fn test_roll_locked_fails() {
        let mut die = Die::default();
        let mut rng = SequenceRng::new([4, 2]);
        die.roll(&mut rng).unwrap();
        die.lock();

        assert_eq!(die.roll(&mut rng), Err(DiceError::InvalidOperation));
        assert_eq!(die.value(), 4);
        assert_eq!(rng.drawn(), 1, "locked roll must not consume randomness");
    }

    #[test]
    fn test_lock_unlock_idempotent() {
        let mut die = Die::default();
        die.lock();
        die.lock();
        assert!(die.is_locked());
        die.unlock();
        die.unlock();
        assert!(!die.is_locked());
    }

    #[test]
    fn test_custom_range() {
        let mut die = Die::new(2, 3);
        let mut rng = GameRng::new(11);
        for _ in 0..50 {
            let face = die.roll(&mut rng).unwrap();
            assert!((2..=3).contains(&face));
        }
    }

    #[test]
    fn test_display() {
        let mut die = Die::with_value(5);
        assert_eq!(format!("{}", die), "(  : 5)");
        die.lock();
        assert_eq!(format!("{}", die), "(--: 5)");
    }

    #[test]
    #[should_panic(expected = "Die face range must not be empty")]
    fn test_empty_range() {
        let _ = Die::new(6, 1);
    }
}
