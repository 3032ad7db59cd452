//! Fixed-size pool of dice addressed by stable slot position.
//!
//! Positions are the only addresses used for banking. Grouping banked dice to
//! one side for display goes through [`DiePool::display_order`], which returns
//! positions and never moves a die between slots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::DICE_COUNT;
use super::die::Die;
use super::error::DiceError;
use super::rng::RandomSource;

/// Result of a successful lock request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    /// The die was unlocked and is now locked.
    Locked,
    /// The die was already locked; nothing changed.
    AlreadyLocked,
}

/// Ordered, fixed-size collection of dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiePool {
    dice: SmallVec<[Die; DICE_COUNT]>,
}

impl Default for DiePool {
    fn default() -> Self {
        Self::new(DICE_COUNT)
    }
}

impl DiePool {
    /// Create a pool of `size` standard dice.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Pool must hold at least 1 die");
        Self {
            dice: (0..size).map(|_| Die::default()).collect(),
        }
    }

    /// Number of dice in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false; pools are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Iterate over `(position, &Die)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Die)> {
        self.dice.iter().enumerate()
    }

    /// Get the die at `position`.
    pub fn die(&self, position: usize) -> Result<&Die, DiceError> {
        self.dice.get(position).ok_or(DiceError::IndexOutOfRange {
            position,
            size: self.dice.len(),
        })
    }

    fn die_mut(&mut self, position: usize) -> Result<&mut Die, DiceError> {
        let size = self.dice.len();
        self.dice
            .get_mut(position)
            .ok_or(DiceError::IndexOutOfRange { position, size })
    }

    /// Roll every unlocked die in position order. Locked dice are untouched.
    pub fn roll_unlocked<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for die in self.dice.iter_mut().filter(|d| !d.is_locked()) {
            die.draw(rng);
        }
    }

    /// Lock the die at `position`.
    pub fn lock_at(&mut self, position: usize) -> Result<LockState, DiceError> {
        let die = self.die_mut(position)?;
        if die.is_locked() {
            return Ok(LockState::AlreadyLocked);
        }
        die.lock();
        Ok(LockState::Locked)
    }

    /// Release the die at `position`.
    pub fn unlock_at(&mut self, position: usize) -> Result<(), DiceError> {
        self.die_mut(position)?.unlock();
        Ok(())
    }

    /// Lock every die.
    pub fn lock_all(&mut self) {
        self.dice.iter_mut().for_each(Die::lock);
    }

    /// Release every die.
    pub fn unlock_all(&mut self) {
        self.dice.iter_mut().for_each(Die::unlock);
    }

    #[must_use]
    pub fn all_locked(&self) -> bool {
        self.dice.iter().all(Die::is_locked)
    }

    /// Whether the die at `position` is locked.
    pub fn is_locked(&self, position: usize) -> Result<bool, DiceError> {
        self.die(position).map(Die::is_locked)
    }

    /// Sum of all faces, locked or not.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|d| u32::from(d.value())).sum()
    }

    /// Face of the die at `position`.
    pub fn value_at(&self, position: usize) -> Result<u8, DiceError> {
        self.die(position).map(Die::value)
    }

    /// Whether some locked die shows `face`.
    #[must_use]
    pub fn has_locked_face(&self, face: u8) -> bool {
        self.dice.iter().any(|d| d.is_locked() && d.value() == face)
    }

    /// Positions with locked dice first, each group in slot order.
    #[must_use]
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.dice.len()).collect();
        order.sort_by_key(|&p| !self.dice[p].is_locked());
        order
    }

    #[cfg(test)]
    pub(crate) fn with_values(values: &[u8]) -> Self {
        Self {
            dice: values.iter().map(|&v| Die::with_value(v)).collect(),
        }
    }
}

impl std::fmt::Display for DiePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DiePool of size {}:", self.dice.len())?;
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                writeln!(f, ",")?;
            }
            write!(f, "{}", die)?;
        }
        Ok(())
    }
}
