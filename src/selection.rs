//! Bank selection input.
//!
//! After every roll a [`SelectionInput`] names the positions to bank. The
//! banking engine expects them ordered by descending face, so every input
//! here returns positions through [`order_by_value`].

use std::collections::VecDeque;

use crate::core::{DiePool, Player, Rank};
use crate::rules::Crew;

/// Errors from parsing a typed selection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("index {position} out of range, pool has {size} dice")]
    IndexOutOfRange { position: usize, size: usize },
}

/// Source of bank selections.
pub trait SelectionInput {
    /// Choose positions to bank after throw number `throw` (1-based).
    fn select(&mut self, player: &Player, pool: &DiePool, throw: u8) -> Vec<usize>;
}

/// Parse a typed selection into positions ordered by descending face.
///
/// Every decimal digit is one position, so `"0 2 4"`, `"024"` and `"0,2,4"`
/// all ask for the same dice. Repeats keep their first occurrence.
///
/// ```
/// use ship_of_fools::core::{DiePool, SequenceRng};
/// use ship_of_fools::selection::parse_selection;
///
/// let mut pool = DiePool::default();
/// pool.roll_unlocked(&mut SequenceRng::new([2, 6, 4, 5, 1]));
/// assert_eq!(parse_selection("0 1 2, 3", &pool), Ok(vec![1, 3, 2, 0]));
/// ```
pub fn parse_selection(text: &str, pool: &DiePool) -> Result<Vec<usize>, SelectionError> {
    let mut positions = Vec::new();
    for digit in text.chars().filter_map(|c| c.to_digit(10)) {
        let position = digit as usize;
        if position >= pool.len() {
            return Err(SelectionError::IndexOutOfRange {
                position,
                size: pool.len(),
            });
        }
        if !positions.contains(&position) {
            positions.push(position);
        }
    }
    Ok(order_by_value(pool, positions))
}

/// Sort positions by descending face. Ties keep their input order.
///
/// Out-of-range positions sort last; banking drops them.
#[must_use]
pub fn order_by_value(pool: &DiePool, mut positions: Vec<usize>) -> Vec<usize> {
    positions.sort_by_key(|&p| std::cmp::Reverse(pool.value_at(p).unwrap_or(0)));
    positions
}

// =============================================================================
// Scripted Input
// =============================================================================

/// Replays pre-recorded selections, one per roll.
///
/// Once the script runs out, every further selection is empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSelection {
    script: VecDeque<Vec<usize>>,
    sort: bool,
}

impl ScriptedSelection {
    /// Replay selections exactly as given.
    pub fn new(script: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            sort: false,
        }
    }

    /// Replay selections, ordering each by descending face first.
    pub fn sorted(script: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            sort: true,
            ..Self::new(script)
        }
    }

    /// Selections not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SelectionInput for ScriptedSelection {
    fn select(&mut self, _player: &Player, pool: &DiePool, _throw: u8) -> Vec<usize> {
        let picks = self.script.pop_front().unwrap_or_default();
        if self.sort {
            order_by_value(pool, picks)
        } else {
            picks
        }
    }
}

// =============================================================================
// Crew-First Strategy
// =============================================================================

/// Bot that completes the crew first, then banks every high die.
///
/// Banks the missing ranks in precedence order as soon as they show up.
/// Once the crew is aboard, banks any unlocked die at or above `keep_from`.
#[derive(Clone, Copy, Debug)]
pub struct CrewFirst {
    pub keep_from: u8,
}

impl Default for CrewFirst {
    fn default() -> Self {
        Self {
            keep_from: Rank::Mate.face(),
        }
    }
}

impl SelectionInput for CrewFirst {
    fn select(&mut self, _player: &Player, pool: &DiePool, _throw: u8) -> Vec<usize> {
        let mut crew = Crew::of(pool);
        let mut picks = Vec::new();

        for rank in Rank::ALL {
            if crew.has(rank) {
                continue;
            }
            let found = pool
                .iter()
                .find(|(p, d)| !d.is_locked() && d.value() == rank.face() && !picks.contains(p))
                .map(|(p, _)| p);
            match found {
                Some(position) => {
                    picks.push(position);
                    match rank {
                        Rank::Ship => crew.ship = true,
                        Rank::Captain => crew.captain = true,
                        Rank::Mate => crew.mate = true,
                    }
                }
                None => break,
            }
        }

        if crew.is_complete() {
            let keepers: Vec<usize> = pool
                .iter()
                .filter(|(p, d)| !d.is_locked() && d.value() >= self.keep_from && !picks.contains(p))
                .map(|(p, _)| p)
                .collect();
            picks.extend(keepers);
        }

        order_by_value(pool, picks)
    }
}
