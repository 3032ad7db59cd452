//! Error types for dice and turn operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rank::Rank;
use crate::rules::TurnPhase;

/// Errors raised by dice, pool and banking operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DiceError {
    /// A locked die was rolled. Always a caller bug.
    #[error("cannot roll a locked die")]
    InvalidOperation,

    #[error("position {position} out of range for pool of {size} dice")]
    IndexOutOfRange { position: usize, size: usize },

    /// The crew hierarchy forbids this lock right now.
    #[error("missing {0}")]
    LockDenied(Rank),
}

/// Errors raised by the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("expected turn phase {expected}, found {found}")]
    UnexpectedPhase {
        expected: &'static str,
        found: TurnPhase,
    },

    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Errors raised while seating players or running a room.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room is full, at most {capacity} players can join")]
    Full { capacity: usize },

    #[error(transparent)]
    Turn(#[from] TurnError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_denied_messages() {
        assert_eq!(DiceError::LockDenied(Rank::Ship).to_string(), "missing ship");
        assert_eq!(DiceError::LockDenied(Rank::Captain).to_string(), "missing captain");
        assert_eq!(DiceError::LockDenied(Rank::Mate).to_string(), "missing mate");
    }

    #[test]
    fn test_index_message() {
        let err = DiceError::IndexOutOfRange { position: 7, size: 5 };
        assert_eq!(err.to_string(), "position 7 out of range for pool of 5 dice");
    }
}
