//! Per-player turn state machine.
//!
//! ```text
//! AwaitingRoll(n) --roll--> AwaitingBankSelection(n) --bank--> AwaitingRoll(n-1)
//!                                                    \
//!                                                     +--> Finished(score)
//!                                   (pool full, or n == 1: force-lock, score)
//! ```
//!
//! A turn rolls at least once and at most `MAX_THROWS` times, and scores
//! exactly once, after every die is locked.

use serde::{Deserialize, Serialize};

use super::banking::{BankingEngine, BatchReport};
use crate::core::config::MAX_THROWS;
use crate::core::error::TurnError;
use crate::core::pool::DiePool;
use crate::core::rng::RandomSource;

/// Where a turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Unlocked dice must be rolled next.
    AwaitingRoll { throws_remaining: u8 },
    /// Dice are rolled; a bank selection must be supplied.
    AwaitingBankSelection { throws_remaining: u8 },
    /// Terminal. Every die is locked and the score is fixed.
    Finished { score: u32 },
}

impl TurnPhase {
    /// Short name of the phase, without its data.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll { .. } => "AwaitingRoll",
            TurnPhase::AwaitingBankSelection { .. } => "AwaitingBankSelection",
            TurnPhase::Finished { .. } => "Finished",
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingRoll { throws_remaining }
            | TurnPhase::AwaitingBankSelection { throws_remaining } => {
                write!(f, "{}({})", self.name(), throws_remaining)
            }
            TurnPhase::Finished { score } => write!(f, "Finished({})", score),
        }
    }
}

/// Drives one player's turn over an owned pool.
#[derive(Clone, Debug)]
pub struct TurnController {
    pool: DiePool,
    phase: TurnPhase,
    throws_taken: u8,
    engine: BankingEngine,
}

impl TurnController {
    /// Start a turn. Every die in `pool` is released.
    pub fn new(mut pool: DiePool) -> Self {
        pool.unlock_all();
        Self {
            pool,
            phase: TurnPhase::AwaitingRoll {
                throws_remaining: MAX_THROWS,
            },
            throws_taken: 0,
            engine: BankingEngine,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Read-only view of the pool for display.
    #[must_use]
    pub fn pool(&self) -> &DiePool {
        &self.pool
    }

    /// 1-based number of the throw in progress (or the last one taken).
    #[must_use]
    pub fn throw_number(&self) -> u8 {
        match self.phase {
            TurnPhase::AwaitingRoll { .. } => self.throws_taken + 1,
            _ => self.throws_taken,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TurnPhase::Finished { .. })
    }

    /// Final score, once the turn is finished.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self.phase {
            TurnPhase::Finished { score } => Some(score),
            _ => None,
        }
    }

    /// Roll every unlocked die.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<&DiePool, TurnError> {
        let TurnPhase::AwaitingRoll { throws_remaining } = self.phase else {
            return Err(self.unexpected("AwaitingRoll"));
        };

        self.pool.roll_unlocked(rng);
        self.throws_taken += 1;
        self.phase = TurnPhase::AwaitingBankSelection { throws_remaining };
        tracing::trace!(throw = self.throw_number(), sum = self.pool.sum(), "rolled");
        Ok(&self.pool)
    }

    /// Apply a bank selection, sorted by descending face.
    ///
    /// Ends the turn when the pool is full or this was the last throw.
    /// Rejected requests leave their dice unlocked and never fail the call.
    pub fn bank(&mut self, requests: &[usize]) -> Result<BatchReport, TurnError> {
        let TurnPhase::AwaitingBankSelection { throws_remaining } = self.phase else {
            return Err(self.unexpected("AwaitingBankSelection"));
        };

        let report = self.engine.apply_batch(&mut self.pool, requests);

        if self.pool.all_locked() || throws_remaining <= 1 {
            self.finish();
        } else {
            self.phase = TurnPhase::AwaitingRoll {
                throws_remaining: throws_remaining - 1,
            };
        }
        Ok(report)
    }

    /// Give the pool back for the next turn.
    #[must_use]
    pub fn into_pool(self) -> DiePool {
        self.pool
    }

    fn finish(&mut self) {
        self.pool.lock_all();
        let score = self.engine.score(&self.pool);
        tracing::debug!(score, throws = self.throws_taken, "turn finished");
        self.phase = TurnPhase::Finished { score };
    }

    fn unexpected(&self, expected: &'static str) -> TurnError {
        TurnError::UnexpectedPhase {
            expected,
            found: self.phase,
        }
    }
}
