//! Banking rules: the Ship/Captain/Mate hierarchy.
//!
//! ## Hierarchy
//!
//! A 6 (Ship) may always be banked. A 5 (Captain) needs a banked Ship, a 4
//! (Mate) needs a banked Ship and Captain. Once one of each rank is aboard,
//! any die may be banked; until then, every other face waits behind the
//! first missing rank.
//!
//! ## Batches
//!
//! A batch is a list of positions, sorted by descending face by the caller.
//! It is evaluated in at most two passes over the still-pending requests:
//!
//! - Pass 1 tries every request once. Denied requests stay pending, since a
//!   request later in the list may supply the rank they need.
//! - Pass 2 retries the pending requests. The first denial is final: it is
//!   reported and every request after it is abandoned.
//!
//! Out-of-range positions are dropped silently in either pass.
//!
//! ```
//! use ship_of_fools::core::{DiePool, SequenceRng};
//! use ship_of_fools::rules::{BankingEngine, LockOutcome};
//!
//! let mut pool = DiePool::default();
//! pool.roll_unlocked(&mut SequenceRng::new([5, 6, 1, 1, 1]));
//!
//! // The Captain is listed before the Ship it depends on
//! let report = BankingEngine.apply_batch(&mut pool, &[0, 1]);
//! assert_eq!(report.entries()[0].outcome, LockOutcome::Locked { pass: 2 });
//! assert_eq!(report.entries()[1].outcome, LockOutcome::Locked { pass: 1 });
//! ```

use serde::{Deserialize, Serialize};

use crate::core::config::CREW_COST;
use crate::core::error::DiceError;
use crate::core::pool::{DiePool, LockState};
use crate::core::rank::Rank;

/// Passes made over a batch before denials become final.
const BATCH_PASSES: u8 = 2;

/// Which ranks are currently banked.
///
/// Always derived from the pool; never stored across locks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    pub ship: bool,
    pub captain: bool,
    pub mate: bool,
}

impl Crew {
    /// Read the banked ranks from a pool.
    #[must_use]
    pub fn of(pool: &DiePool) -> Self {
        Self {
            ship: pool.has_locked_face(Rank::Ship.face()),
            captain: pool.has_locked_face(Rank::Captain.face()),
            mate: pool.has_locked_face(Rank::Mate.face()),
        }
    }

    #[must_use]
    pub fn has(&self, rank: Rank) -> bool {
        match rank {
            Rank::Ship => self.ship,
            Rank::Captain => self.captain,
            Rank::Mate => self.mate,
        }
    }

    /// Ship, Captain and Mate are all aboard.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ship && self.captain && self.mate
    }

    /// First rank in precedence order that is not yet banked.
    #[must_use]
    pub fn first_missing(&self) -> Option<Rank> {
        Rank::ALL.into_iter().find(|&r| !self.has(r))
    }
}

/// Final outcome of one request in a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockOutcome {
    /// The die is banked. `pass` is 1 or 2.
    Locked { pass: u8 },
    /// The die was banked before this request; nothing changed.
    AlreadyLocked,
    /// Denied on the final pass for lack of `Rank`.
    Rejected(Rank),
    /// Position out of range; ignored.
    Dropped,
    /// Never decided: the batch stopped before reaching it.
    Abandoned,
    /// Failure the rules do not produce. Stops the batch.
    Defect(DiceError),
}

/// One request and what became of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub position: usize,
    /// Face at the time of the request (0 for dropped positions).
    pub value: u8,
    pub outcome: LockOutcome,
}

/// Per-request outcomes of a batch, in request order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Positions banked by this batch, in request order.
    ///
    /// Dice that were already banked are not included.
    #[must_use]
    pub fn locked(&self) -> Vec<usize> {
        self.positions_where(|o| matches!(o, LockOutcome::Locked { .. }))
    }

    /// Out-of-range positions that were ignored.
    #[must_use]
    pub fn dropped(&self) -> Vec<usize> {
        self.positions_where(|o| matches!(o, LockOutcome::Dropped))
    }

    /// Positions never decided because the batch stopped early.
    #[must_use]
    pub fn abandoned(&self) -> Vec<usize> {
        self.positions_where(|o| matches!(o, LockOutcome::Abandoned))
    }

    /// The final rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&BatchEntry> {
        self.entries
            .iter()
            .find(|e| matches!(e.outcome, LockOutcome::Rejected(_)))
    }

    /// The engine defect that stopped the batch, if any.
    #[must_use]
    pub fn defect(&self) -> Option<&BatchEntry> {
        self.entries
            .iter()
            .find(|e| matches!(e.outcome, LockOutcome::Defect(_)))
    }

    fn positions_where(&self, pred: impl Fn(&LockOutcome) -> bool) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| pred(&e.outcome))
            .map(|e| e.position)
            .collect()
    }
}

impl From<Vec<BatchEntry>> for BatchReport {
    fn from(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }
}

/// Stateless evaluator of the banking rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BankingEngine;

impl BankingEngine {
    /// Try to bank the die at `position`.
    ///
    /// Rank flags are read fresh from the pool on every call. A die that is
    /// already banked is reported as such without re-checking the hierarchy.
    pub fn try_lock(&self, pool: &mut DiePool, position: usize) -> Result<LockState, DiceError> {
        let value = pool.value_at(position)?;
        if pool.is_locked(position)? {
            return Ok(LockState::AlreadyLocked);
        }

        if value == Rank::Ship.face() {
            return pool.lock_at(position);
        }

        let crew = Crew::of(pool);
        for rank in Rank::ALL {
            if value == rank.face() && !crew.has(rank) {
                break;
            }
            if !crew.has(rank) {
                return Err(DiceError::LockDenied(rank));
            }
        }
        pool.lock_at(position)
    }

    /// Bank a batch of positions, sorted by descending face.
    ///
    /// See the module docs for the two-pass semantics. The pool is mutated
    /// in place; the report lists one outcome per request.
    pub fn apply_batch(&self, pool: &mut DiePool, requests: &[usize]) -> BatchReport {
        let mut outcomes: Vec<Option<LockOutcome>> = vec![None; requests.len()];

        'passes: for pass in 1..=BATCH_PASSES {
            for (slot, &position) in requests.iter().enumerate() {
                if outcomes[slot].is_some() {
                    continue;
                }
                match self.try_lock(pool, position) {
                    Ok(LockState::Locked) => {
                        tracing::trace!(position, pass, "banked");
                        outcomes[slot] = Some(LockOutcome::Locked { pass });
                    }
                    Ok(LockState::AlreadyLocked) => {
                        outcomes[slot] = Some(LockOutcome::AlreadyLocked);
                    }
                    Err(DiceError::IndexOutOfRange { .. }) => {
                        tracing::trace!(position, "dropping out-of-range request");
                        outcomes[slot] = Some(LockOutcome::Dropped);
                    }
                    Err(DiceError::LockDenied(rank)) if pass == BATCH_PASSES => {
                        tracing::debug!(position, %rank, "bank rejected");
                        outcomes[slot] = Some(LockOutcome::Rejected(rank));
                        break 'passes;
                    }
                    Err(DiceError::LockDenied(rank)) => {
                        tracing::trace!(position, %rank, "bank deferred to retry pass");
                    }
                    Err(err) => {
                        tracing::error!(position, pass, %err, "unexpected failure while banking");
                        outcomes[slot] = Some(LockOutcome::Defect(err));
                        break 'passes;
                    }
                }
            }
        }

        let entries = requests
            .iter()
            .zip(outcomes)
            .map(|(&position, outcome)| BatchEntry {
                position,
                value: pool.value_at(position).unwrap_or(0),
                outcome: outcome.unwrap_or(LockOutcome::Abandoned),
            })
            .collect();

        BatchReport { entries }
    }

    /// Turn score for a fully banked pool.
    ///
    /// The pool sum minus the crew's 15 points if Ship, Captain and Mate are
    /// all banked; otherwise 0.
    #[must_use]
    pub fn score(&self, pool: &DiePool) -> u32 {
        if Crew::of(pool).is_complete() {
            pool.sum().saturating_sub(CREW_COST)
        } else {
            0
        }
    }
}
