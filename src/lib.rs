//! # ship-of-fools
//!
//! Rules engine for the Ship of Fools dice game.
//!
//! Each turn a player rolls five dice up to three times, banking dice between
//! throws. Banking follows the crew hierarchy: a 6 (Ship) first, then a 5
//! (Captain), then a 4 (Mate); only with the full crew aboard can other dice
//! be banked. A turn scores the sum of all five dice minus the crew's 15
//! points, or 0 without a full crew. The first player to 21 wins.
//!
//! ## Modules
//!
//! - `core`: Dice, the dice pool, players, RNG, errors, configuration
//! - `rules`: Banking engine and the per-turn state machine
//! - `selection`: Bank selection input (parsing, scripted input, bots)
//! - `display`: Terminal rendering of rolls and the leaderboard
//! - `room`: Players, rounds and game end
//!
//! ## Example
//!
//! ```
//! use ship_of_fools::{DiePool, SequenceRng, TurnController, TurnPhase};
//!
//! let mut rng = SequenceRng::new([6, 6, 5, 4, 2]);
//! let mut turn = TurnController::new(DiePool::default());
//!
//! turn.roll(&mut rng).unwrap();
//! turn.bank(&[0, 1, 2, 3, 4]).unwrap();
//!
//! // (6 + 6 + 5 + 4 + 2) - 15
//! assert_eq!(turn.phase(), TurnPhase::Finished { score: 8 });
//! ```

pub mod core;
pub mod display;
pub mod room;
pub mod rules;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{
    DiceError, Die, DiePool, GameConfig, GameRng, LockState, Player, PlayerId, RandomSource, Rank,
    RoomError, SequenceRng, TurnError,
};

pub use crate::rules::{
    BankingEngine, BatchEntry, BatchReport, Crew, LockOutcome, TurnController, TurnPhase,
};

pub use crate::selection::{CrewFirst, ScriptedSelection, SelectionError, SelectionInput};

pub use crate::room::{NoopObserver, Room, TurnObserver};
