//! Core game types: dice, the pool, players, RNG, errors, configuration.
//!
//! Nothing here knows about the crew hierarchy; banking rules live in
//! [`crate::rules`].

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod pool;
pub mod rank;
pub mod rng;

pub use config::{
    GameConfig, CAPTAIN, CREW_COST, DICE_COUNT, MATE, MAX_FACE, MAX_PLAYERS, MAX_THROWS, MIN_FACE, SHIP,
    WINNING_SCORE,
};
pub use die::Die;
pub use error::{DiceError, RoomError, TurnError};
pub use player::{Player, PlayerId};
pub use pool::{DiePool, LockState};
pub use rank::Rank;
pub use rng::{GameRng, RandomSource, SequenceRng};
