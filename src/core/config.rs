//! Rule constants and session configuration.
//!
//! The rules of Ship of Fools are fixed: five six-sided dice, three throws
//! per turn, and the Ship/Captain/Mate chain on faces 6, 5 and 4. Only the
//! session-level settings (RNG seed, winning score) live in `GameConfig`.

use serde::{Deserialize, Serialize};

/// Number of dice in the pool.
pub const DICE_COUNT: usize = 5;

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Maximum number of throws in a single turn.
pub const MAX_THROWS: u8 = 3;

/// Players a room can seat; every seat maps to one `PlayerId`.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Cumulative score that ends the game.
pub const WINNING_SCORE: u32 = 21;

/// Face value of the Ship.
pub const SHIP: u8 = 6;

/// Face value of the Captain.
pub const CAPTAIN: u8 = 5;

/// Face value of the Mate.
pub const MATE: u8 = 4;

/// Points deducted from the pool sum once the full crew is banked.
pub const CREW_COST: u32 = SHIP as u32 + CAPTAIN as u32 + MATE as u32;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the dice RNG.
    /// Same seed and same selections replay the same game.
    pub seed: u64,

    /// Cumulative score at which the game ends.
    pub winning_score: u32,

    /// Upper bound on rounds played by `Room::play_game`.
    /// Guards bot-only games against never reaching the winning score.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            winning_score: WINNING_SCORE,
            max_rounds: 1_000,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom winning score.
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Create a new config with custom round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}
