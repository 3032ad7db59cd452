//! Crew ranks: the Ship, Captain and Mate faces.

use serde::{Deserialize, Serialize};

use super::config::{CAPTAIN, MATE, SHIP};

/// One of the three ranked faces, in precedence order.
///
/// A rank may only be banked once every rank before it is banked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ship,
    Captain,
    Mate,
}

impl Rank {
    /// All ranks, highest precedence first.
    pub const ALL: [Rank; 3] = [Rank::Ship, Rank::Captain, Rank::Mate];

    /// Face value that carries this rank.
    #[must_use]
    pub const fn face(self) -> u8 {
        match self {
            Rank::Ship => SHIP,
            Rank::Captain => CAPTAIN,
            Rank::Mate => MATE,
        }
    }

    /// Rank carried by a face value, if any.
    #[must_use]
    pub const fn from_face(face: u8) -> Option<Rank> {
        match face {
            SHIP => Some(Rank::Ship),
            CAPTAIN => Some(Rank::Captain),
            MATE => Some(Rank::Mate),
            _ => None,
        }
    }

    /// Lowercase name used in rejection messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ship => "ship",
            Rank::Captain => "captain",
            Rank::Mate => "mate",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
