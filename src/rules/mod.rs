//! Game rules: banking under the crew hierarchy, and the turn state machine.
//!
//! The turn controller calls into the banking engine after each roll; the
//! engine itself is stateless and reads everything it needs from the pool.

pub mod banking;
pub mod turn;

pub use banking::{BankingEngine, BatchEntry, BatchReport, Crew, LockOutcome};
pub use turn::{TurnController, TurnPhase};
