//! Turn state machine integration tests.
//!
//! End-to-end turns driven by scripted dice and scripted selections.

use ship_of_fools::core::{DiePool, PlayerId, SequenceRng, TurnError, MAX_THROWS};
use ship_of_fools::room::{play_turn, TurnObserver};
use ship_of_fools::rules::{BatchReport, TurnController, TurnPhase};
use ship_of_fools::selection::{order_by_value, parse_selection, ScriptedSelection};
use ship_of_fools::Player;

/// Records every roll and bank seen during a turn.
#[derive(Default)]
struct Recorder {
    rolls: Vec<(u8, Vec<u8>)>,
    reports: Vec<BatchReport>,
    scores: Vec<u32>,
}

impl TurnObserver for Recorder {
    fn on_roll(&mut self, _player: &Player, throw: u8, pool: &DiePool) {
        let faces = pool.iter().map(|(_, d)| d.value()).collect();
        self.rolls.push((throw, faces));
    }

    fn on_bank(&mut self, _player: &Player, report: &BatchReport, _pool: &DiePool) {
        self.reports.push(report.clone());
    }

    fn on_turn_end(&mut self, _player: &Player, score: u32) {
        self.scores.push(score);
    }
}

fn player() -> Player {
    Player::new(PlayerId::new(0), "Tester")
}

// =============================================================================
// End-to-End Turns
// =============================================================================

/// Rolls 6,6,5,4,2 and banks all five: one throw, score 8.
#[test]
fn test_full_crew_first_throw() {
    let mut rng = SequenceRng::new([6, 6, 5, 4, 2]);
    let mut turn = TurnController::new(DiePool::default());

    turn.roll(&mut rng).unwrap();
    let requests = order_by_value(turn.pool(), vec![0, 1, 2, 3, 4]);
    let report = turn.bank(&requests).unwrap();

    assert_eq!(report.locked().len(), 5);
    assert!(turn.pool().all_locked());
    assert_eq!(turn.phase(), TurnPhase::Finished { score: 8 });
}

/// Rolls 3,2,1,1,1 and banks all five: no crew, score 0.
#[test]
fn test_no_crew_scores_zero() {
    let mut rng = SequenceRng::new([3, 2, 1, 1, 1]);
    let mut turn = TurnController::new(DiePool::default());

    turn.roll(&mut rng).unwrap();
    turn.bank(&[0, 1, 2, 3, 4]).unwrap();

    // Nothing past the missing Ship can bank; the last throws force the lock
    while !turn.is_finished() {
        turn.roll(&mut rng).unwrap();
        turn.bank(&[0, 1, 2, 3, 4]).unwrap();
    }
    assert_eq!(turn.score(), Some(0));
}

/// Never banking still ends after three throws, scored from the third roll.
#[test]
fn test_three_throws_then_forced_lock() {
    let mut rng = SequenceRng::new([
        1, 1, 1, 1, 1, // throw 1
        2, 2, 2, 2, 2, // throw 2
        6, 5, 4, 3, 3, // throw 3
    ]);
    let mut turn = TurnController::new(DiePool::default());

    for throw in 1..=MAX_THROWS {
        assert_eq!(turn.throw_number(), throw);
        turn.roll(&mut rng).unwrap();
        turn.bank(&[]).unwrap();
    }

    assert!(turn.pool().all_locked());
    assert_eq!(turn.pool().sum(), 21);
    assert_eq!(turn.phase(), TurnPhase::Finished { score: 6 });
    assert_eq!(rng.drawn(), 15);
}

/// Banked dice keep their faces across throws; only the rest are rerolled.
#[test]
fn test_banked_dice_survive_rerolls() {
    let mut rng = SequenceRng::new([
        6, 1, 1, 1, 1, // throw 1: bank the Ship
        5, 4, 2, 2, // throw 2: bank Captain and Mate
        6, 6, // throw 3: two more Ships
    ]);
    let mut input = ScriptedSelection::sorted([vec![0], vec![1, 2], vec![]]);
    let mut recorder = Recorder::default();

    let (score, pool) =
        play_turn(&player(), DiePool::default(), &mut rng, &mut input, &mut recorder).unwrap();

    assert_eq!(recorder.rolls.len(), 3);
    assert_eq!(recorder.rolls[1], (2, vec![6, 5, 4, 2, 2]));
    assert_eq!(recorder.rolls[2], (3, vec![6, 5, 4, 6, 6]));
    assert_eq!(score, 6 + 5 + 4 + 6 + 6 - 15);
    assert_eq!(recorder.scores, vec![score]);
    assert!(pool.all_locked());
}

/// A rejected request leaves the die unlocked and the turn carries on.
#[test]
fn test_rejection_does_not_end_turn() {
    let mut rng = SequenceRng::new([5, 1, 1, 1, 1]);
    let mut turn = TurnController::new(DiePool::default());

    turn.roll(&mut rng).unwrap();
    let report = turn.bank(&[0]).unwrap();

    assert!(report.rejection().is_some());
    assert_eq!(turn.pool().is_locked(0), Ok(false));
    assert_eq!(turn.phase(), TurnPhase::AwaitingRoll { throws_remaining: 2 });
}

/// Filling the pool on the second throw skips the third.
#[test]
fn test_full_pool_ends_turn_early() {
    let mut rng = SequenceRng::new([
        6, 5, 1, 1, 1, // throw 1
        4, 3, 3, // throw 2
    ]);
    let mut input = ScriptedSelection::sorted([vec![0, 1], vec![2, 3, 4]]);
    let mut recorder = Recorder::default();

    let (score, _) =
        play_turn(&player(), DiePool::default(), &mut rng, &mut input, &mut recorder).unwrap();

    assert_eq!(recorder.rolls.len(), 2);
    assert_eq!(score, 6 + 5 + 4 + 3 + 3 - 15);
    assert_eq!(rng.drawn(), 8);
}

/// Typed input goes through parsing and ordering before banking.
#[test]
fn test_typed_selection_end_to_end() {
    let mut rng = SequenceRng::new([2, 4, 6, 6, 5]);
    let mut turn = TurnController::new(DiePool::default());
    turn.roll(&mut rng).unwrap();

    let requests = parse_selection("0 1 2 3 4", turn.pool()).unwrap();
    assert_eq!(requests, vec![2, 3, 4, 1, 0]);

    turn.bank(&requests).unwrap();
    assert_eq!(turn.score(), Some(8));
}

// =============================================================================
// Phase Errors
// =============================================================================

#[test]
fn test_no_input_after_finish() {
    let mut rng = SequenceRng::new([6, 6, 5, 4, 2]);
    let mut turn = TurnController::new(DiePool::default());
    turn.roll(&mut rng).unwrap();
    turn.bank(&[0, 1, 2, 3, 4]).unwrap();

    assert_eq!(
        turn.bank(&[0]).unwrap_err(),
        TurnError::UnexpectedPhase {
            expected: "AwaitingBankSelection",
            found: TurnPhase::Finished { score: 8 },
        }
    );
    assert!(matches!(
        turn.roll(&mut rng),
        Err(TurnError::UnexpectedPhase { found: TurnPhase::Finished { .. }, .. })
    ));
}

/// The pool handed back from a finished turn starts the next one unlocked.
#[test]
fn test_pool_reused_across_turns() {
    let mut rng = SequenceRng::new([6, 6, 5, 4, 2]);
    let mut turn = TurnController::new(DiePool::default());
    turn.roll(&mut rng).unwrap();
    turn.bank(&[0, 1, 2, 3, 4]).unwrap();

    let pool = turn.into_pool();
    assert!(pool.all_locked());

    let next = TurnController::new(pool);
    assert!(next.pool().iter().all(|(_, d)| !d.is_locked()));
    assert_eq!(next.phase(), TurnPhase::AwaitingRoll { throws_remaining: 3 });
}
