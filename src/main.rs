//! Terminal Ship of Fools.
//!
//! Usage: `ship-of-fools [--bots] [NAME...]`
//!
//! Environment:
//! - `SHIP_OF_FOOLS_SEED`: dice RNG seed (default: from the clock)
//! - `SHIP_OF_FOOLS_WINNING_SCORE`: score that ends the game (default 21)
//! - `RUST_LOG`: log filter, written to stderr (default `warn`)

use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ship_of_fools::display::{BatchNotice, LeaderboardTable, PoolTable, WinnerBanner};
use ship_of_fools::selection::parse_selection;
use ship_of_fools::{
    BatchReport, CrewFirst, DiePool, GameConfig, GameRng, Player, Room, RoomError,
    SelectionInput, TurnObserver,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

fn load_config() -> GameConfig {
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let defaults = GameConfig::default();

    defaults
        .clone()
        .with_seed(env_or("SHIP_OF_FOOLS_SEED", clock_seed))
        .with_winning_score(env_or("SHIP_OF_FOOLS_WINNING_SCORE", defaults.winning_score))
}

/// Reads selections typed at the prompt.
struct TerminalInput;

impl SelectionInput for TerminalInput {
    fn select(&mut self, _player: &Player, pool: &DiePool, _throw: u8) -> Vec<usize> {
        loop {
            print!("Which indices to bank? | ");
            if let Err(err) = io::stdout().flush() {
                tracing::warn!(%err, "failed to flush prompt");
            }

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                // End of input banks nothing; the turn still ends after three throws
                Ok(0) => return Vec::new(),
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(%err, "failed to read selection");
                    return Vec::new();
                }
            }

            match parse_selection(&line, pool) {
                Ok(positions) => return positions,
                Err(err) => println!("{}, please try again.", err),
            }
        }
    }
}

/// Prints the game to stdout.
struct TerminalObserver;

impl TurnObserver for TerminalObserver {
    fn on_turn_start(&mut self, player: &Player) {
        println!("------ PLAYER {} ------", player.name());
    }

    fn on_roll(&mut self, _player: &Player, throw: u8, pool: &DiePool) {
        println!("{}", PoolTable { pool, throw });
    }

    fn on_bank(&mut self, _player: &Player, report: &BatchReport, _pool: &DiePool) {
        let notice = BatchNotice(report).to_string();
        if !notice.is_empty() {
            println!("{}", notice);
        }
    }

    fn on_turn_end(&mut self, player: &Player, score: u32) {
        println!("{} finished with a score of {}", player.name(), score);
    }

    fn on_round_end(&mut self, _round: u32, leaderboard: &[&Player]) {
        println!("{}", LeaderboardTable(leaderboard));
    }
}

fn run() -> Result<(), RoomError> {
    let mut bots = false;
    let mut names = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--bots" {
            bots = true;
        } else {
            names.push(arg);
        }
    }
    if names.is_empty() {
        names = vec!["Player 1".to_string(), "Player 2".to_string()];
    }

    let config = load_config();
    tracing::info!(seed = config.seed, winning_score = config.winning_score, bots, "starting game");

    let mut rng = GameRng::new(config.seed);
    let mut room = Room::new(config);
    for name in names {
        room.add_player(name)?;
    }

    let mut input: Box<dyn SelectionInput> = if bots {
        Box::new(CrewFirst::default())
    } else {
        Box::new(TerminalInput)
    };
    let mut observer = TerminalObserver;

    while !room.is_finished() && room.rounds_played() < room.config().max_rounds {
        println!("ROUND {}", room.rounds_played() + 1);
        room.play_round(&mut rng, input.as_mut(), &mut observer)?;
    }

    match room.winner() {
        Some(winner) => print!("{}", WinnerBanner(winner)),
        None => println!("No winner after {} rounds", room.rounds_played()),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "game aborted");
            ExitCode::FAILURE
        }
    }
}
