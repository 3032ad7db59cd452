//! Players, rounds and the leaderboard.
//!
//! A `Room` owns the players and the single dice pool they share. Each round
//! gives every player one turn in join order; turn scores accumulate until
//! the leader reaches the winning score.
//!
//! ```
//! use ship_of_fools::core::{GameConfig, GameRng};
//! use ship_of_fools::room::{NoopObserver, Room};
//! use ship_of_fools::selection::CrewFirst;
//!
//! let config = GameConfig::default().with_seed(7);
//! let mut rng = GameRng::new(config.seed);
//! let mut room = Room::new(config);
//! room.add_player("Dennis").unwrap();
//! room.add_player("Emil").unwrap();
//!
//! let winner = room.play_game(&mut rng, &mut CrewFirst::default(), &mut NoopObserver).unwrap();
//! assert!(winner.unwrap().score() >= 21);
//! ```

use crate::core::{
    DiePool, GameConfig, Player, PlayerId, RandomSource, RoomError, TurnError, MAX_PLAYERS,
};
use crate::rules::{BatchReport, TurnController};
use crate::selection::SelectionInput;

/// Hooks for rendering a game as it is played. All methods default to no-ops.
pub trait TurnObserver {
    fn on_turn_start(&mut self, _player: &Player) {}

    /// Called after each roll, before the selection is requested.
    fn on_roll(&mut self, _player: &Player, _throw: u8, _pool: &DiePool) {}

    fn on_bank(&mut self, _player: &Player, _report: &BatchReport, _pool: &DiePool) {}

    fn on_turn_end(&mut self, _player: &Player, _score: u32) {}

    fn on_round_end(&mut self, _round: u32, _leaderboard: &[&Player]) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

/// Play one full turn for `player` over `pool`.
///
/// Returns the turn score and the pool, all dice locked.
pub fn play_turn<R, S, O>(
    player: &Player,
    pool: DiePool,
    rng: &mut R,
    input: &mut S,
    observer: &mut O,
) -> Result<(u32, DiePool), TurnError>
where
    R: RandomSource + ?Sized,
    S: SelectionInput + ?Sized,
    O: TurnObserver + ?Sized,
{
    let mut turn = TurnController::new(pool);
    observer.on_turn_start(player);

    while turn.score().is_none() {
        let throw = turn.throw_number();
        let pool = turn.roll(rng)?;
        observer.on_roll(player, throw, pool);

        let requests = input.select(player, turn.pool(), throw);
        let report = turn.bank(&requests)?;
        observer.on_bank(player, &report, turn.pool());
    }

    let score = turn.score().unwrap_or_default();
    observer.on_turn_end(player, score);
    Ok((score, turn.into_pool()))
}

/// A table of players sharing one dice pool.
#[derive(Clone, Debug)]
pub struct Room {
    config: GameConfig,
    players: Vec<Player>,
    pool: DiePool,
    rounds_played: u32,
}

impl Room {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            pool: DiePool::default(),
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Add a player with a score of 0. Players take turns in join order.
    ///
    /// Fails once [`MAX_PLAYERS`] have joined.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, RoomError> {
        let index = u8::try_from(self.players.len()).map_err(|_| RoomError::Full {
            capacity: MAX_PLAYERS,
        })?;
        let id = PlayerId::new(index);
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Players by descending score. Ties keep join order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut board: Vec<&Player> = self.players.iter().collect();
        board.sort_by_key(|p| std::cmp::Reverse(p.score()));
        board
    }

    /// Highest-scoring player, if anyone has joined.
    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        self.leaderboard().into_iter().next()
    }

    /// The leader has reached the winning score.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.leader()
            .is_some_and(|p| p.score() >= self.config.winning_score)
    }

    /// The leader, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.leader()
            .filter(|p| p.score() >= self.config.winning_score)
    }

    /// Set every score back to 0 and the round counter with it.
    pub fn reset_scores(&mut self) {
        self.players.iter_mut().for_each(Player::reset_score);
        self.rounds_played = 0;
    }

    /// Give every player one turn. Returns each player's turn score.
    pub fn play_round<R, S, O>(
        &mut self,
        rng: &mut R,
        input: &mut S,
        observer: &mut O,
    ) -> Result<Vec<(PlayerId, u32)>, TurnError>
    where
        R: RandomSource + ?Sized,
        S: SelectionInput + ?Sized,
        O: TurnObserver + ?Sized,
    {
        let mut scores = Vec::with_capacity(self.players.len());

        for i in 0..self.players.len() {
            let pool = std::mem::take(&mut self.pool);
            let (score, pool) = play_turn(&self.players[i], pool, rng, input, observer)?;
            self.pool = pool;

            let player = &mut self.players[i];
            player.add_score(score);
            tracing::info!(player = player.name(), score, total = player.score(), "turn scored");
            scores.push((player.id(), score));
        }

        self.rounds_played += 1;
        observer.on_round_end(self.rounds_played, &self.leaderboard());
        Ok(scores)
    }

    /// Play rounds until someone reaches the winning score.
    ///
    /// Stops after `max_rounds` rounds. Returns the winner, or `None` if the
    /// round cap was hit first or the room is empty.
    pub fn play_game<R, S, O>(
        &mut self,
        rng: &mut R,
        input: &mut S,
        observer: &mut O,
    ) -> Result<Option<&Player>, TurnError>
    where
        R: RandomSource + ?Sized,
        S: SelectionInput + ?Sized,
        O: TurnObserver + ?Sized,
    {
        if self.players.is_empty() {
            return Ok(None);
        }

        while !self.is_finished() {
            if self.rounds_played >= self.config.max_rounds {
                tracing::warn!(rounds = self.rounds_played, "round cap reached without a winner");
                return Ok(None);
            }
            self.play_round(rng, input, observer)?;
        }

        let winner = self.winner();
        if let Some(p) = winner {
            tracing::info!(winner = p.name(), score = p.score(), rounds = self.rounds_played, "game over");
        }
        Ok(winner)
    }
}
