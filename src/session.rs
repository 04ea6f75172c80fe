use std::io::Write;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::{random_legal_column, Agent};
use crate::error::{PlayError, SearchError};
use crate::game::{Board, GameOutcome, Player};

/// Game loop settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Probability that a turn's chosen column is replaced by a random legal one
    pub random_move_chance: f64,
    /// Print the score vector before each move of an agent that computes one
    pub show_scores: bool,
    /// Seed for the random-move roll; fresh entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            random_move_chance: 0.1,
            show_scores: false,
            seed: None,
        }
    }
}

/// One game between two move sources, X moving first.
///
/// The running transcript (board after every move, scores, random moves,
/// result) is written to `out`.
pub struct GameSession<W: Write> {
    board: Board,
    x: Box<dyn Agent>,
    o: Box<dyn Agent>,
    config: SessionConfig,
    rng: StdRng,
    out: W,
}

impl<W: Write> GameSession<W> {
    pub fn new(
        board: Board,
        x: Box<dyn Agent>,
        o: Box<dyn Agent>,
        config: SessionConfig,
        out: W,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameSession {
            board,
            x,
            o,
            config,
            rng,
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until one side has four in a row or the board is full.
    pub fn play(&mut self) -> Result<GameOutcome, PlayError> {
        info!(
            "starting {}x{} game: X = {}, O = {}",
            self.board.width(),
            self.board.height(),
            self.x.name(),
            self.o.name()
        );

        let mut player = Player::X;
        let outcome = loop {
            if let Some(outcome) = GameOutcome::of(&self.board) {
                break outcome;
            }

            writeln!(self.out, "{}", self.board)?;
            let col = self.take_turn(player)?;
            debug!("{player} played column {col}");

            if self.board.wins_for(player) {
                break GameOutcome::Winner(player);
            }
            if self.board.is_full() {
                break GameOutcome::Draw;
            }
            player = player.other();
        };

        writeln!(self.out, "{}", self.board)?;
        writeln!(self.out, "\n{outcome}\n")?;
        writeln!(self.out, "Come back 4 more!")?;
        info!("game over: {outcome}");
        Ok(outcome)
    }

    fn take_turn(&mut self, player: Player) -> Result<usize, PlayError> {
        let agent = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        let (chosen, scores) = agent.scored_action(&mut self.board, player)?;

        if self.config.show_scores {
            if let Some(scores) = scores {
                writeln!(self.out, "{player}'s Scores:  {scores:?}\n")?;
            }
        }

        if !self.board.allows_move(chosen) {
            return Err(PlayError::IllegalAction {
                player,
                action: chosen,
                legal: self.board.legal_columns(),
            });
        }

        let col = if self.rng.random_range(0.0..1.0) < self.config.random_move_chance {
            let col = random_legal_column(&self.board, &mut self.rng).ok_or(SearchError::NoLegalMove)?;
            writeln!(self.out, "Player {player} has randomly moved to column: {col}")?;
            info!("{player} overridden: column {chosen} replaced by random column {col}");
            col
        } else {
            chosen
        };

        self.board.apply_move(col, player)?;
        Ok(col)
    }
}
