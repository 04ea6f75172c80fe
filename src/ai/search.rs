use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PlayError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::evaluator::{Evaluator, Score, Tiebreak};

/// Agent driven by the fixed-depth [`Evaluator`].
pub struct SearchAgent {
    tiebreak: Tiebreak,
    ply: usize,
    rng: StdRng,
}

impl SearchAgent {
    pub fn new(tiebreak: Tiebreak, ply: usize) -> Self {
        SearchAgent {
            tiebreak,
            ply,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded agent, reproducible under [`Tiebreak::Random`].
    pub fn with_seed(tiebreak: Tiebreak, ply: usize, seed: u64) -> Self {
        SearchAgent {
            tiebreak,
            ply,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Evaluator this agent uses when playing `player`.
    pub fn evaluator(&self, player: Player) -> Evaluator {
        Evaluator::new(player, self.tiebreak, self.ply)
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, board: &mut Board, player: Player) -> Result<usize, PlayError> {
        Ok(self.evaluator(player).next_move(board, &mut self.rng)?)
    }

    fn name(&self) -> &str {
        "Search"
    }

    fn scored_action(
        &mut self,
        board: &mut Board,
        player: Player,
    ) -> Result<(usize, Option<Vec<Score>>), PlayError> {
        let evaluator = self.evaluator(player);
        let scores = evaluator.scores_for(board);
        let col = evaluator.tiebreak_move(&scores, &mut self.rng)?;
        Ok((col, Some(scores)))
    }
}
