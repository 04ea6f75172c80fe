use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PlayError, SearchError};
use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random legal column, or `None` when the board is full.
pub fn random_legal_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let legal = board.legal_columns();
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.random_range(0..legal.len())])
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &mut Board, _player: Player) -> Result<usize, PlayError> {
        random_legal_column(board, &mut self.rng).ok_or(PlayError::Search(SearchError::NoLegalMove))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
