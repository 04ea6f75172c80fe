use crate::error::PlayError;
use crate::game::{Board, Player};

use super::evaluator::Score;

/// A source of moves: anything that can pick a column for a side.
pub trait Agent {
    /// Choose a legal column for `player`.
    ///
    /// The board may be used as scratch space during the call but must be
    /// handed back exactly as it was received.
    fn select_action(&mut self, board: &mut Board, player: Player) -> Result<usize, PlayError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Choose a column and report the per-column scores behind the choice,
    /// for agents that compute them.
    fn scored_action(
        &mut self,
        board: &mut Board,
        player: Player,
    ) -> Result<(usize, Option<Vec<Score>>), PlayError> {
        Ok((self.select_action(board, player)?, None))
    }
}
