use crate::error::{PlayError, SearchError};
use crate::game::{Board, Player};

use super::agent::Agent;

/// One-ply agent: wins when it can, blocks when it must, and otherwise
/// plays the leftmost open column.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreatAgent;

impl ThreatAgent {
    /// Column chosen for `player`, or `None` when the board is full.
    pub fn choose(board: &mut Board, player: Player) -> Option<usize> {
        if let Some(&col) = board.columns_to_win(player).first() {
            return Some(col);
        }
        if let Some(&col) = board.columns_to_win(player.other()).first() {
            return Some(col);
        }
        board.legal_columns().first().copied()
    }
}

impl Agent for ThreatAgent {
    fn select_action(&mut self, board: &mut Board, player: Player) -> Result<usize, PlayError> {
        Ok(Self::choose(board, player).ok_or(SearchError::NoLegalMove)?)
    }

    fn name(&self) -> &str {
        "Threat"
    }
}
