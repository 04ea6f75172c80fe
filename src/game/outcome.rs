use std::fmt;

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Terminal state of `board`, if any. A win takes precedence over a
    /// full board.
    pub fn of(board: &Board) -> Option<GameOutcome> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| board.wins_for(player))
            .map(GameOutcome::Winner)
            .or_else(|| board.is_full().then_some(GameOutcome::Draw))
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{player} wins! Congratulations!"),
            GameOutcome::Draw => f.write_str("The game is a draw."),
        }
    }
}
