use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::error::SearchError;
use crate::game::{Board, Player};

/// Desirability of a column from one side's point of view.
pub type Score = i32;

/// Marks a column that cannot be played. Never chosen.
pub const ILLEGAL: Score = -1;
/// Certain loss.
pub const LOSS: Score = 0;
/// Nothing decided within the search horizon.
pub const NEUTRAL: Score = 50;
/// Certain win.
pub const WIN: Score = 100;

/// How to choose among columns that share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tiebreak {
    #[default]
    Left,
    Right,
    Random,
}

impl Tiebreak {
    pub fn name(self) -> &'static str {
        match self {
            Tiebreak::Left => "LEFT",
            Tiebreak::Right => "RIGHT",
            Tiebreak::Random => "RANDOM",
        }
    }
}

impl fmt::Display for Tiebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tiebreak {0:?} (expected left, right or random)")]
pub struct ParseTiebreakError(String);

impl FromStr for Tiebreak {
    type Err = ParseTiebreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "leftmost" => Ok(Tiebreak::Left),
            "right" | "rightmost" => Ok(Tiebreak::Right),
            "random" => Ok(Tiebreak::Random),
            _ => Err(ParseTiebreakError(s.to_string())),
        }
    }
}

/// Fixed-depth adversarial scorer for one side.
///
/// Every legal column is tried on the board itself and taken back before
/// the next one, so the board must not be observed by anything else while
/// a search is running. The search is full-width with no pruning: cost
/// grows as `width^ply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    player: Player,
    tiebreak: Tiebreak,
    ply: usize,
}

impl Evaluator {
    pub fn new(player: Player, tiebreak: Tiebreak, ply: usize) -> Self {
        Evaluator {
            player,
            tiebreak,
            ply,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn tiebreak(&self) -> Tiebreak {
        self.tiebreak
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Static score of the board as it stands: `WIN` if this side already
    /// has four in a row, `LOSS` if the opponent has, `NEUTRAL` otherwise.
    pub fn score_board(&self, board: &Board) -> Score {
        static_score(board, self.player)
    }

    /// One score per column, `ILLEGAL` for full columns. The board is
    /// returned to its original state.
    pub fn scores_for(&self, board: &mut Board) -> Vec<Score> {
        scores_for(board, self.player, self.ply)
    }

    /// Pick a column with the highest score, resolving ties by policy.
    pub fn tiebreak_move<R: Rng + ?Sized>(
        &self,
        scores: &[Score],
        rng: &mut R,
    ) -> Result<usize, SearchError> {
        let best = scores.iter().copied().max().ok_or(SearchError::EmptyScores)?;
        if best == ILLEGAL {
            return Err(SearchError::NoLegalMove);
        }

        let candidates: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(col, _)| col)
            .collect();

        let col = match self.tiebreak {
            Tiebreak::Left => candidates[0],
            Tiebreak::Right => candidates[candidates.len() - 1],
            Tiebreak::Random => candidates[rng.random_range(0..candidates.len())],
        };
        Ok(col)
    }

    /// Score every column and choose one.
    pub fn next_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<usize, SearchError> {
        let scores = self.scores_for(board);
        let col = self.tiebreak_move(&scores, rng)?;
        debug!("{} ply {} scores {:?} -> column {}", self.player, self.ply, scores, col);
        Ok(col)
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player for {}", self.player)?;
        writeln!(f, "  with tiebreak type: {}", self.tiebreak)?;
        writeln!(f, "  and ply == {}", self.ply)?;
        writeln!(f)
    }
}

fn static_score(board: &Board, player: Player) -> Score {
    if board.wins_for(player) {
        WIN
    } else if board.wins_for(player.other()) {
        LOSS
    } else {
        NEUTRAL
    }
}

/// Score each column for `player` looking `ply` half-moves ahead.
///
/// A board that is already decided scores the same for every legal column.
/// Otherwise, with plies left, each column is played and scored as
/// `WIN` minus the opponent's best reply.
pub fn scores_for(board: &mut Board, player: Player, ply: usize) -> Vec<Score> {
    let standing = static_score(board, player);
    let mut scores = Vec::with_capacity(board.width());

    for col in 0..board.width() {
        let score = if !board.allows_move(col) {
            ILLEGAL
        } else if standing != NEUTRAL || ply == 0 {
            standing
        } else {
            score_column(board, col, player, ply)
        };
        scores.push(score);
    }

    scores
}

fn score_column(board: &mut Board, col: usize, player: Player, ply: usize) -> Score {
    if board.apply_move(col, player).is_err() {
        return ILLEGAL;
    }

    let replies = scores_for(board, player.other(), ply - 1);
    let score = match replies.into_iter().max() {
        Some(best) if best != ILLEGAL => WIN - best,
        // This move filled the board: nothing left to search
        _ => static_score(board, player),
    };

    let undone = board.remove_move(col);
    debug_assert!(undone.is_ok(), "search move in column {col} was not undone");
    score
}
