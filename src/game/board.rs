use std::fmt;

use super::scan::{in_a_row, Heading};
use super::Player;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Length of a winning run.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when rendering the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a rendered cell. `.` is accepted as empty as well as a space.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            ' ' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// Why a move could not be applied or taken back. The board is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is not on the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} has no checker to remove")]
    ColumnEmpty(usize),
}

/// Errors building a board from dimensions, rows or a move string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 1x1 (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {0:?}")]
    UnknownToken(char),

    #[error("column {col} has a checker floating above an empty cell")]
    FloatingPiece { col: usize },

    #[error("move string may only contain digits, found {0:?}")]
    BadMoveChar(char),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A Connect Four grid of any size.
///
/// Row 0 is the top, row `height - 1` the bottom. Checkers only ever land on
/// the lowest empty cell of a column and only the topmost checker of a
/// column can be removed, so each column is always filled contiguously from
/// the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    /// Empty 7x6 board
    pub fn standard() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![vec![Cell::Empty; DEFAULT_WIDTH]; DEFAULT_HEIGHT],
        }
    }

    /// Build a board from rendered rows, top row first.
    ///
    /// Every row must have the same length. Columns must obey gravity: no
    /// checker may sit above an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut board = Board::new(width, height)?;

        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, symbol) in line.chars().enumerate() {
                board.cells[r][c] = Cell::from_symbol(symbol).ok_or(BoardError::UnknownToken(symbol))?;
            }
        }

        for col in 0..width {
            let mut seen_checker = false;
            for row in 0..height {
                match board.cells[row][col] {
                    Cell::Empty if seen_checker => return Err(BoardError::FloatingPiece { col }),
                    Cell::Empty => {}
                    _ => seen_checker = true,
                }
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Raw grid, row-major, top row first
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// A column is playable exactly when its top cell is empty.
    pub fn allows_move(&self, col: usize) -> bool {
        col < self.width && self.cells[0][col] == Cell::Empty
    }

    /// Playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width).filter(|&col| self.allows_move(col)).collect()
    }

    /// Check if no column accepts another checker
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| !self.allows_move(col))
    }

    /// Drop a checker for `player` into `col`, returning the row it landed on.
    pub fn apply_move(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Take the topmost checker out of `col`, returning what was there.
    pub fn remove_move(&mut self, col: usize) -> Result<Cell, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = (0..self.height)
            .find(|&row| self.cells[row][col] != Cell::Empty)
            .ok_or(MoveError::ColumnEmpty(col))?;
        Ok(std::mem::replace(&mut self.cells[row][col], Cell::Empty))
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// Play a string of single-digit columns, alternating X and O and
    /// starting with X. `"0123"` puts X, O, X, O along the bottom row.
    ///
    /// Stops at the first bad character or illegal column; moves before it
    /// stay on the board.
    pub fn set_board(&mut self, moves: &str) -> Result<(), BoardError> {
        let mut next = Player::X;
        for symbol in moves.chars() {
            let col = symbol.to_digit(10).ok_or(BoardError::BadMoveChar(symbol))? as usize;
            self.apply_move(col, next)?;
            next = next.other();
        }
        Ok(())
    }

    /// Check if `player` has four in a row anywhere on the board
    pub fn wins_for(&self, player: Player) -> bool {
        let cell = player.to_cell();
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                Heading::ALL
                    .iter()
                    .any(|&heading| in_a_row(cell, row, col, &self.cells, WIN_LENGTH, heading))
            })
        })
    }

    /// Columns where a single checker from `player` wins, in ascending
    /// order. Each column is tried on the board itself and taken back
    /// before the next one, so the board is unchanged on return.
    pub fn columns_to_win(&mut self, player: Player) -> Vec<usize> {
        let mut columns = Vec::new();
        for col in 0..self.width {
            if !self.allows_move(col) || self.apply_move(col, player).is_err() {
                continue;
            }
            if self.wins_for(player) {
                columns.push(col);
            }
            let undone = self.remove_move(col);
            debug_assert!(undone.is_ok(), "speculative move in column {col} was not undone");
        }
        columns
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", "-".repeat(2 * self.width + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Every column is empty above its checkers and full below them.
    fn obeys_gravity(board: &Board) -> bool {
        (0..board.width()).all(|col| {
            let column: Vec<Cell> = (0..board.height()).map(|row| board.get(row, col)).collect();
            column
                .windows(2)
                .all(|pair| !(pair[0] != Cell::Empty && pair[1] == Cell::Empty))
        })
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5, 3).unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(Board::new(7, 0).is_err());
    }

    #[test]
    fn test_apply_move_stacks_from_bottom() {
        let mut board = Board::standard();

        let row = board.apply_move(3, Player::X).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::X);

        let row = board.apply_move(3, Player::O).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::O);
    }

    #[test]
    fn test_full_column_rejects_move_and_is_unchanged() {
        let mut board = Board::new(3, 2).unwrap();
        board.apply_move(0, Player::X).unwrap();
        board.apply_move(0, Player::O).unwrap();
        let before = board.clone();

        assert!(!board.allows_move(0));
        assert_eq!(board.apply_move(0, Player::X), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = Board::standard();
        assert!(!board.allows_move(7));
        assert_eq!(board.apply_move(7, Player::X), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.remove_move(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_remove_move_takes_topmost() {
        let mut board = Board::standard();
        board.apply_move(2, Player::X).unwrap();
        board.apply_move(2, Player::O).unwrap();

        assert_eq!(board.remove_move(2), Ok(Cell::O));
        assert_eq!(board.get(4, 2), Cell::Empty);
        assert_eq!(board.get(5, 2), Cell::X);
        assert_eq!(board.remove_move(2), Ok(Cell::X));
        assert_eq!(board.remove_move(2), Err(MoveError::ColumnEmpty(2)));
    }

    #[test]
    fn test_apply_then_remove_restores_board() {
        let mut board = Board::standard();
        board.set_board("3344520").unwrap();

        for col in board.legal_columns() {
            for player in [Player::X, Player::O] {
                let before = board.clone();
                board.apply_move(col, player).unwrap();
                board.remove_move(col).unwrap();
                assert_eq!(board, before, "column {col} for {player}");
            }
        }
    }

    #[test]
    fn test_random_legal_moves_keep_gravity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new(rng.random_range(1..9), rng.random_range(1..8)).unwrap();
            let mut player = Player::X;
            while !board.is_full() {
                let legal = board.legal_columns();
                let col = legal[rng.random_range(0..legal.len())];
                board.apply_move(col, player).unwrap();
                assert!(obeys_gravity(&board));
                if rng.random_range(0..4) == 0 {
                    board.remove_move(col).unwrap();
                    assert!(obeys_gravity(&board));
                }
                player = player.other();
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2).unwrap();
        board.set_board("0011").unwrap();
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::standard();
        board.set_board("0123456").unwrap();
        board.clear();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_set_board_alternates_from_x() {
        let mut board = Board::standard();
        board.set_board("000").unwrap();
        assert_eq!(board.get(5, 0), Cell::X);
        assert_eq!(board.get(4, 0), Cell::O);
        assert_eq!(board.get(3, 0), Cell::X);
    }

    #[test]
    fn test_set_board_rejects_bad_input() {
        let mut board = Board::standard();
        assert_eq!(board.set_board("01a"), Err(BoardError::BadMoveChar('a')));
        assert_eq!(board.get(5, 1), Cell::O);

        let mut board = Board::standard();
        assert_eq!(
            board.set_board("8"),
            Err(BoardError::Move(MoveError::InvalidColumn(8)))
        );
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[
            "...",
            "O..",
            "XX.",
        ])
        .unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.get(1, 0), Cell::O);
        assert_eq!(board.get(2, 1), Cell::X);
        assert_eq!(board.get(2, 2), Cell::Empty);
    }

    #[test]
    fn test_from_rows_rejects_floating_and_ragged() {
        assert_eq!(
            Board::from_rows(&["X.", ".."]),
            Err(BoardError::FloatingPiece { col: 0 })
        );
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(BoardError::RaggedRow { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(Board::from_rows(&["#"]), Err(BoardError::UnknownToken('#')));
        assert!(Board::from_rows(&[]).is_err());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 3..7 {
            board.apply_move(col, Player::X).unwrap();
        }
        assert!(board.wins_for(Player::X));
        assert!(!board.wins_for(Player::O));
    }

    #[test]
    fn test_horizontal_win_above_bottom_row() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...XXXX",
            "...OOXO",
            "...XXOX",
            "...OOXO",
        ])
        .unwrap();
        assert!(in_a_row(Cell::X, 2, 3, board.rows(), WIN_LENGTH, Heading::East));
        assert!(board.wins_for(Player::X));
        assert!(!board.wins_for(Player::O));

        // Without row 2 nothing below it is a win
        let mut lowered = board.clone();
        for col in 3..7 {
            lowered.remove_move(col).unwrap();
        }
        assert!(!lowered.wins_for(Player::X));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.apply_move(6, Player::O).unwrap();
        }
        assert!(board.wins_for(Player::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::standard();
        // X climbs from (5,0) to (2,3)
        board.set_board("01123223633").unwrap();
        assert_eq!(board.get(2, 3), Cell::X);
        assert!(board.wins_for(Player::X));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...O...",
            "...XO..",
            "...XXO.",
            "...XXXO",
        ])
        .unwrap();
        assert!(board.wins_for(Player::O));
        assert!(!board.wins_for(Player::X));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.apply_move(col, Player::X).unwrap();
        }
        assert!(!board.wins_for(Player::X));
    }

    #[test]
    fn test_columns_to_win_bottom_row() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.apply_move(col, Player::X).unwrap();
        }
        let before = board.clone();
        assert_eq!(board.columns_to_win(Player::X), vec![3]);
        assert!(board.columns_to_win(Player::O).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_columns_to_win_both_sides_of_gap() {
        let mut board = Board::standard();
        for col in [1, 2, 3] {
            board.apply_move(col, Player::O).unwrap();
        }
        assert_eq!(board.columns_to_win(Player::O), vec![0, 4]);
    }

    #[test]
    fn test_filled_board_without_four_is_a_draw() {
        let mut board = Board::from_rows(&[
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
        ])
        .unwrap();
        assert!(board.is_full());
        assert!(!board.wins_for(Player::X));
        assert!(!board.wins_for(Player::O));
        assert!(board.columns_to_win(Player::X).is_empty());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3, 2).unwrap();
        board.set_board("01").unwrap();
        assert_eq!(board.to_string(), "| | | |\n|X|O| |\n-------");
    }
}
