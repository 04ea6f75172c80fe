//! Core Connect Four game logic: the grid with its move/undo primitives, the
//! directional run scanner used for win detection, and the two sides.

mod board;
mod outcome;
mod player;
mod scan;

pub use board::{Board, BoardError, Cell, MoveError, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};
pub use outcome::GameOutcome;
pub use player::Player;
pub use scan::{in_a_row, Heading};
