//! Core Connect Four game logic: board representation, piece identities,
//! four-in-a-row detection and turn bookkeeping.

mod board;
pub mod lines;
mod piece;
mod state;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use lines::{has_four_in_a_row, winning_line, Direction};
pub use piece::Piece;
pub use state::{check_winner, is_draw, GameOutcome, GameState};
