//! One-ply safety check for candidate moves.
//!
//! Only the square directly above a candidate is considered. Threats the move
//! opens anywhere else on the board go unnoticed.

use tracing::trace;

use crate::game::{has_four_in_a_row, Board, Piece};

/// True if `piece`, dropped into `column` next, would connect four.
///
/// `board` must already hold the candidate move. The reply is pushed and
/// popped on the same board, which is left exactly as it was given.
pub fn would_enable_opponent_win(board: &mut Board, column: usize, piece: Piece) -> bool {
    let Ok(row) = board.place(column, piece) else {
        // Column is now full: nothing can be played above the candidate.
        return false;
    };
    let wins = has_four_in_a_row(board, piece);
    board.clear(column, row);
    wins
}

/// True if the square above the candidate would complete four for `mover`
/// itself, handing the opponent an obvious block.
pub fn would_hand_block(board: &mut Board, column: usize, mover: Piece) -> bool {
    would_enable_opponent_win(board, column, mover)
}

/// True if dropping `mover` into `column` does not let `opponent` win
/// straight away on top of it.
pub fn is_safe(board: &Board, column: usize, mover: Piece, opponent: Piece) -> bool {
    let mut sim = *board;
    if sim.place(column, mover).is_err() {
        return false;
    }
    let safe = !would_enable_opponent_win(&mut sim, column, opponent);
    if !safe {
        trace!(column, %opponent, "candidate hands the opponent a win");
    }
    safe
}

/// Stricter variant used for quiet moves: besides being safe, the square above
/// must not be a winning square for `mover`, since the opponent would simply
/// take it and kill the threat.
pub fn is_quiet(board: &Board, column: usize, mover: Piece, opponent: Piece) -> bool {
    let mut sim = *board;
    if sim.place(column, mover).is_err() {
        return false;
    }
    if would_enable_opponent_win(&mut sim, column, opponent) {
        trace!(column, %opponent, "candidate hands the opponent a win");
        return false;
    }
    if would_hand_block(&mut sim, column, mover) {
        trace!(column, %mover, "candidate hands the opponent a forced block");
        return false;
    }
    true
}
