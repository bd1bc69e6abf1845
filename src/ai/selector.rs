//! The move-selection cascade.
//!
//! Strategies are tried from strongest to weakest and the first one that
//! produces a column decides the move:
//!
//! 1. opening book (engine's first two moves only)
//! 2. win on the spot
//! 3. block the opponent's win
//! 4. set up a split three of our own
//! 5. spoil the opponent's split three
//! 6. grow one of our pairs
//! 7. cut off one of the opponent's pairs
//! 8. start a new pair next to one of our pieces
//! 9. any non-full column at random

use std::fmt;

use rand::Rng;
use tracing::debug;

use super::opening::opening_move;
use super::threats::{connect_two, three_in_a_row, three_trap, two_in_a_row};
use crate::error::MoveError;
use crate::game::{Board, Piece, COLS};

/// The cascade step that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    OpeningBook,
    Win,
    Block,
    TrapOffence,
    TrapDefence,
    PairOffence,
    PairDefence,
    PairCreation,
    Random,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::OpeningBook => "opening book",
            Stage::Win => "win",
            Stage::Block => "block",
            Stage::TrapOffence => "trap offence",
            Stage::TrapDefence => "trap defence",
            Stage::PairOffence => "pair offence",
            Stage::PairDefence => "pair defence",
            Stage::PairCreation => "pair creation",
            Stage::Random => "random",
        };
        f.write_str(name)
    }
}

/// A chosen column and the stage that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub stage: Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    opening_book: bool,
}

impl MoveSelector {
    pub fn new(opening_book: bool) -> Self {
        MoveSelector { opening_book }
    }

    /// Run the deterministic stages (everything but the random fallback).
    ///
    /// `own_turn` counts the moves `own` has already made this game. The board
    /// is only read; candidates are tried on copies.
    pub fn choose(
        &self,
        board: &Board,
        own: Piece,
        opponent: Piece,
        own_turn: usize,
    ) -> Option<Decision> {
        let decide = |stage: Stage| move |column: usize| Decision { column, stage };

        if self.opening_book {
            if let Some(column) = opening_move(board, opponent, own_turn) {
                return Some(decide(Stage::OpeningBook)(column));
            }
        }

        three_in_a_row(board, own)
            .map(decide(Stage::Win))
            .or_else(|| three_in_a_row(board, opponent).map(decide(Stage::Block)))
            .or_else(|| three_trap(board, own, own, opponent).map(decide(Stage::TrapOffence)))
            .or_else(|| {
                three_trap(board, own, opponent, opponent).map(decide(Stage::TrapDefence))
            })
            .or_else(|| two_in_a_row(board, own, own, opponent).map(decide(Stage::PairOffence)))
            .or_else(|| {
                two_in_a_row(board, own, opponent, opponent).map(decide(Stage::PairDefence))
            })
            .or_else(|| connect_two(board, own, opponent).map(decide(Stage::PairCreation)))
    }

    /// Pick a move, falling back to a random non-full column when no
    /// strategy applies.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &Board,
        own: Piece,
        opponent: Piece,
        own_turn: usize,
        rng: &mut R,
    ) -> Result<Decision, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoLegalMove);
        }

        let decision = self
            .choose(board, own, opponent, own_turn)
            .unwrap_or_else(|| Decision {
                column: random_column(board, rng),
                stage: Stage::Random,
            });

        debug!(
            column = decision.column,
            stage = %decision.stage,
            piece = %own,
            own_turn,
            "move selected"
        );
        Ok(decision)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        MoveSelector::new(true)
    }
}

/// Uniform draws until a non-full column comes up. The board must have room.
fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> usize {
    loop {
        let column = rng.random_range(0..COLS);
        if !board.is_column_full(column) {
            return column;
        }
    }
}

/// Choose a column for `own` with the full cascade and drop the piece there.
///
/// `own_turn` is the number of moves `own` has made so far. Returns the
/// column played.
pub fn request_automated_move<R: Rng + ?Sized>(
    board: &mut Board,
    own: Piece,
    opponent: Piece,
    own_turn: usize,
    rng: &mut R,
) -> Result<usize, MoveError> {
    let decision = MoveSelector::default().select(board, own, opponent, own_turn, rng)?;
    board.place(decision.column, own)?;
    Ok(decision.column)
}
