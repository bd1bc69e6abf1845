//! Pattern scans that find threats on the board and the column answering them.
//!
//! Every scan walks the board bottom row first, left to right. Each cell
//! holding the piece being examined is an *anchor*; the scan tries a fixed,
//! ordered list of patterns against it and acts on the first one that fits.
//! When that pattern's candidate squares are all turned down, the scan moves
//! on to the next anchor rather than to the anchor's remaining patterns.

use tracing::trace;

use super::safety::{is_quiet, is_safe};
use crate::game::lines::scan_order;
use crate::game::Direction::{self, Right, Up, UpLeft, UpRight};
use crate::game::{Board, Piece};

/// A shape laid along one direction, in steps relative to the anchor.
#[derive(Debug, Clone, Copy)]
struct Pattern {
    direction: Direction,
    /// Squares that must hold the examined piece (the anchor is implied).
    stones: &'static [isize],
    /// Squares that must be empty.
    empties: &'static [isize],
    /// Squares that must be empty and playable right now.
    open: &'static [isize],
    /// Both ends of this range must lie on the board, so the shape can still
    /// grow into a four.
    span: (isize, isize),
    /// Squares to play, in order of preference. Always a subset of `open`.
    candidates: &'static [isize],
}

impl Pattern {
    const fn new(
        direction: Direction,
        stones: &'static [isize],
        open: &'static [isize],
        span: (isize, isize),
        candidates: &'static [isize],
    ) -> Self {
        Pattern {
            direction,
            stones,
            empties: &[],
            open,
            span,
            candidates,
        }
    }

    const fn with_empties(self, empties: &'static [isize]) -> Self {
        Pattern { empties, ..self }
    }

    fn fits(&self, board: &Board, col: usize, row: usize, piece: Piece) -> bool {
        let at = |steps: isize| {
            let (c, r) = self.direction.step(col, row, steps);
            board.get(c, r)
        };
        let on_board = |steps: isize| at(steps).is_some();
        let playable = |steps: isize| {
            let (c, r) = self.direction.step(col, row, steps);
            board.is_playable(c, r)
        };

        on_board(self.span.0)
            && on_board(self.span.1)
            && self
                .stones
                .iter()
                .all(|&s| at(s).is_some_and(|cell| cell.holds(piece)))
            && self
                .empties
                .iter()
                .all(|&s| at(s).is_some_and(|cell| cell.is_empty()))
            && self.open.iter().all(|&s| playable(s))
    }

    /// Column of the candidate `steps` away from the anchor.
    fn column(&self, col: usize, row: usize, steps: isize) -> usize {
        let (c, _) = self.direction.step(col, row, steps);
        c as usize
    }
}

/// Three of a kind with the fourth square open: `XXX_`, `_XXX`, `X_XX`, `XX_X`.
const THREES: &[Pattern] = &[
    Pattern::new(Up, &[1, 2], &[3], (0, 3), &[3]),
    Pattern::new(Right, &[1, 2], &[3], (0, 3), &[3]),
    Pattern::new(Right, &[1, 2], &[-1], (-1, 2), &[-1]),
    Pattern::new(Right, &[2, 3], &[1], (0, 3), &[1]),
    Pattern::new(Right, &[1, 3], &[2], (0, 3), &[2]),
    Pattern::new(UpRight, &[1, 2], &[3], (0, 3), &[3]),
    Pattern::new(UpRight, &[1, 2], &[-1], (-1, 2), &[-1]),
    Pattern::new(UpRight, &[2, 3], &[1], (0, 3), &[1]),
    Pattern::new(UpRight, &[1, 3], &[2], (0, 3), &[2]),
    Pattern::new(UpLeft, &[1, 2], &[3], (0, 3), &[3]),
    Pattern::new(UpLeft, &[1, 2], &[-1], (-1, 2), &[-1]),
    Pattern::new(UpLeft, &[2, 3], &[1], (0, 3), &[1]),
    Pattern::new(UpLeft, &[1, 3], &[2], (0, 3), &[2]),
];

/// Two of a kind that one more piece turns into a split three (`XX_X`,
/// `X_XX`): a trap with two ways to finish.
const TRAPS: &[Pattern] = &[
    Pattern::new(Right, &[3], &[1, 2], (0, 3), &[1, 2]),
    Pattern::new(Right, &[1], &[-1, 2], (-1, 2), &[-1, 2]),
    Pattern::new(UpRight, &[3], &[1, 2], (0, 3), &[1, 2]),
    Pattern::new(UpRight, &[1], &[-1, 2], (-1, 2), &[2, -1]),
    Pattern::new(UpLeft, &[3], &[1, 2], (0, 3), &[1, 2]),
    Pattern::new(UpLeft, &[1], &[-1, 2], (-1, 2), &[2, -1]),
    Pattern::new(UpRight, &[1], &[-2], (-2, 1), &[-2]).with_empties(&[-1]),
    Pattern::new(UpLeft, &[1], &[-2], (-2, 1), &[-2]).with_empties(&[-1]),
    Pattern::new(UpRight, &[1], &[3], (0, 3), &[3]).with_empties(&[2]),
    Pattern::new(UpLeft, &[1], &[3], (0, 3), &[3]).with_empties(&[2]),
];

/// Two of a kind with room to become three: `XX_`, `_XX`, `X_X`.
const PAIRS: &[Pattern] = &[
    Pattern::new(Up, &[1], &[2], (0, 2), &[2]),
    Pattern::new(Right, &[1], &[2], (0, 3), &[2]),
    Pattern::new(Right, &[1], &[-1], (-2, 1), &[-1]),
    Pattern::new(Right, &[2], &[1], (0, 3), &[1]),
    Pattern::new(UpRight, &[1], &[2], (0, 3), &[2]),
    Pattern::new(UpRight, &[1], &[-1], (-1, 2), &[-1]),
    Pattern::new(UpRight, &[2], &[1], (0, 2), &[1]),
    Pattern::new(UpLeft, &[1], &[2], (0, 3), &[2]),
    Pattern::new(UpLeft, &[1], &[-1], (-1, 2), &[-1]),
    Pattern::new(UpLeft, &[2], &[1], (0, 2), &[1]),
];

/// Any free neighbour of a single piece: up, right, left, up-right, down-left,
/// up-left, down-right, down. Down never fits since the square below a piece
/// is always taken.
const NEIGHBOURS: &[Pattern] = &[
    Pattern::new(Up, &[], &[1], (0, 1), &[1]),
    Pattern::new(Right, &[], &[1], (0, 1), &[1]),
    Pattern::new(Right, &[], &[-1], (-1, 0), &[-1]),
    Pattern::new(UpRight, &[], &[1], (0, 1), &[1]),
    Pattern::new(UpRight, &[], &[-1], (-1, 0), &[-1]),
    Pattern::new(UpLeft, &[], &[1], (0, 1), &[1]),
    Pattern::new(UpLeft, &[], &[-1], (-1, 0), &[-1]),
    Pattern::new(Up, &[], &[-1], (-1, 0), &[-1]),
];

/// Walk the anchors of `piece` and return the first candidate column that
/// `accept` takes.
fn scan(
    board: &Board,
    piece: Piece,
    patterns: &[Pattern],
    mut accept: impl FnMut(usize) -> bool,
) -> Option<usize> {
    for (col, row) in scan_order() {
        if !board.cell_at(col, row).holds(piece) {
            continue;
        }
        let Some(pattern) = patterns.iter().find(|p| p.fits(board, col, row, piece)) else {
            continue;
        };
        for &steps in pattern.candidates {
            let column = pattern.column(col, row, steps);
            if accept(column) {
                return Some(column);
            }
            trace!(anchor = ?(col, row), column, "candidate turned down");
        }
    }
    None
}

/// Column completing a four for `check`, if one can be played right now.
///
/// With `check` set to the mover this finds a win; with the opponent's piece
/// it finds the square that must be blocked.
pub fn three_in_a_row(board: &Board, check: Piece) -> Option<usize> {
    scan(board, check, THREES, |_| true)
}

/// Column that builds (or, with `check` set to the opponent, spoils) a split
/// three for `check`. Candidates that let `opponent` win on top are skipped.
pub fn three_trap(board: &Board, mover: Piece, check: Piece, opponent: Piece) -> Option<usize> {
    scan(board, check, TRAPS, |column| {
        is_safe(board, column, mover, opponent)
    })
}

/// Column extending (or cutting off) a pair of `check` pieces towards three.
pub fn two_in_a_row(board: &Board, mover: Piece, check: Piece, opponent: Piece) -> Option<usize> {
    scan(board, check, PAIRS, |column| {
        is_quiet(board, column, mover, opponent)
    })
}

/// Column next to one of the mover's own pieces, to start a new pair.
pub fn connect_two(board: &Board, mover: Piece, opponent: Piece) -> Option<usize> {
    scan(board, mover, NEIGHBOURS, |column| {
        is_quiet(board, column, mover, opponent)
    })
}
