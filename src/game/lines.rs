//! Four-in-a-row detection.

use super::{Board, Piece, COLS, ROWS};

/// A line orientation on the board.
///
/// Only the "forward" half of each axis is listed: every line is found from
/// its lowest (then leftmost) cell, which the bottom-up, left-to-right scan
/// reaches before any other cell of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    UpRight,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// `(column, row)` delta of one step along this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::UpLeft => (-1, 1),
        }
    }

    /// The cell `steps` away from `(col, row)`; negative steps walk backwards.
    pub fn step(self, col: usize, row: usize, steps: isize) -> (isize, isize) {
        let (dc, dr) = self.delta();
        (col as isize + dc * steps, row as isize + dr * steps)
    }
}

/// Cells in board scan order: rows bottom to top, columns left to right.
pub fn scan_order() -> impl Iterator<Item = (usize, usize)> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (col, row)))
}

/// The first four-in-a-row of `piece` in scan order, as `(column, row)` cells.
pub fn winning_line(board: &Board, piece: Piece) -> Option<[(usize, usize); 4]> {
    for (col, row) in scan_order() {
        if !board.cell_at(col, row).holds(piece) {
            continue;
        }
        for direction in Direction::ALL {
            let complete = (1..4).all(|k| {
                let (c, r) = direction.step(col, row, k);
                board.get(c, r).is_some_and(|cell| cell.holds(piece))
            });
            if complete {
                return Some(std::array::from_fn(|k| {
                    let (c, r) = direction.step(col, row, k as isize);
                    (c as usize, r as usize)
                }));
            }
        }
    }
    None
}

/// True if `piece` has four in a row anywhere on the board.
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    winning_line(board, piece).is_some()
}
