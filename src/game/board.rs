use super::Piece;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Centre column, the strongest opening square.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True if this cell holds `piece`.
    pub fn holds(self, piece: Piece) -> bool {
        self == Cell::Occupied(piece)
    }
}

/// A 7x6 Connect Four grid, indexed `(column, row)` with row 0 on the floor.
///
/// Pieces only ever enter through [`Board::place`], so every column is a
/// contiguous stack growing up from row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at `(col, row)`.
    ///
    /// Panics if the coordinates are off the board; engine code must never
    /// ask for them.
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        assert!(
            col < COLS && row < ROWS,
            "cell ({col}, {row}) is outside the {COLS}x{ROWS} board"
        );
        self.cells[col][row]
    }

    /// Range-tolerant lookup for scanners walking off the edge of the grid.
    pub fn get(&self, col: isize, row: isize) -> Option<Cell> {
        if col < 0 || row < 0 || col >= COLS as isize || row >= ROWS as isize {
            return None;
        }
        Some(self.cells[col as usize][row as usize])
    }

    /// Number of pieces stacked in `col`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.heights[col] == ROWS
    }

    /// True if a piece dropped now would come to rest at `(col, row)`.
    pub fn is_playable(&self, col: isize, row: isize) -> bool {
        match self.get(col, row) {
            Some(Cell::Empty) => self.heights[col as usize] == row as usize,
            _ => false,
        }
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn place(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col.saturating_add(1)));
        }
        let row = self.heights[col];
        if row == ROWS {
            return Err(MoveError::ColumnFull(col));
        }
        self.cells[col][row] = Cell::Occupied(piece);
        self.heights[col] += 1;
        Ok(row)
    }

    /// Copy of this board with `piece` dropped into `col`.
    pub fn with_move(&self, col: usize, piece: Piece) -> Result<(Board, usize), MoveError> {
        let mut next = *self;
        let row = next.place(col, piece)?;
        Ok((next, row))
    }

    /// Take back the piece at `(col, row)`.
    ///
    /// Only the top piece of a column may be removed; anything else would
    /// leave a floating stack behind.
    pub fn clear(&mut self, col: usize, row: usize) {
        assert!(
            col < COLS && row < ROWS && self.heights[col] == row + 1,
            "({col}, {row}) is not the top piece of its column"
        );
        self.cells[col][row] = Cell::Empty;
        self.heights[col] -= 1;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Total number of pieces on the board.
    pub fn move_count(&self) -> usize {
        self.heights.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
