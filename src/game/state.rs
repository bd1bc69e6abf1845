use super::{has_four_in_a_row, Board, Piece, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

/// Turn bookkeeping for one game: whose turn it is, how many moves have been
/// played and whether the game is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    pieces: [Piece; 2],
    turn: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state; `first` moves first.
    ///
    /// # Panics
    ///
    /// Panics if both players use the same piece. Match setups go through
    /// [`ArenaConfig::pieces`](crate::arena::ArenaConfig::pieces), which
    /// rejects that as a config error.
    pub fn initial(first: Piece, second: Piece) -> Self {
        assert_ne!(first, second, "players must use different pieces");
        GameState {
            board: Board::new(),
            pieces: [first, second],
            turn: 0,
            outcome: None,
        }
    }

    /// Piece of the player to move
    pub fn current_piece(&self) -> Piece {
        self.pieces[self.turn % 2]
    }

    /// Piece of the player waiting for their turn
    pub fn opponent_piece(&self) -> Piece {
        self.pieces[(self.turn + 1) % 2]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played so far, by both players.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// How many moves the player to act has already made.
    pub fn turn_index(&self) -> usize {
        self.turn / 2
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Drop the current player's piece into `column` (0-based), settle the
    /// outcome and pass the turn. Returns the row the piece landed in.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let piece = self.current_piece();
        let row = self.board.place(column, piece)?;

        if check_winner(&self.board, piece) {
            self.outcome = Some(GameOutcome::Winner(piece));
        } else if is_draw(&self.board) {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.turn += 1;
        Ok(row)
    }

    /// Play a column chosen by a person, numbered 1-7 as shown on screen.
    pub fn request_human_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if column == 0 || column > COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        self.apply_move_mut(column - 1)
    }
}

/// True if `piece` has connected four.
pub fn check_winner(board: &Board, piece: Piece) -> bool {
    has_four_in_a_row(board, piece)
}

/// True once the board has no room left. Callers check for a winner first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
