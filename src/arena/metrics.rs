use crate::game::Piece;

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Piece>,
    pub game_length: usize,
}

/// Running tally of a match, from the engine's point of view.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub average_game_length: f64,
    #[serde(skip)]
    total_moves: usize,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &GameResult, engine_piece: Piece) {
        self.games += 1;
        match result.winner {
            Some(winner) if winner == engine_piece => self.engine_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += result.game_length;
        self.average_game_length = self.total_moves as f64 / self.games as f64;
    }

    /// Fraction of games the engine won.
    pub fn engine_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.engine_wins as f64 / self.games as f64
    }

    /// Fraction of games that ended with a full board.
    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f64 / self.games as f64
    }
}
