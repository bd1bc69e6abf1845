//! Headless matches between the engine and an opponent.

mod episode;
mod metrics;

pub use episode::{game_seed, play_game};
pub use metrics::{GameResult, MatchSummary};

use tracing::{debug, info};

use crate::ai::{Agent, EngineConfig, HeuristicAgent, RandomAgent};
use crate::error::{ArenaError, ConfigError};
use crate::game::Piece;

/// Who the engine plays against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Uniformly random legal moves.
    Random,
    /// A second copy of the engine.
    Engine,
}

/// Match settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub engine_piece: char,
    pub opponent_piece: char,
    pub opponent: OpponentKind,
    /// Swap who moves first every game; otherwise the engine always starts.
    pub alternate_first_move: bool,
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            engine_piece: 'X',
            opponent_piece: 'Y',
            opponent: OpponentKind::Random,
            alternate_first_move: true,
            seed: 42,
        }
    }
}

impl ArenaConfig {
    /// The engine's and the opponent's pieces.
    pub fn pieces(&self) -> Result<(Piece, Piece), ConfigError> {
        let engine = Piece::new(self.engine_piece)?;
        let opponent = Piece::new(self.opponent_piece)?;
        if engine == opponent {
            return Err(ConfigError::Validation(format!(
                "arena.engine_piece and arena.opponent_piece must differ (both '{engine}')"
            )));
        }
        Ok((engine, opponent))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        self.pieces().map(|_| ())
    }

    /// Whether the engine opens game `index`.
    pub fn engine_moves_first(&self, index: usize) -> bool {
        !self.alternate_first_move || index % 2 == 0
    }
}

/// Play `arena.games` games of the engine against the configured opponent.
///
/// Both sides are reseeded from [`game_seed`] every game, so a match is
/// reproducible from `arena.seed` alone.
pub fn run_match(arena: &ArenaConfig, engine: &EngineConfig) -> Result<MatchSummary, ArenaError> {
    arena.validate()?;
    let (engine_piece, opponent_piece) = arena.pieces()?;
    let mut summary = MatchSummary::new();

    for index in 0..arena.games {
        let mut engine_agent = HeuristicAgent::with_seed(engine, game_seed(arena.seed, index));
        let opponent_seed = game_seed(arena.seed.wrapping_add(1), index);
        let mut opponent_agent: Box<dyn Agent> = match arena.opponent {
            OpponentKind::Random => Box::new(RandomAgent::with_seed(opponent_seed)),
            OpponentKind::Engine => Box::new(HeuristicAgent::with_seed(engine, opponent_seed)),
        };

        let engine_first = arena.engine_moves_first(index);
        let result = if engine_first {
            play_game(
                &mut engine_agent,
                opponent_agent.as_mut(),
                [engine_piece, opponent_piece],
            )?
        } else {
            play_game(
                opponent_agent.as_mut(),
                &mut engine_agent,
                [opponent_piece, engine_piece],
            )?
        };

        debug!(
            game = index + 1,
            engine_first,
            winner = ?result.winner.map(|piece| piece.symbol()),
            moves = result.game_length,
            "game finished"
        );
        summary.record(&result, engine_piece);
    }

    info!(
        games = summary.games,
        engine_wins = summary.engine_wins,
        opponent_wins = summary.opponent_wins,
        draws = summary.draws,
        average_game_length = summary.average_game_length,
        "match finished"
    );
    Ok(summary)
}
