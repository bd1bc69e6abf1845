use tracing::trace;

use super::metrics::GameResult;
use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{GameOutcome, GameState, Piece};

/// Play one game to the end. `first` plays `pieces[0]` and moves first.
///
/// A game in which an agent picks a full or out-of-range column is abandoned
/// with [`ArenaError::IllegalMove`].
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    pieces: [Piece; 2],
) -> Result<GameResult, ArenaError> {
    let mut state = GameState::initial(pieces[0], pieces[1]);

    while !state.is_terminal() {
        let agent: &mut dyn Agent = if state.turn() % 2 == 0 {
            &mut *first
        } else {
            &mut *second
        };
        let (column, row) = agent
            .select_action(&state)
            .and_then(|column| state.apply_move_mut(column).map(|row| (column, row)))
            .map_err(|source| ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                source,
            })?;
        trace!(turn = state.turn(), column, row, "move played");
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(piece)) => Some(piece),
        _ => None,
    };
    Ok(GameResult {
        winner,
        game_length: state.turn(),
    })
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
