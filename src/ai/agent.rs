use crate::error::MoveError;
use crate::game::GameState;

/// Universal interface for anything that can take a turn.
pub trait Agent {
    /// Select a column (0-based) for the player to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, MoveError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
