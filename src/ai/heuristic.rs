use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;
use super::selector::{Decision, MoveSelector};
use crate::error::MoveError;
use crate::game::GameState;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Play the fixed replies for the engine's first two moves.
    pub opening_book: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { opening_book: true }
    }
}

/// Rule-based engine: runs the selection cascade for whichever piece is to
/// move, breaking dead ends with its own random generator.
pub struct HeuristicAgent {
    selector: MoveSelector,
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(config: &EngineConfig) -> Self {
        HeuristicAgent {
            selector: MoveSelector::new(config.opening_book),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        HeuristicAgent {
            selector: MoveSelector::new(config.opening_book),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move for the player to act in `state`, reporting which stage
    /// of the cascade picked it.
    pub fn select_move(&mut self, state: &GameState) -> Result<Decision, MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.selector.select(
            state.board(),
            state.current_piece(),
            state.opponent_piece(),
            state.turn_index(),
            &mut self.rng,
        )
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, MoveError> {
        self.select_move(state).map(|decision| decision.column)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{RandomAgent, Stage};
    use crate::game::{GameOutcome, Piece};

    fn red() -> Piece {
        Piece::new('R').unwrap()
    }

    fn yellow() -> Piece {
        Piece::new('Y').unwrap()
    }

    #[test]
    fn selects_centre_first() {
        let mut agent = HeuristicAgent::with_seed(&EngineConfig::default(), 0);
        let state = GameState::initial(red(), yellow());
        let decision = agent.select_move(&state).unwrap();
        assert_eq!(decision.column, 3);
        assert_eq!(decision.stage, Stage::OpeningBook);
    }

    #[test]
    fn answers_as_second_player() {
        let mut agent = HeuristicAgent::with_seed(&EngineConfig::default(), 0);
        let state = GameState::initial(red(), yellow()).apply_move(0).unwrap();
        // Yellow's first move is still the centre; its second move reads red's
        // floor piece in column 0.
        assert_eq!(agent.select_action(&state), Ok(3));
        let state = state.apply_move(3).unwrap().apply_move(6).unwrap();
        assert_eq!(agent.select_action(&state), Ok(3));
    }

    #[test]
    fn takes_winning_move() {
        let mut state = GameState::initial(red(), yellow());
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }
        let mut agent = HeuristicAgent::with_seed(&EngineConfig::default(), 0);
        let decision = agent.select_move(&state).unwrap();
        assert_eq!(decision.column, 3, "Should take winning move at col 3");
        assert_eq!(decision.stage, Stage::Win);
    }

    #[test]
    fn refuses_finished_game() {
        let mut state = GameState::initial(red(), yellow());
        for _ in 0..3 {
            state = state.apply_move(0).unwrap();
            state = state.apply_move(1).unwrap();
        }
        state = state.apply_move(0).unwrap();
        assert!(state.is_terminal());

        let mut agent = HeuristicAgent::default();
        assert_eq!(agent.select_action(&state), Err(MoveError::GameOver));
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut agent1 = HeuristicAgent::with_seed(&EngineConfig::default(), 1);
        let mut agent2 = HeuristicAgent::with_seed(&EngineConfig::default(), 2);
        let mut state = GameState::initial(red(), yellow());
        let mut turn = 0;

        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state).unwrap()
            } else {
                agent2.select_action(&state).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(turn <= 42);
        assert!(state.outcome().is_some());
    }

    #[test]
    fn beats_random_agent_usually() {
        let games = 40;
        let mut engine_wins = 0;

        for game in 0..games {
            let mut engine = HeuristicAgent::with_seed(&EngineConfig::default(), game);
            let mut random = RandomAgent::with_seed(1_000 + game);
            let engine_first = game % 2 == 0;
            let (engine_piece, random_piece) = (red(), yellow());
            let mut state = if engine_first {
                GameState::initial(engine_piece, random_piece)
            } else {
                GameState::initial(random_piece, engine_piece)
            };

            while !state.is_terminal() {
                let action = if state.current_piece() == engine_piece {
                    engine.select_action(&state).unwrap()
                } else {
                    random.select_action(&state).unwrap()
                };
                state = state.apply_move(action).unwrap();
            }

            if state.outcome() == Some(GameOutcome::Winner(engine_piece)) {
                engine_wins += 1;
            }
        }

        assert!(
            engine_wins * 5 >= games * 3,
            "engine won only {engine_wins} of {games}"
        );
    }
}
