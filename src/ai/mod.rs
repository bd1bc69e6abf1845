//! Move selection: the rule-based engine and the agents that play games.

mod agent;
mod heuristic;
mod opening;
mod random;
pub mod safety;
mod selector;
pub mod threats;

pub use agent::Agent;
pub use heuristic::{EngineConfig, HeuristicAgent};
pub use opening::opening_move;
pub use random::RandomAgent;
pub use selector::{request_automated_move, Decision, MoveSelector, Stage};
