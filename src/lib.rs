//! # Connect Four
//!
//! A rule-based Connect Four engine. Moves are picked by a fixed cascade of
//! pattern scans (opening book, immediate wins and blocks, traps, pairs)
//! with a one-ply safety check, and a random fallback when nothing applies.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, pieces, line detection, turn state
//! - [`ai`]: Agent trait, threat scanner, safety filter, move selector
//! - [`arena`]: Headless matches and their summaries
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
