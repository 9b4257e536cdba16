//! # kick-ludo
//!
//! A race game on a square track. Players take turns rolling a die and
//! moving one of their pieces around the loop; landing on an opponent kicks
//! it off the board. The last player with pieces left wins.
//!
//! ## Design Principles
//!
//! 1. **Immutable states**: every move returns a new `GameState`. The piece
//!    list is an `im::Vector`, so keeping old states around is cheap.
//!
//! 2. **Errors, not sentinels**: a rejected move is an `Err(MoveError)` and
//!    carries no state the caller could misuse.
//!
//! 3. **Injected randomness**: placement and dice come from a seeded
//!    `GameRng` passed in by the caller. There is no global generator.
//!
//! ## Modules
//!
//! - `core`: pieces, board state, moves, errors, RNG, configuration
//! - `render`: track geometry and text rendering
//! - `rules`: turn loop, seat trait, console seat

pub mod core;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, MoveError, MoveOutcome, Piece, PieceName,
};

pub use crate::render::{render, BoardLayout};

pub use crate::rules::{
    ConsoleInput, GameResult, Match, ScriptedInput, TurnError, TurnInput, TurnReport,
};
