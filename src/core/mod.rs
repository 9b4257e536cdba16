//! Core types: pieces, board state, errors, RNG, configuration.
//!
//! Everything here is pure: states are values and every transition returns
//! a new one.

pub mod piece;
pub mod error;
pub mod rng;
pub mod config;
pub mod state;

pub use piece::{Piece, PieceName};
pub use error::{ConfigError, MoveError, StateError};
pub use rng::{GameRng, DIE_FACES};
pub use config::{GameConfig, MAX_TRACK_UNIT};
pub use state::{GameState, MoveOutcome};
