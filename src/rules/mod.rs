//! Turn loop around the board model.
//!
//! - `engine`: `Match` (turn order, dice, win detection) and `GameResult`
//! - `input`: the `TurnInput` seat trait and `ScriptedInput`
//! - `console`: `ConsoleInput`, a seat over line-oriented text streams
//!
//! The board model never asks anyone anything; all prompting happens here.

pub mod console;
pub mod engine;
pub mod input;

pub use console::ConsoleInput;
pub use engine::{GameResult, Match, TurnReport};
pub use input::{ScriptedInput, TurnError, TurnInput};
