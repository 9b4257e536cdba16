//! The seat seam: where piece choices come from.
//!
//! `Match` drives the turn order and dice; a `TurnInput` answers "which
//! piece?" and is told about everything a player should see. The console
//! seat lives in `console`; `ScriptedInput` replays fixed answers.

use std::collections::VecDeque;

use thiserror::Error;

use super::engine::GameResult;
use crate::core::{GameState, MoveError};

/// Failures that end a match early.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("the game is already over")]
    GameOver,
    #[error("failed to talk to the player")]
    Io(#[from] std::io::Error),
}

/// Source of piece choices for the player whose turn it is.
///
/// Only `select` is required; the notifications default to doing nothing.
pub trait TurnInput {
    /// A turn has started: `player` rolled `roll` on `state`.
    fn announce(&mut self, _state: &GameState, _player: char, _roll: u8) -> Result<(), TurnError> {
        Ok(())
    }

    /// Pick the rank of the piece `player` moves by `roll`.
    ///
    /// Called again after every rejected choice.
    fn select(&mut self, state: &GameState, player: char, roll: u8) -> Result<char, TurnError>;

    /// The last choice was rejected; the move had no effect.
    fn rejected(&mut self, _error: &MoveError) -> Result<(), TurnError> {
        Ok(())
    }

    /// No piece of `player` can move by `roll`; the turn passes.
    fn passed(&mut self, _player: char, _roll: u8) -> Result<(), TurnError> {
        Ok(())
    }

    /// The match is over.
    fn finished(&mut self, _state: &GameState, _result: &GameResult) -> Result<(), TurnError> {
        Ok(())
    }
}

/// Replays a fixed list of rank choices.
///
/// Runs out with `TurnError::InputClosed`. Rejections are recorded so
/// callers can check which choices bounced.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    choices: VecDeque<char>,
    rejections: Vec<MoveError>,
}

impl ScriptedInput {
    /// Create an input answering with `choices` in order.
    pub fn new(choices: impl IntoIterator<Item = char>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }

    /// Rejections seen so far, oldest first.
    #[must_use]
    pub fn rejections(&self) -> &[MoveError] {
        &self.rejections
    }
}

impl TurnInput for ScriptedInput {
    fn select(&mut self, _state: &GameState, _player: char, _roll: u8) -> Result<char, TurnError> {
        self.choices.pop_front().ok_or(TurnError::InputClosed)
    }

    fn rejected(&mut self, error: &MoveError) -> Result<(), TurnError> {
        self.rejections.push(*error);
        Ok(())
    }
}
