//! Game configuration.
//!
//! A `GameConfig` names everything needed to set up a match:
//! - the track unit (side length of the square; the track has four sides)
//! - the player symbols, in turn order
//! - the rank symbols every player receives one piece of
//! - the seed for placement and dice
//!
//! Defaults are a 10-unit track, players `A B C D` and ranks `1 2 3`.
//! The track unit is capped at `MAX_TRACK_UNIT` so the board still renders.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest accepted track unit.
pub const MAX_TRACK_UNIT: usize = 1_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square track. Track length is four times this.
    pub track_unit: usize,

    /// Player symbols in turn order.
    pub players: Vec<char>,

    /// Rank symbols; each player gets one piece per rank.
    pub ranks: Vec<char>,

    /// Seed for placement and dice.
    /// Same seed produces the same game for the same choices.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_unit: 10,
            players: vec!['A', 'B', 'C', 'D'],
            ranks: vec!['1', '2', '3'],
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the track unit.
    #[must_use]
    pub fn with_track_unit(mut self, track_unit: usize) -> Self {
        self.track_unit = track_unit;
        self
    }

    /// Set the player symbols.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = char>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    /// Set the rank symbols.
    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = char>) -> Self {
        self.ranks = ranks.into_iter().collect();
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of positions on the track, `None` on overflow.
    #[must_use]
    pub fn track_length(&self) -> Option<usize> {
        self.track_unit.checked_mul(4)
    }

    /// Total number of pieces at game start.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.players.len().saturating_mul(self.ranks.len())
    }

    /// Check that a random game can be set up from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_unit == 0 {
            return Err(ConfigError::ZeroTrackUnit);
        }
        let positions = match self.track_length() {
            Some(len) if self.track_unit <= MAX_TRACK_UNIT => len,
            _ => {
                return Err(ConfigError::TrackTooLong {
                    track_unit: self.track_unit,
                    max: MAX_TRACK_UNIT,
                })
            }
        };
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.ranks.is_empty() {
            return Err(ConfigError::NoRanks);
        }
        if self
            .players
            .iter()
            .chain(&self.ranks)
            .any(|c| c.is_whitespace())
        {
            return Err(ConfigError::BlankSymbol);
        }
        if let Some(dup) = first_duplicate(&self.players) {
            return Err(ConfigError::DuplicatePlayer(dup));
        }
        if let Some(dup) = first_duplicate(&self.ranks) {
            return Err(ConfigError::DuplicateRank(dup));
        }
        if self.piece_count() > positions {
            return Err(ConfigError::TooManyPieces {
                pieces: self.piece_count(),
                positions,
            });
        }
        Ok(())
    }
}

fn first_duplicate(symbols: &[char]) -> Option<char> {
    let mut seen = FxHashSet::default();
    symbols.iter().copied().find(|&c| !seen.insert(c))
}
