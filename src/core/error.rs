//! Recoverable errors surfaced by the board model and configuration.

use thiserror::Error;

use super::piece::PieceName;

/// Reasons a move is rejected.
///
/// A rejected move never changes the state: `GameState::moved` returns the
/// error instead of a new state and the caller keeps the old one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no such piece {0}")]
    NoSuchPiece(PieceName),
    #[error("can't kick own piece {occupant}")]
    KickOwn {
        /// The piece that tried to move.
        piece: PieceName,
        /// The same-owner piece sitting on the destination.
        occupant: PieceName,
    },
}

/// Problems with a `GameConfig`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("track unit must be at least 1")]
    ZeroTrackUnit,
    #[error("track unit {track_unit} exceeds the maximum of {max}")]
    TrackTooLong { track_unit: usize, max: usize },
    #[error("at least one player is required")]
    NoPlayers,
    #[error("at least one rank is required")]
    NoRanks,
    #[error("player symbol {0:?} appears more than once")]
    DuplicatePlayer(char),
    #[error("rank symbol {0:?} appears more than once")]
    DuplicateRank(char),
    #[error("symbols must not be whitespace")]
    BlankSymbol,
    #[error("{pieces} pieces do not fit on a track of {positions} positions")]
    TooManyPieces { pieces: usize, positions: usize },
}

/// Problems with a deserialized `GameState`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("track length {0} is not a positive multiple of 4")]
    TrackLength(usize),
    #[error("piece {piece} at {position} is off a track of {track_length}")]
    OffTrack {
        piece: PieceName,
        position: usize,
        track_length: usize,
    },
}
