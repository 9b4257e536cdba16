//! Piece identification and placement.
//!
//! ## PieceName
//!
//! A piece is named by the pair `(player, rank)`: the owner's symbol and a
//! rank symbol distinguishing the owner's pieces. Both are single characters
//! so they can be drawn straight onto the board.
//!
//! ## Piece
//!
//! A `PieceName` plus its current track position.

use serde::{Deserialize, Serialize};

/// Identity of a piece: owner symbol plus rank symbol.
///
/// ```
/// use kick_ludo::core::PieceName;
///
/// let name = PieceName::new('A', '1');
/// assert_eq!(name.player, 'A');
/// assert_eq!(name.to_string(), "A1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceName {
    /// Owner symbol.
    pub player: char,
    /// Rank symbol, unique among the owner's pieces.
    pub rank: char,
}

impl PieceName {
    /// Create a new piece name.
    #[must_use]
    pub const fn new(player: char, rank: char) -> Self {
        Self { player, rank }
    }

    /// Check if this piece belongs to `player`.
    #[must_use]
    pub fn is_owned_by(self, player: char) -> bool {
        self.player == player
    }
}

impl std::fmt::Display for PieceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player, self.rank)
    }
}

/// A named piece at a track position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub name: PieceName,
    /// Position on the track, in `0..track_length`.
    pub position: usize,
}

impl Piece {
    /// Create a piece at `position`.
    #[must_use]
    pub const fn new(player: char, rank: char, position: usize) -> Self {
        Self {
            name: PieceName::new(player, rank),
            position,
        }
    }

    /// Owner symbol.
    #[must_use]
    pub const fn player(&self) -> char {
        self.name.player
    }

    /// Rank symbol.
    #[must_use]
    pub const fn rank(&self) -> char {
        self.name.rank
    }
}
