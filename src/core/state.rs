//! Game state: the track and the pieces on it.
//!
//! ## GameState
//!
//! - Track length (four equal sides of a square loop)
//! - Live pieces, in a stable order
//!
//! A `GameState` is never changed after construction. `moved` returns a
//! new state and leaves the receiver untouched, so a caller holding the old
//! state always sees the pre-move board. The piece list is an `im::Vector`,
//! making the copy cheap and letting consecutive states share structure.
//!
//! ## Moves
//!
//! A piece advances by the die roll, wrapping around the track. Landing on
//! a piece of another player kicks that piece off the board; landing on a
//! piece of the same player is rejected.
//!
//! ```
//! use kick_ludo::core::{GameState, MoveError, Piece, PieceName};
//!
//! let state = GameState::new(2, [Piece::new('A', '1', 0), Piece::new('B', '1', 3)]);
//!
//! let next = state.moved(PieceName::new('A', '1'), 3).unwrap();
//! assert_eq!(next.num_pieces('B'), 0);
//! assert_eq!(state.num_pieces('B'), 1); // old state unchanged
//!
//! let missing = state.moved(PieceName::new('Z', '9'), 3);
//! assert_eq!(missing, Err(MoveError::NoSuchPiece(PieceName::new('Z', '9'))));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{MoveError, StateError};
use super::piece::{Piece, PieceName};
use super::rng::GameRng;

/// Result of a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// State after the move.
    pub state: GameState,
    /// Opposing pieces removed from the destination, in board order.
    pub kicked: SmallVec<[Piece; 1]>,
}

/// Board state: track length plus live pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    track_length: usize,
    pieces: Vector<Piece>,
}

/// Unchecked serialized form of a `GameState`.
#[derive(Deserialize)]
struct StateSnapshot {
    track_length: usize,
    pieces: Vector<Piece>,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = StateError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let StateSnapshot { track_length, pieces } = snapshot;
        if track_length == 0 || track_length % 4 != 0 {
            return Err(StateError::TrackLength(track_length));
        }
        if let Some(piece) = pieces.iter().find(|p| p.position >= track_length) {
            return Err(StateError::OffTrack {
                piece: piece.name,
                position: piece.position,
                track_length,
            });
        }
        Ok(Self { track_length, pieces })
    }
}

/// Length of a track with sides of `track_unit` steps.
fn checked_track_length(track_unit: usize) -> usize {
    assert!(track_unit > 0, "Track unit must be at least 1");
    match track_unit.checked_mul(4) {
        Some(track_length) => track_length,
        None => panic!("Track unit {track_unit} overflows the track length"),
    }
}

impl GameState {
    /// Create a game on a square track with sides of `track_unit` steps.
    ///
    /// Pieces are taken as given: callers guarantee unique names and
    /// positions in `0..track_unit * 4`.
    #[must_use]
    pub fn new(track_unit: usize, pieces: impl IntoIterator<Item = Piece>) -> Self {
        Self {
            track_length: checked_track_length(track_unit),
            pieces: pieces.into_iter().collect(),
        }
    }

    /// Create a game with every (player, rank) piece on a distinct random cell.
    ///
    /// Positions are drawn without replacement from a uniform permutation of
    /// the track, players in order and ranks in order within each player.
    #[must_use]
    pub fn random(track_unit: usize, players: &[char], ranks: &[char], rng: &mut GameRng) -> Self {
        let track_length = checked_track_length(track_unit);
        let piece_count = players.len().saturating_mul(ranks.len());
        assert!(
            piece_count <= track_length,
            "{piece_count} pieces do not fit on a track of {track_length} positions"
        );

        let pieces: Vec<Piece> = players
            .iter()
            .flat_map(|&player| ranks.iter().map(move |&rank| PieceName::new(player, rank)))
            .zip(rng.permutation(track_length))
            .map(|(name, position)| Piece { name, position })
            .collect();

        Self::new(track_unit, pieces)
    }

    /// Total number of positions on the track.
    #[must_use]
    pub fn track_length(&self) -> usize {
        self.track_length
    }

    /// Number of positions on one side of the square.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.track_length / 4
    }

    /// Iterate over live pieces in board order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Look up a live piece by name.
    #[must_use]
    pub fn piece(&self, name: PieceName) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.name == name)
    }

    /// Position of a live piece.
    #[must_use]
    pub fn position_of(&self, name: PieceName) -> Option<usize> {
        self.piece(name).map(|p| p.position)
    }

    // === Moves ===

    /// Position reached by stepping `amount` from `position`, wrapping around.
    ///
    /// Negative amounts step backwards.
    #[must_use]
    pub fn destination(&self, position: usize, amount: i64) -> usize {
        let len = self.track_length as i64;
        (position + amount.rem_euclid(len) as usize) % self.track_length
    }

    /// Move a piece by `amount`, kicking opposing pieces on the destination.
    ///
    /// Fails with `NoSuchPiece` if `name` is not on the board and with
    /// `KickOwn` if another piece of the same player sits on the destination.
    /// Either way the receiver is unchanged.
    pub fn moved(&self, name: PieceName, amount: i64) -> Result<GameState, MoveError> {
        self.apply_move(name, amount).map(|outcome| outcome.state)
    }

    /// Like `moved`, but also reports which pieces were kicked.
    pub fn apply_move(&self, name: PieceName, amount: i64) -> Result<MoveOutcome, MoveError> {
        let index = self
            .pieces
            .iter()
            .position(|p| p.name == name)
            .ok_or(MoveError::NoSuchPiece(name))?;
        let destination = self.destination(self.pieces[index].position, amount);

        let occupants: SmallVec<[usize; 1]> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != index && p.position == destination)
            .map(|(i, _)| i)
            .collect();

        if let Some(own) = occupants
            .iter()
            .map(|&i| self.pieces[i])
            .find(|p| p.player() == name.player)
        {
            log::debug!("{name} blocked by own piece {} at {destination}", own.name);
            return Err(MoveError::KickOwn {
                piece: name,
                occupant: own.name,
            });
        }

        let mut pieces = self.pieces.clone();
        pieces.set(index, Piece { name, position: destination });

        // Remove back to front so earlier indices stay valid.
        let mut kicked: SmallVec<[Piece; 1]> = occupants
            .iter()
            .rev()
            .map(|&i| pieces.remove(i))
            .collect();
        kicked.reverse();

        for piece in &kicked {
            log::debug!("{name} kicked {} at {destination}", piece.name);
        }

        Ok(MoveOutcome {
            state: Self {
                track_length: self.track_length,
                pieces,
            },
            kicked,
        })
    }

    /// Names of `player`'s pieces that can legally move by `amount`.
    #[must_use]
    pub fn movable_pieces(&self, player: char, amount: i64) -> Vec<PieceName> {
        self.pieces
            .iter()
            .filter(|p| p.player() == player)
            .filter(|p| {
                let destination = self.destination(p.position, amount);
                !self
                    .pieces
                    .iter()
                    .any(|o| o.name != p.name && o.player() == player && o.position == destination)
            })
            .map(|p| p.name)
            .collect()
    }

    // === Queries ===

    /// Number of live pieces owned by `player`.
    #[must_use]
    pub fn num_pieces(&self, player: char) -> usize {
        self.pieces.iter().filter(|p| p.player() == player).count()
    }

    /// Number of players among `players` with at least one live piece.
    #[must_use]
    pub fn num_players(&self, players: &[char]) -> usize {
        players.iter().filter(|&&p| self.num_pieces(p) > 0).count()
    }

    /// Players among `players` with at least one live piece, in the given order.
    #[must_use]
    pub fn remaining_players(&self, players: &[char]) -> Vec<char> {
        players
            .iter()
            .copied()
            .filter(|&p| self.num_pieces(p) > 0)
            .collect()
    }
}
