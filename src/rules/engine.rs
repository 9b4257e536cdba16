//! Turn loop: whose turn it is, dice, and when the game ends.
//!
//! A `Match` owns the current `GameState`, the player order and the dice
//! RNG. Each turn:
//! - roll the die
//! - ask the `TurnInput` for a rank until the move is accepted
//! - replace the state with the result of the move
//! - pass the turn to the next player who still has pieces
//!
//! The game is over when at most one player has pieces left.

use smallvec::SmallVec;

use super::input::{TurnError, TurnInput};
use crate::core::{ConfigError, GameConfig, GameRng, GameState, Piece, PieceName};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single player left on the board.
    Winner(char),
    /// No pieces left at all.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: char) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: char,
    pub roll: u8,
    /// The piece that moved, or `None` if the turn passed.
    pub moved: Option<PieceName>,
    /// Opposing pieces kicked by the move.
    pub kicked: SmallVec<[Piece; 1]>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Match {
    state: GameState,
    players: Vec<char>,
    rng: GameRng,
    /// Index into `players` of the player to move.
    turn: usize,
    turn_number: u32,
}

impl Match {
    /// Set up a random game from `config`.
    ///
    /// Placement and dice use separate streams of the config seed.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let mut placement = rng.for_context("placement");
        let state = GameState::random(config.track_unit, &config.players, &config.ranks, &mut placement);

        log::info!(
            "new game: {} players with {} pieces each on a track of {}, seed {}",
            config.players.len(),
            config.ranks.len(),
            state.track_length(),
            config.seed
        );

        Ok(Self::from_state(state, config.players.clone(), rng))
    }

    /// Resume from a given state. The first player with pieces moves first.
    #[must_use]
    pub fn from_state(state: GameState, players: Vec<char>, rng: GameRng) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");

        let mut game = Self {
            state,
            players,
            rng,
            turn: 0,
            turn_number: 1,
        };
        game.seek_player(0);
        game
    }

    /// Current board.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Players in turn order, including eliminated ones.
    #[must_use]
    pub fn players(&self) -> &[char] {
        &self.players
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> char {
        self.players[self.turn]
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// `Some` once at most one player has pieces.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state.remaining_players(&self.players).as_slice() {
            [] => Some(GameResult::Draw),
            [winner] => Some(GameResult::Winner(*winner)),
            _ => None,
        }
    }

    /// Play one turn for the current player.
    ///
    /// Rejected choices are reported to `input` and asked again. If no
    /// piece can move by the roll, the turn passes without asking.
    pub fn play_turn<I: TurnInput + ?Sized>(&mut self, input: &mut I) -> Result<TurnReport, TurnError> {
        if self.result().is_some() {
            return Err(TurnError::GameOver);
        }

        let player = self.current_player();
        let roll = self.rng.roll_die();
        let amount = i64::from(roll);
        log::info!("turn {}: {player} rolled {roll}", self.turn_number);

        input.announce(&self.state, player, roll)?;

        let (moved, kicked) = if self.state.movable_pieces(player, amount).is_empty() {
            log::info!("{player} cannot move {roll}, turn passes");
            input.passed(player, roll)?;
            (None, SmallVec::new())
        } else {
            loop {
                let name = PieceName::new(player, input.select(&self.state, player, roll)?);
                match self.state.apply_move(name, amount) {
                    Ok(outcome) => {
                        self.state = outcome.state;
                        break (Some(name), outcome.kicked);
                    }
                    Err(err) => {
                        log::debug!("rejected {name} + {roll}: {err}");
                        input.rejected(&err)?;
                    }
                }
            }
        };

        for piece in &kicked {
            log::info!("{player} kicked {}", piece.name);
            if self.state.num_pieces(piece.player()) == 0 {
                log::info!("{} has no pieces left", piece.player());
            }
        }

        self.turn_number += 1;
        self.seek_player(self.turn + 1);

        Ok(TurnReport {
            player,
            roll,
            moved,
            kicked,
        })
    }

    /// Play turns until the game is decided.
    pub fn run<I: TurnInput + ?Sized>(&mut self, input: &mut I) -> Result<GameResult, TurnError> {
        loop {
            if let Some(result) = self.result() {
                log::info!("game over after {} turns: {result:?}", self.turn_number - 1);
                input.finished(&self.state, &result)?;
                return Ok(result);
            }
            self.play_turn(input)?;
        }
    }

    /// Make the first player with pieces at or after `start` current.
    fn seek_player(&mut self, start: usize) {
        let count = self.players.len();
        if let Some(offset) = (0..count).find(|offset| {
            let player = self.players[(start + offset) % count];
            self.state.num_pieces(player) > 0
        }) {
            self.turn = (start + offset) % count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveError;
    use crate::rules::ScriptedInput;

    /// The roll the next turn will see.
    fn next_roll(rng: &GameRng) -> u8 {
        rng.clone().roll_die()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner('B');
        assert!(!result.is_winner('A'));
        assert!(result.is_winner('B'));
        assert!(!GameResult::Draw.is_winner('A'));
    }

    #[test]
    fn test_new_match_from_config() {
        let config = GameConfig::default().with_seed(5);
        let game = Match::new(&config).unwrap();

        assert_eq!(game.state().pieces().count(), 12);
        assert_eq!(game.state().track_length(), 40);
        assert_eq!(game.current_player(), 'A');
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.result(), None);

        let again = Match::new(&config).unwrap();
        assert_eq!(game.state(), again.state());
    }

    #[test]
    fn test_new_match_rejects_bad_config() {
        let config = GameConfig::default().with_track_unit(2);
        assert!(matches!(
            Match::new(&config),
            Err(ConfigError::TooManyPieces { .. })
        ));
    }

    #[test]
    fn test_kick_wins_game() {
        let rng = GameRng::new(3);
        let roll = next_roll(&rng);
        let state = GameState::new(10, [Piece::new('A', '1', 0), Piece::new('B', '1', roll as usize)]);
        let mut game = Match::from_state(state, vec!['A', 'B'], rng);

        let report = game.play_turn(&mut ScriptedInput::new(['1'])).unwrap();

        assert_eq!(report.player, 'A');
        assert_eq!(report.roll, roll);
        assert_eq!(report.moved, Some(PieceName::new('A', '1')));
        assert_eq!(report.kicked.len(), 1);
        assert_eq!(game.result(), Some(GameResult::Winner('A')));
        assert!(matches!(
            game.play_turn(&mut ScriptedInput::new(['1'])),
            Err(TurnError::GameOver)
        ));
    }

    #[test]
    fn test_rejected_choices_are_asked_again() {
        let rng = GameRng::new(11);
        let roll = next_roll(&rng) as usize;
        let state = GameState::new(
            10,
            [
                Piece::new('A', '1', 0),
                Piece::new('A', '2', roll),
                Piece::new('B', '1', 39),
            ],
        );
        let mut game = Match::from_state(state, vec!['A', 'B'], rng);
        let mut input = ScriptedInput::new("192".chars());

        let report = game.play_turn(&mut input).unwrap();

        assert_eq!(report.moved, Some(PieceName::new('A', '2')));
        assert_eq!(game.state().position_of(PieceName::new('A', '2')), Some(2 * roll));
        assert_eq!(game.state().position_of(PieceName::new('A', '1')), Some(0));
        assert!(matches!(input.rejections()[0], MoveError::KickOwn { .. }));
        assert_eq!(
            input.rejections()[1],
            MoveError::NoSuchPiece(PieceName::new('A', '9'))
        );
        assert_eq!(input.remaining(), 0);
        assert_eq!(game.current_player(), 'B');
    }

    #[test]
    fn test_blocked_turn_passes() {
        let seed = (0..).find(|&s| GameRng::new(s).roll_die() >= 2).unwrap();
        let rng = GameRng::new(seed);
        let roll = next_roll(&rng) as usize;

        // A's pieces form a cycle of step `roll`: every move lands on another A
        let state = GameState::new(
            roll,
            [
                Piece::new('A', '1', 0),
                Piece::new('A', '2', roll),
                Piece::new('A', '3', 2 * roll),
                Piece::new('A', '4', 3 * roll),
                Piece::new('B', '1', 1),
            ],
        );
        let mut game = Match::from_state(state.clone(), vec!['A', 'B'], rng);
        let mut input = ScriptedInput::default();

        let report = game.play_turn(&mut input).unwrap();

        assert_eq!(report.moved, None);
        assert!(report.kicked.is_empty());
        assert_eq!(game.state(), &state);
        assert_eq!(game.current_player(), 'B');
    }

    #[test]
    fn test_turn_skips_eliminated_players() {
        let rng = GameRng::new(21);
        let roll = next_roll(&rng) as usize;
        let state = GameState::new(
            10,
            [
                Piece::new('A', '1', 0),
                Piece::new('B', '1', roll),
                Piece::new('C', '1', 39),
            ],
        );
        let mut game = Match::from_state(state, vec!['A', 'B', 'C'], rng);

        game.play_turn(&mut ScriptedInput::new(['1'])).unwrap();

        assert_eq!(game.state().num_pieces('B'), 0);
        assert_eq!(game.result(), None);
        assert_eq!(game.current_player(), 'C');
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_from_state_starts_with_live_player() {
        let state = GameState::new(2, [Piece::new('B', '1', 0), Piece::new('C', '1', 4)]);
        let game = Match::from_state(state, vec!['A', 'B', 'C'], GameRng::new(1));

        assert_eq!(game.current_player(), 'B');
    }

    #[test]
    fn test_result_draw_and_single_player() {
        let empty = Match::from_state(GameState::new(1, Vec::new()), vec!['A', 'B'], GameRng::new(1));
        assert_eq!(empty.result(), Some(GameResult::Draw));

        let alone = Match::from_state(
            GameState::new(1, [Piece::new('B', '1', 0)]),
            vec!['A', 'B'],
            GameRng::new(1),
        );
        assert_eq!(alone.result(), Some(GameResult::Winner('B')));
    }

    #[test]
    fn test_input_closed_stops_turn() {
        let state = GameState::new(10, [Piece::new('A', '1', 0), Piece::new('B', '1', 20)]);
        let mut game = Match::from_state(state.clone(), vec!['A', 'B'], GameRng::new(8));

        let err = game.play_turn(&mut ScriptedInput::default()).unwrap_err();

        assert!(matches!(err, TurnError::InputClosed));
        assert_eq!(game.state(), &state);
    }
}
