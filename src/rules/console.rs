//! Line-oriented seat for a terminal.
//!
//! Prints the board and the roll, then reads one line per choice and takes
//! its first non-blank character as the rank. Generic over the streams so it
//! can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use super::engine::GameResult;
use super::input::{TurnError, TurnInput};
use crate::core::{GameState, MoveError};

/// Prompt shown before each choice.
pub const PROMPT: &str = "Which piece to move? ";

/// Console seat over any reader/writer pair.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_choice(&mut self) -> Result<char, TurnError> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(TurnError::InputClosed);
            }
            if let Some(choice) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(choice);
            }
        }
    }
}

impl<R: BufRead, W: Write> TurnInput for ConsoleInput<R, W> {
    fn announce(&mut self, state: &GameState, player: char, roll: u8) -> Result<(), TurnError> {
        write!(self.writer, "{state}")?;
        writeln!(self.writer, "{player}'s Turn!")?;
        writeln!(self.writer, "Dice: {roll}")?;
        Ok(())
    }

    fn select(&mut self, _state: &GameState, _player: char, _roll: u8) -> Result<char, TurnError> {
        self.read_choice()
    }

    fn rejected(&mut self, error: &MoveError) -> Result<(), TurnError> {
        writeln!(self.writer, "Invalid move: {error}")?;
        Ok(())
    }

    fn passed(&mut self, player: char, roll: u8) -> Result<(), TurnError> {
        writeln!(self.writer, "No piece of {player} can move {roll}. Turn passes.")?;
        Ok(())
    }

    fn finished(&mut self, state: &GameState, result: &GameResult) -> Result<(), TurnError> {
        write!(self.writer, "{state}")?;
        match result {
            GameResult::Winner(player) => {
                writeln!(self.writer, "Congratulations {player}! You have won!")?;
            }
            GameResult::Draw => writeln!(self.writer, "Nobody is left on the board.")?,
        }
        writeln!(self.writer, "{}", "=".repeat(30))?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, PieceName};
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: ConsoleInput<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_select_takes_first_symbol() {
        let state = GameState::new(1, Vec::new());
        let mut console = console("  2x\n");

        assert_eq!(console.select(&state, 'A', 4).unwrap(), '2');
        assert_eq!(output(console), PROMPT);
    }

    #[test]
    fn test_select_skips_blank_lines() {
        let state = GameState::new(1, Vec::new());
        let mut console = console("\n   \n3\n");

        assert_eq!(console.select(&state, 'A', 4).unwrap(), '3');
        assert_eq!(output(console), PROMPT.repeat(3));
    }

    #[test]
    fn test_select_end_of_input() {
        let state = GameState::new(1, Vec::new());
        let mut console = console("");

        assert!(matches!(
            console.select(&state, 'A', 4),
            Err(TurnError::InputClosed)
        ));
    }

    #[test]
    fn test_announce_prints_board_and_roll() {
        let state = GameState::new(1, [Piece::new('A', '1', 0)]);
        let mut console = console("");

        console.announce(&state, 'A', 5).unwrap();

        let text = output(console);
        assert!(text.starts_with(&state.to_string()));
        assert!(text.ends_with("A's Turn!\nDice: 5\n"));
    }

    #[test]
    fn test_rejected_message() {
        let mut console = console("");
        console
            .rejected(&MoveError::NoSuchPiece(PieceName::new('B', '7')))
            .unwrap();

        assert_eq!(output(console), "Invalid move: no such piece B7\n");
    }

    #[test]
    fn test_finished_banner() {
        let state = GameState::new(1, [Piece::new('C', '1', 2)]);
        let mut console = console("");

        console.finished(&state, &GameResult::Winner('C')).unwrap();

        let text = output(console);
        assert!(text.contains("Congratulations C! You have won!\n"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(30))));
    }
}
