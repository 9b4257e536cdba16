//! Text canvas for drawing a game state.

use crate::core::{GameState, Piece};

use super::layout::BoardLayout;

/// Glyph for frame cells.
pub const FRAME_GLYPH: char = '#';
/// Glyph for empty cells.
pub const BLANK_GLYPH: char = ' ';
/// Glyph joining a piece's owner and rank symbols.
pub const CONNECTOR_GLYPH: char = '\\';

/// Square character grid, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    layout: BoardLayout,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Empty board with both frames drawn.
    #[must_use]
    pub fn framed(layout: BoardLayout) -> Self {
        let edge = layout.edge();
        let cells = (0..edge)
            .map(|y| {
                (0..edge)
                    .map(|x| if layout.is_frame(x, y) { FRAME_GLYPH } else { BLANK_GLYPH })
                    .collect()
            })
            .collect();

        Self { layout, cells }
    }

    /// Character at `(x, y)`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y)?.get(x).copied()
    }

    /// Draw a piece as a 2x2 block at its track cell.
    ///
    /// ```text
    /// A\
    /// \1
    /// ```
    pub fn draw_piece(&mut self, piece: &Piece) {
        let (x, y) = self.layout.cell(piece.position);

        self.cells[y][x] = piece.player();
        self.cells[y][x + 1] = CONNECTOR_GLYPH;
        self.cells[y + 1][x] = CONNECTOR_GLYPH;
        self.cells[y + 1][x + 1] = piece.rank();
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Draw `state` onto a fresh grid, pieces in board order.
#[must_use]
pub fn draw(state: &GameState) -> Grid {
    let mut grid = Grid::framed(BoardLayout::new(state.track_length()));
    for piece in state.pieces() {
        grid.draw_piece(piece);
    }
    grid
}

/// Render `state` as newline-terminated rows.
#[must_use]
pub fn render(state: &GameState) -> String {
    draw(state).to_string()
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", draw(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let state = GameState::new(2, Vec::new());

        let expected = [
            "########",
            "#      #",
            "#      #",
            "#  ##  #",
            "#  ##  #",
            "#      #",
            "#      #",
            "########",
        ]
        .map(|row| format!("{row}\n"))
        .concat();

        assert_eq!(render(&state), expected);
    }

    #[test]
    fn test_full_small_board() {
        let state = GameState::new(
            1,
            [
                Piece::new('A', '1', 0),
                Piece::new('B', '2', 1),
                Piece::new('C', '3', 2),
                Piece::new('D', '4', 3),
            ],
        );

        let expected = concat!(
            "######\n",
            "#A\\D\\#\n",
            "#\\1\\4#\n",
            "#B\\C\\#\n",
            "#\\2\\3#\n",
            "######\n",
        );

        assert_eq!(render(&state), expected);
    }

    #[test]
    fn test_piece_block() {
        let state = GameState::new(8, [Piece::new('C', '8', 8)]);
        let grid = draw(&state);

        // Position 8 is the first cell of the bottom row
        assert_eq!(grid.get(1, 17), Some('C'));
        assert_eq!(grid.get(2, 17), Some('\\'));
        assert_eq!(grid.get(1, 18), Some('\\'));
        assert_eq!(grid.get(2, 18), Some('8'));
        assert_eq!(grid.get(20, 0), None);
    }

    #[test]
    fn test_display_matches_render() {
        let state = GameState::new(3, [Piece::new('A', '1', 5), Piece::new('B', '1', 11)]);
        assert_eq!(state.to_string(), render(&state));
    }

    #[test]
    fn test_rows_are_square() {
        let state = GameState::new(10, [Piece::new('A', '1', 39)]);
        let rendered = render(&state);

        let rows: Vec<_> = rendered.lines().collect();
        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|r| r.chars().count() == 24));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_later_piece_overwrites() {
        let state = GameState::new(1, [Piece::new('A', '1', 0), Piece::new('B', '2', 0)]);
        let grid = draw(&state);

        assert_eq!(grid.get(1, 1), Some('B'));
        assert_eq!(grid.get(2, 2), Some('2'));
    }
}
