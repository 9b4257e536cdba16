//! Track geometry: where each track position lands on the text grid.
//!
//! The grid is a square of `1 + (S + 1) * 2 + 1` cells for a side of `S`
//! steps. Pieces walk a ring just inside the outer frame, two cells per step,
//! counter-clockwise from the top-left corner:
//!
//! ```text
//!  side 4 (leftwards)
//! +-<---------------+
//! | p=0            ^|
//! v side 1         || side 3 (upwards)
//! | (downwards)    ||
//! +--------------->-+
//!  side 2 (rightwards)
//! ```

/// Offset of the inner frame from the grid edge.
pub const INNER_FRAME_OFFSET: usize = 3;

/// Geometry of the board for one track length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    side: usize,
    edge: usize,
}

impl BoardLayout {
    /// Layout for a track of `track_length` positions (a multiple of 4).
    #[must_use]
    pub const fn new(track_length: usize) -> Self {
        let side = track_length / 4;
        Self {
            side,
            edge: 1 + (side + 1) * 2 + 1,
        }
    }

    /// Steps per side of the square.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Width and height of the grid in cells.
    #[must_use]
    pub const fn edge(&self) -> usize {
        self.edge
    }

    /// Check if a cell belongs to the outer or inner frame.
    #[must_use]
    pub fn is_frame(&self, x: usize, y: usize) -> bool {
        let last = self.edge - 1;
        if x == 0 || y == 0 || x == last || y == last {
            return true;
        }

        let inner = INNER_FRAME_OFFSET..self.edge - INNER_FRAME_OFFSET;
        let near = INNER_FRAME_OFFSET;
        let far = self.edge - INNER_FRAME_OFFSET - 1;
        (inner.contains(&x) && (y == near || y == far))
            || (inner.contains(&y) && (x == near || x == far))
    }

    /// Top-left cell `(x, y)` of the 2x2 block for a track position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is off the track. The board model never
    /// produces such a position.
    #[must_use]
    pub fn cell(&self, position: usize) -> (usize, usize) {
        let side = self.side;
        let far = self.edge - 3;

        match position / side {
            0 => (1, 1 + position * 2),
            1 => (1 + (position - side) * 2, far),
            2 => (far, far - (position - 2 * side) * 2),
            3 => (far - (position - 3 * side) * 2, 1),
            _ => unreachable!("position {position} is off a track of {}", side * 4),
        }
    }
}
