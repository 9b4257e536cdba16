//! Text rendering of the square track.
//!
//! - `layout`: track geometry and the position-to-cell mapping
//! - `grid`: the character canvas, frame and piece glyphs
//!
//! `GameState` implements `Display` through this module, so printing a state
//! prints the board.

pub mod grid;
pub mod layout;

pub use grid::{draw, render, Grid, BLANK_GLYPH, CONNECTOR_GLYPH, FRAME_GLYPH};
pub use layout::BoardLayout;
