//! The draughts board: bounds-checked cell storage, the starting layout
//! and a glyph rendering for diagnostics.

pub mod grid;
mod render;

pub use grid::Board;
