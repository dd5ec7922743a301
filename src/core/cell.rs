//! Cell occupants.
//!
//! A cell's value decides everything the rules need to know about a piece:
//! which side owns it, whether it is promoted, and which diagonals it may
//! travel along.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::square::Direction;

const BLACK_MAN_DIRECTIONS: &[Direction] = &[Direction::DownLeft, Direction::DownRight];
const WHITE_MAN_DIRECTIONS: &[Direction] = &[Direction::UpLeft, Direction::UpRight];
const KING_DIRECTIONS: &[Direction] = &Direction::ALL;

/// Value stored in one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    BlackMan,
    WhiteMan,
    BlackKing,
    WhiteKing,
}

impl CellValue {
    /// Unpromoted piece of a side.
    #[must_use]
    pub const fn man(color: Color) -> Self {
        match color {
            Color::Black => CellValue::BlackMan,
            Color::White => CellValue::WhiteMan,
        }
    }

    /// Promoted piece of a side.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        match color {
            Color::Black => CellValue::BlackKing,
            Color::White => CellValue::WhiteKing,
        }
    }

    /// Owning side, `None` for an empty cell.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            CellValue::Empty => None,
            CellValue::BlackMan | CellValue::BlackKing => Some(Color::Black),
            CellValue::WhiteMan | CellValue::WhiteKing => Some(Color::White),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, CellValue::BlackKing | CellValue::WhiteKing)
    }

    /// Whether the occupant belongs to `color`.
    #[must_use]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// The king value for this occupant's side (kings and empty cells are unchanged).
    #[must_use]
    pub const fn promoted(self) -> Self {
        match self {
            CellValue::BlackMan => CellValue::BlackKing,
            CellValue::WhiteMan => CellValue::WhiteKing,
            other => other,
        }
    }

    /// Diagonals this occupant may step and jump along.
    ///
    /// Men only go forward; kings use all four diagonals.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            CellValue::Empty => &[],
            CellValue::BlackMan => BLACK_MAN_DIRECTIONS,
            CellValue::WhiteMan => WHITE_MAN_DIRECTIONS,
            CellValue::BlackKing | CellValue::WhiteKing => KING_DIRECTIONS,
        }
    }

    /// Two-character glyph used in board rendering (occupied cells only).
    #[must_use]
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            CellValue::Empty => None,
            CellValue::BlackMan => Some("b "),
            CellValue::WhiteMan => Some("w "),
            CellValue::BlackKing => Some("B "),
            CellValue::WhiteKing => Some("W "),
        }
    }
}
