//! Human-readable board rendering.
//!
//! ```text
//! |------|
//! |__b __|
//! |  __  |
//! |__w __|
//! |------|
//! ```
//!
//! Occupied cells print their piece glyph (`b`, `w`, `B`, `W`), empty dark
//! cells print blanks and empty light cells print `__`.

use std::fmt;

use super::grid::Board;

const LIGHT_EMPTY: &str = "__";
const DARK_EMPTY: &str = "  ";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("|{}|", "--".repeat(self.size()));

        writeln!(f, "{border}")?;
        for row in 0..self.size() {
            write!(f, "|")?;
            for col in 0..self.size() {
                let square = crate::core::Square::new(row as i32, col as i32);
                let glyph = match self.get(square).map_err(|_| fmt::Error)?.glyph() {
                    Some(glyph) => glyph,
                    None if square.is_dark() => DARK_EMPTY,
                    None => LIGHT_EMPTY,
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::{CellValue, Square};

    #[test]
    fn test_render_3x3() {
        let board = Board::new(3);
        let expected = "|------|\n\
                        |__b __|\n\
                        |  __  |\n\
                        |__w __|\n\
                        |------|\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_kings() {
        let mut board = Board::empty(2);
        board.set(Square::new(0, 1), CellValue::WhiteKing).unwrap();
        board.set(Square::new(1, 0), CellValue::BlackKing).unwrap();
        assert_eq!(board.to_string(), "|----|\n|__W |\n|B __|\n|----|\n");
    }
}
