//! N×N cell storage.

use serde::{Deserialize, Serialize};

use crate::core::{CellValue, Color, EngineError, Result, Square};

/// Square grid of cell values, stored row-major.
///
/// The side length is fixed per instance at construction. Every access is
/// bounds-checked; occupant legality is left to the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellValue>,
}

impl Board {
    /// Create a board in the starting layout.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut board = Self::empty(size);
        board.fill_initial();
        board
    }

    /// Create a board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        assert!(size <= i32::MAX as usize, "Board size must fit in a coordinate");

        Self {
            size,
            cells: vec![CellValue::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a square lies on the board.
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        let size = self.size as i32;
        (0..size).contains(&square.row) && (0..size).contains(&square.col)
    }

    fn index(&self, square: Square) -> Result<usize> {
        if !self.contains(square) {
            return Err(EngineError::OutOfRange {
                row: square.row,
                col: square.col,
                size: self.size,
            });
        }
        Ok(square.row as usize * self.size + square.col as usize)
    }

    /// Read a cell.
    pub fn get(&self, square: Square) -> Result<CellValue> {
        let idx = self.index(square)?;
        Ok(self.cells[idx])
    }

    /// Write a cell.
    pub fn set(&mut self, square: Square, value: CellValue) -> Result<()> {
        let idx = self.index(square)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Write a cell and return the value it held.
    pub fn replace(&mut self, square: Square, value: CellValue) -> Result<CellValue> {
        let idx = self.index(square)?;
        Ok(std::mem::replace(&mut self.cells[idx], value))
    }

    /// Iterate over every square, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
    }

    /// Iterate over (square, value) pairs of occupied cells, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, CellValue)> + '_ {
        self.squares()
            .zip(self.cells.iter().copied())
            .filter(|(_, value)| !value.is_empty())
    }

    /// Number of pieces (men and kings) owned by a side.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| cell.belongs_to(color)).count()
    }

    /// Rows at the top of the board that start filled with Black men.
    #[must_use]
    pub fn home_rows(&self) -> usize {
        (self.size / 2 + self.size % 2).saturating_sub(1)
    }

    /// Fill the starting layout.
    ///
    /// Dark squares of the top `home_rows()` rows get Black men, dark squares
    /// from row `size / 2 + 1` down get White men, everything else is
    /// cleared. For odd sizes the middle row stays empty.
    pub fn fill_initial(&mut self) {
        let black_rows = self.home_rows() as i32;
        let white_from = (self.size / 2 + 1) as i32;

        for square in self.squares().collect::<Vec<_>>() {
            let value = if !square.is_dark() {
                CellValue::Empty
            } else if square.row < black_rows {
                CellValue::BlackMan
            } else if square.row >= white_from {
                CellValue::WhiteMan
            } else {
                CellValue::Empty
            };
            let idx = square.row as usize * self.size + square.col as usize;
            self.cells[idx] = value;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cell() {
        let board = Board::new(3);
        assert_eq!(board.get(Square::new(0, 1)), Ok(CellValue::BlackMan));
        assert_eq!(board.get(Square::new(0, 0)), Ok(CellValue::Empty));
        assert_eq!(board.get(Square::new(2, 1)), Ok(CellValue::WhiteMan));
        assert_eq!(
            board.get(Square::new(3, 1)),
            Err(EngineError::OutOfRange { row: 3, col: 1, size: 3 })
        );
        assert!(board.get(Square::new(-1, 0)).is_err());
    }

    #[test]
    fn test_set_cell() {
        let mut board = Board::new(6);
        board.set(Square::new(3, 2), CellValue::BlackKing).unwrap();
        assert_eq!(board.get(Square::new(3, 2)), Ok(CellValue::BlackKing));
        assert!(matches!(
            board.set(Square::new(7, 11), CellValue::Empty),
            Err(EngineError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_replace_cell() {
        let mut board = Board::new(4);
        assert_eq!(
            board.replace(Square::new(0, 1), CellValue::WhiteKing),
            Ok(CellValue::BlackMan)
        );
        assert_eq!(board.get(Square::new(0, 1)), Ok(CellValue::WhiteKing));
        assert!(board.replace(Square::new(4, 0), CellValue::Empty).is_err());
    }

    #[test]
    fn test_initial_counts() {
        for (size, expected) in [(1, 0), (2, 0), (3, 1), (4, 2), (5, 5), (6, 6), (8, 12), (10, 20)] {
            let board = Board::new(size);
            assert_eq!(board.count(Color::Black), expected, "black on {size}x{size}");
            assert_eq!(board.count(Color::White), expected, "white on {size}x{size}");
        }
    }

    #[test]
    fn test_initial_layout_8x8() {
        let board = Board::new(8);
        for (square, value) in board.pieces() {
            assert!(square.is_dark(), "{square} holds {value:?} on a light cell");
            match value {
                CellValue::BlackMan => assert!(square.row < 3),
                CellValue::WhiteMan => assert!(square.row >= 5),
                other => panic!("unexpected {other:?} at {square}"),
            }
        }
    }

    #[test]
    fn test_odd_board_middle_row_empty() {
        let board = Board::new(7);
        for col in 0..7 {
            assert_eq!(board.get(Square::new(3, col)), Ok(CellValue::Empty));
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(5);
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.size(), 5);
    }

    #[test]
    #[should_panic(expected = "Board size must be positive")]
    fn test_zero_size() {
        let _ = Board::empty(0);
    }
}
