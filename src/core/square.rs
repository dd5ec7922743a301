//! Board coordinates and diagonal directions.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate.
///
/// Coordinates are signed so that stepping off the edge of the board yields
/// a square the board rejects as out of range instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The square `distance` steps away along `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * distance,
            col: self.col + dc * distance,
        }
    }

    /// The square halfway between two squares of a jump.
    #[must_use]
    pub const fn midpoint(self, other: Square) -> Self {
        Self {
            row: (self.row + other.row).div_euclid(2),
            col: (self.col + other.col).div_euclid(2),
        }
    }

    /// King-move distance between two squares.
    #[must_use]
    pub fn chebyshev(self, other: Square) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Whether the square sits on a playable (dark) cell.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        self.row.rem_euclid(2) != self.col.rem_euclid(2)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four diagonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All diagonals, in search order.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row, col) delta of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}
