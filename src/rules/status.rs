//! Game status.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Where the game stands after the last applied move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    #[default]
    Unfinished,
    /// The repetition ceiling was reached.
    Tie,
    BlackWon,
    WhiteWon,
}

impl GameStatus {
    /// Status for a win by `color`.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::Black => GameStatus::BlackWon,
            Color::White => GameStatus::WhiteWon,
        }
    }

    /// Check if no more moves may be applied.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::BlackWon => Some(Color::Black),
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::Unfinished | GameStatus::Tie => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self.winner() == Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_winner() {
        let status = GameStatus::won_by(Color::White);
        assert_eq!(status, GameStatus::WhiteWon);
        assert!(status.is_winner(Color::White));
        assert!(!status.is_winner(Color::Black));

        assert!(!GameStatus::Tie.is_winner(Color::Black));
        assert!(!GameStatus::Tie.is_winner(Color::White));
        assert_eq!(GameStatus::Unfinished.winner(), None);
    }

    #[test]
    fn test_status_is_terminal() {
        assert!(!GameStatus::Unfinished.is_terminal());
        assert!(GameStatus::Tie.is_terminal());
        assert!(GameStatus::BlackWon.is_terminal());
        assert!(GameStatus::WhiteWon.is_terminal());
    }
}
