//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board side length (default: 8). Must be positive.
    pub board_size: usize,

    /// Consecutive non-capturing moves after which the game is a tie.
    /// `None` uses `board_size * board_size / 2`.
    pub tie_max: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tie_max: None,
        }
    }
}

impl EngineConfig {
    /// Create a config for an N×N board with the default tie ceiling.
    pub fn new(board_size: usize) -> Self {
        Self::default().with_board_size(board_size)
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set an explicit tie ceiling.
    pub fn with_tie_max(mut self, tie_max: usize) -> Self {
        self.tie_max = Some(tie_max);
        self
    }

    /// The tie ceiling actually in effect.
    #[must_use]
    pub fn resolved_tie_max(&self) -> usize {
        self.tie_max
            .unwrap_or(self.board_size * self.board_size / 2)
    }
}
