//! Move choosers and the match driver.
//!
//! The rules engine never picks moves. Choosers sit on top of it:
//! - `MoveChooser`: the trait a side implements to pick its moves
//! - `RandomChooser`: uniform random choice from the legal moves
//! - `play_match`: drives two choosers through one game

pub mod arena;
pub mod random;

pub use arena::{play_match, MatchConfig, MatchRecord};
pub use random::RandomChooser;

use crate::core::{Color, Result};
use crate::moves::Move;

/// A player for one side.
///
/// Choosers keep their own view of the game. Each call passes the move the
/// opponent just made (if any) so the chooser can catch up before picking
/// its own move, which it is expected to commit to its own view as well.
pub trait MoveChooser {
    /// The side this chooser plays.
    fn color(&self) -> Color;

    /// Pick the next move.
    fn choose(&mut self, opponent_move: Option<&Move>) -> Result<Move>;
}
