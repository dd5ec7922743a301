//! Engine error type.
//!
//! Every failure the engine reports is local and recoverable: a bad
//! coordinate, a square that cannot move, a move that is not legal in the
//! current position, or a request made after the game ended.

use super::color::Color;
use crate::moves::Move;
use crate::rules::GameStatus;

/// Errors raised by the board, the engine and the move choosers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("square ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },

    #[error("no move from ({row}, {col}): {reason}")]
    WrongMove {
        row: i32,
        col: i32,
        reason: &'static str,
    },

    #[error("move {0} is not legal in the current position")]
    IllegalMove(Move),

    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),

    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Color),

    #[error("not {0:?}'s turn")]
    NotYourTurn(Color),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
