//! # rust-draughts
//!
//! An English draughts (checkers) rules engine.
//!
//! ## Design Principles
//!
//! 1. **Rules, not play**: The engine enumerates, applies and takes back
//!    moves and reports the game status. Choosing moves is left to
//!    `MoveChooser` implementations layered on top.
//!
//! 2. **Forced capture**: Whenever any piece of the side to move can capture,
//!    only capture chains are legal. Chains are found by a depth-first search
//!    that never re-captures a piece and never doubles straight back.
//!
//! 3. **Exact undo**: Every cell write is logged per move, so `undo` restores
//!    the board, piece counts, repetition counter and side to move.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, squares, configuration, errors
//! - `board`: Bounds-checked N×N board with the starting layout
//! - `moves`: Move representation
//! - `rules`: `GameEngine`, capture search, change log, game status
//! - `players`: Move choosers and the match driver

pub mod core;
pub mod board;
pub mod moves;
pub mod rules;
pub mod players;

// Re-export commonly used types
pub use crate::core::{
    CellValue, Color, SideMap,
    Square, Direction,
    EngineConfig, DEFAULT_BOARD_SIZE,
    EngineError, Result,
};

pub use crate::board::Board;

pub use crate::moves::Move;

pub use crate::rules::{GameEngine, GameStatus};

pub use crate::players::{
    MoveChooser, RandomChooser,
    play_match, MatchConfig, MatchRecord,
};
