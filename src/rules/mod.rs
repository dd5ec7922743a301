//! English draughts rules.
//!
//! - `engine`: the `GameEngine` state machine (enumerate, apply, undo, status)
//! - `search`: per-piece capture-chain and step search
//! - `changelog`: per-move record of overwritten cells for undo
//! - `status`: game status and winner queries

pub mod changelog;
pub mod engine;
pub mod search;
pub mod status;

pub use changelog::{CellChange, ChangeFrame, ChangeLog};
pub use engine::GameEngine;
pub use status::GameStatus;
