//! Core types: sides, cells, squares, configuration and errors.
//!
//! Everything here is a small value type shared by the board, the move
//! representation and the rules engine.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod square;

pub use cell::CellValue;
pub use color::{Color, SideMap};
pub use config::{EngineConfig, DEFAULT_BOARD_SIZE};
pub use error::{EngineError, Result};
pub use square::{Direction, Square};
