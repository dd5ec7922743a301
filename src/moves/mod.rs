//! Moves: a start square plus the ordered squares a piece visits.
//!
//! The move itself carries no legality; the rules engine produces moves and
//! only accepts the ones it produced.

pub mod chain;

pub use chain::Move;
