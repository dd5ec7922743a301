//! Reversible change log.
//!
//! Every applied move opens a frame; every cell write made while applying it
//! records the square and the value it overwrote. Undo replays a frame's
//! writes backwards.

use smallvec::SmallVec;

use crate::core::{CellValue, Square};

/// A single overwritten cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub square: Square,
    pub previous: CellValue,
}

/// All writes made by one move, plus the counter state before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeFrame {
    /// Writes in application order.
    /// A step writes 2 cells, each hop of a capture 3, promotion 1 more.
    pub writes: SmallVec<[CellChange; 8]>,

    /// Repetition counter before the move.
    pub tie_counter: usize,
}

impl ChangeFrame {
    /// Writes in undo order (most recent first).
    pub fn rewind(&self) -> impl Iterator<Item = &CellChange> {
        self.writes.iter().rev()
    }
}

/// Stack of per-move frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeLog {
    frames: Vec<ChangeFrame>,
}

impl ChangeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a frame for a new move.
    pub fn begin(&mut self, tie_counter: usize) {
        self.frames.push(ChangeFrame {
            writes: SmallVec::new(),
            tie_counter,
        });
    }

    /// Record a write into the open frame.
    ///
    /// Writes made with no frame open are not tracked.
    pub fn record(&mut self, square: Square, previous: CellValue) {
        if let Some(frame) = self.frames.last_mut() {
            frame.writes.push(CellChange { square, previous });
        }
    }

    /// Remove the most recent frame.
    pub fn pop(&mut self) -> Option<ChangeFrame> {
        self.frames.pop()
    }

    /// Number of frames (moves that can be undone).
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
