//! Move representation: a start square and the squares visited from it.
//!
//! A simple step visits one diagonally adjacent square. A capture visits one
//! landing square per jump, in order; the captured pieces are the midpoints
//! between consecutive squares and are not stored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Square;

/// One move for a single piece.
///
/// ## Example
///
/// ```
/// use rust_draughts::core::Square;
/// use rust_draughts::moves::Move;
///
/// let mut mv = Move::new(Square::new(5, 0));
/// mv.add(Square::new(3, 2));
/// mv.add(Square::new(1, 4));
///
/// assert!(mv.is_capture());
/// assert_eq!(mv.destination(), Some(Square::new(1, 4)));
/// assert_eq!(mv.iter().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Square,

    /// Visited squares in order.
    /// SmallVec keeps chains of up to 4 hops off the heap.
    steps: SmallVec<[Square; 4]>,
}

impl Move {
    /// Create a move with no steps yet.
    #[must_use]
    pub fn new(start: Square) -> Self {
        Self {
            start,
            steps: SmallVec::new(),
        }
    }

    /// Create a move with the given steps.
    #[must_use]
    pub fn with_steps(start: Square, steps: &[Square]) -> Self {
        Self {
            start,
            steps: SmallVec::from_slice(steps),
        }
    }

    /// Append a step to the end of the chain.
    pub fn add(&mut self, step: Square) {
        self.steps.push(step);
    }

    /// Square the moving piece starts on.
    #[must_use]
    pub fn start(&self) -> Square {
        self.start
    }

    /// Visited squares, in order.
    #[must_use]
    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    /// Fresh iterator over the visited squares.
    ///
    /// Each call starts from the first step; iterating never changes the move.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps.iter().copied()
    }

    /// Iterate over (from, to) pairs of every hop, starting at `start`.
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        std::iter::once(self.start)
            .chain(self.iter())
            .zip(self.iter())
    }

    /// Final square of the moving piece.
    #[must_use]
    pub fn destination(&self) -> Option<Square> {
        self.steps.last().copied()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// One step to a diagonally adjacent square.
    #[must_use]
    pub fn is_simple_step(&self) -> bool {
        match self.steps.as_slice() {
            [only] => only.chebyshev(self.start) == 1,
            _ => false,
        }
    }

    /// Anything that is not a simple step.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.steps.is_empty() && !self.is_simple_step()
    }
}

impl<'a> IntoIterator for &'a Move {
    type Item = Square;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter().copied()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)?;
        for step in self {
            write!(f, " -> {step}")?;
        }
        Ok(())
    }
}
