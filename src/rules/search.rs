//! Move search for a single piece.
//!
//! ## Capture chains
//!
//! Depth-first search over jumps. From each landing square the piece may
//! jump again along any of its directions except straight back the way it
//! came. Captured squares go into a bet set for the chain in progress: they
//! are added before descending and removed on backtrack, so sibling branches
//! never see each other's captures. Every chain that cannot be extended any
//! further becomes one move.
//!
//! The search only reads the board. The moving piece is treated as absent
//! from its start square, since it has left it once the first jump is made.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{CellValue, Color, Direction, Square};
use crate::moves::Move;

/// Capture search state for one piece.
struct ChainSearch<'a> {
    board: &'a Board,
    origin: Square,
    opponent: Color,
    directions: &'static [Direction],
}

impl<'a> ChainSearch<'a> {
    /// Landing square of a jump from `from` along `dir`, if the jump is legal.
    fn jump(&self, from: Square, dir: Direction, bet: &FxHashSet<Square>) -> Option<Square> {
        let captured = from.offset(dir, 1);
        let victim = self.board.get(captured).ok()?;
        if !victim.belongs_to(self.opponent) || bet.contains(&captured) {
            return None;
        }

        let landing = from.offset(dir, 2);
        let target = self.board.get(landing).ok()?;
        (target.is_empty() || landing == self.origin).then_some(landing)
    }

    /// Extend the chain ending at `from`. Returns whether any jump was found.
    fn extend(
        &self,
        from: Square,
        came_from: Option<Direction>,
        bet: &mut FxHashSet<Square>,
        path: &mut SmallVec<[Square; 8]>,
        out: &mut Vec<Move>,
    ) -> bool {
        let mut extended = false;

        for &dir in self.directions {
            if came_from == Some(dir) {
                continue;
            }
            let Some(landing) = self.jump(from, dir, bet) else {
                continue;
            };
            extended = true;

            let captured = from.offset(dir, 1);
            bet.insert(captured);
            path.push(landing);

            if !self.extend(landing, Some(dir.reverse()), bet, path, out) {
                out.push(Move::with_steps(self.origin, path.as_slice()));
            }

            path.pop();
            bet.remove(&captured);
        }

        extended
    }
}

/// All maximal capture chains for the piece on `origin`.
///
/// Returns nothing for empty or off-board squares.
pub fn capture_moves(board: &Board, origin: Square) -> Vec<Move> {
    let piece = board.get(origin).unwrap_or(CellValue::Empty);
    let Some(color) = piece.color() else {
        return Vec::new();
    };

    let search = ChainSearch {
        board,
        origin,
        opponent: color.opponent(),
        directions: piece.directions(),
    };

    let mut out = Vec::new();
    let mut bet = FxHashSet::default();
    let mut path = SmallVec::new();
    search.extend(origin, None, &mut bet, &mut path, &mut out);

    log::trace!("{} capture chain(s) from {}", out.len(), origin);
    out
}

/// Non-capturing single steps for the piece on `origin`.
pub fn step_moves(board: &Board, origin: Square) -> Vec<Move> {
    let piece = board.get(origin).unwrap_or(CellValue::Empty);

    piece
        .directions()
        .iter()
        .map(|&dir| origin.offset(dir, 1))
        .filter(|&target| board.get(target) == Ok(CellValue::Empty))
        .map(|target| Move::with_steps(origin, &[target]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, pieces: &[((i32, i32), CellValue)]) -> Board {
        let mut board = Board::empty(size);
        for &((row, col), value) in pieces {
            board.set(Square::new(row, col), value).unwrap();
        }
        board
    }

    #[test]
    fn test_single_jump() {
        let board = board_with(
            8,
            &[((2, 1), CellValue::BlackMan), ((3, 2), CellValue::WhiteMan)],
        );

        let moves = capture_moves(&board, Square::new(2, 1));
        assert_eq!(moves, vec![Move::with_steps(Square::new(2, 1), &[Square::new(4, 3)])]);
    }

    #[test]
    fn test_jump_needs_empty_landing() {
        let board = board_with(
            8,
            &[
                ((2, 1), CellValue::BlackMan),
                ((3, 2), CellValue::WhiteMan),
                ((4, 3), CellValue::WhiteMan),
            ],
        );
        assert!(capture_moves(&board, Square::new(2, 1)).is_empty());
    }

    #[test]
    fn test_no_jump_off_board() {
        let board = board_with(
            4,
            &[((2, 1), CellValue::BlackMan), ((3, 2), CellValue::WhiteMan)],
        );
        assert!(capture_moves(&board, Square::new(2, 1)).is_empty());
    }

    #[test]
    fn test_no_jump_over_own_piece() {
        let board = board_with(
            8,
            &[((2, 1), CellValue::BlackMan), ((3, 2), CellValue::BlackKing)],
        );
        assert!(capture_moves(&board, Square::new(2, 1)).is_empty());
    }

    #[test]
    fn test_men_do_not_capture_backwards() {
        let board = board_with(
            8,
            &[((4, 3), CellValue::BlackMan), ((3, 2), CellValue::WhiteMan)],
        );
        assert!(capture_moves(&board, Square::new(4, 3)).is_empty());

        let mut crowned = board.clone();
        crowned.set(Square::new(4, 3), CellValue::BlackKing).unwrap();
        assert_eq!(
            capture_moves(&crowned, Square::new(4, 3)),
            vec![Move::with_steps(Square::new(4, 3), &[Square::new(2, 1)])]
        );
    }

    #[test]
    fn test_double_jump_zigzag() {
        let board = board_with(
            8,
            &[
                ((0, 1), CellValue::BlackMan),
                ((1, 2), CellValue::WhiteMan),
                ((3, 2), CellValue::WhiteMan),
            ],
        );

        let moves = capture_moves(&board, Square::new(0, 1));
        assert_eq!(
            moves,
            vec![Move::with_steps(
                Square::new(0, 1),
                &[Square::new(2, 3), Square::new(4, 1)]
            )]
        );
    }

    #[test]
    fn test_branching_chains() {
        // Two continuations from the first landing square.
        let board = board_with(
            8,
            &[
                ((0, 3), CellValue::BlackMan),
                ((1, 4), CellValue::WhiteMan),
                ((3, 4), CellValue::WhiteMan),
                ((3, 6), CellValue::WhiteMan),
            ],
        );

        let moves = capture_moves(&board, Square::new(0, 3));
        assert_eq!(
            moves,
            vec![
                Move::with_steps(Square::new(0, 3), &[Square::new(2, 5), Square::new(4, 3)]),
                Move::with_steps(Square::new(0, 3), &[Square::new(2, 5), Square::new(4, 7)]),
            ]
        );
    }

    #[test]
    fn test_king_single_capture_has_no_way_back() {
        let board = board_with(
            8,
            &[((4, 1), CellValue::BlackKing), ((3, 2), CellValue::WhiteMan)],
        );

        let moves = capture_moves(&board, Square::new(4, 1));
        assert_eq!(moves, vec![Move::with_steps(Square::new(4, 1), &[Square::new(2, 3)])]);
    }

    #[test]
    fn test_king_returns_through_origin() {
        // A square loop of four captures ends back on the start square.
        let board = board_with(
            8,
            &[
                ((4, 1), CellValue::BlackKing),
                ((3, 2), CellValue::WhiteMan),
                ((3, 4), CellValue::WhiteMan),
                ((5, 2), CellValue::WhiteMan),
                ((5, 4), CellValue::WhiteMan),
            ],
        );

        let moves = capture_moves(&board, Square::new(4, 1));
        let loop_move = Move::with_steps(
            Square::new(4, 1),
            &[Square::new(2, 3), Square::new(4, 5), Square::new(6, 3), Square::new(4, 1)],
        );
        assert!(moves.contains(&loop_move));

        for mv in &moves {
            let captured: Vec<_> = mv.hops().map(|(from, to)| from.midpoint(to)).collect();
            let unique: FxHashSet<_> = captured.iter().copied().collect();
            assert_eq!(unique.len(), captured.len(), "{mv} captures a piece twice");
        }
    }

    #[test]
    fn test_step_moves() {
        let board = board_with(
            4,
            &[((0, 1), CellValue::BlackMan), ((1, 2), CellValue::WhiteMan)],
        );
        assert_eq!(
            step_moves(&board, Square::new(0, 1)),
            vec![Move::with_steps(Square::new(0, 1), &[Square::new(1, 0)])]
        );
        assert!(step_moves(&board, Square::new(0, 0)).is_empty());
        assert!(step_moves(&board, Square::new(9, 9)).is_empty());
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = board_with(
            8,
            &[
                ((4, 1), CellValue::BlackKing),
                ((3, 2), CellValue::WhiteMan),
                ((3, 4), CellValue::WhiteMan),
            ],
        );
        let before = board.clone();
        let first = capture_moves(&board, Square::new(4, 1));
        let second = capture_moves(&board, Square::new(4, 1));
        assert_eq!(board, before);
        assert_eq!(first, second);
    }
}
