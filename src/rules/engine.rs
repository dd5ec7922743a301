//! The draughts rules engine.
//!
//! `GameEngine` owns the board and everything needed to play on it:
//! - legal-move enumeration with the forced-capture rule
//! - move application with promotion and a reversible change log
//! - undo
//! - tie and win detection

use crate::board::Board;
use crate::core::{CellValue, Color, EngineConfig, EngineError, Result, SideMap, Square};
use crate::moves::Move;

use super::changelog::ChangeLog;
use super::search;
use super::status::GameStatus;

/// English draughts game in progress.
///
/// ## Example
///
/// ```
/// use rust_draughts::{Color, GameEngine, GameStatus};
///
/// let mut game = GameEngine::new(8);
/// let moves = game.get_all_moves();
/// assert_eq!(moves.len(), 7);
///
/// game.make_move(&moves[0]).unwrap();
/// assert_eq!(game.turn(), Color::White);
/// assert_eq!(game.status(), GameStatus::Unfinished);
///
/// game.undo();
/// assert_eq!(game.turn(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    turn: Color,
    status: GameStatus,
    counts: SideMap<usize>,
    tie_counter: usize,
    tie_max: usize,
    log: ChangeLog,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl GameEngine {
    /// Create a game on an N×N board in the starting layout.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_config(EngineConfig::new(size))
    }

    /// Create a game from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.board_size` is 0.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let board = Board::new(config.board_size);
        Self::from_board_with_config(board, Color::Black, config)
    }

    /// Start from an arbitrary position with the default tie ceiling.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        let config = EngineConfig::new(board.size());
        Self::from_board_with_config(board, turn, config)
    }

    /// Start from an arbitrary position.
    ///
    /// Occupant counts are taken from the board. The status starts as
    /// `Unfinished`, as for a fresh game; the config's board size is
    /// replaced by the board's own.
    #[must_use]
    pub fn from_board_with_config(board: Board, turn: Color, config: EngineConfig) -> Self {
        let config = config.with_board_size(board.size());
        let counts = SideMap::new(|color| board.count(color));
        let tie_max = config.resolved_tie_max();

        Self {
            config,
            board,
            turn,
            status: GameStatus::Unfinished,
            counts,
            tie_counter: 0,
            tie_max,
            log: ChangeLog::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read one cell.
    pub fn cell(&self, square: Square) -> Result<CellValue> {
        self.board.get(square)
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The side that is not to move.
    #[must_use]
    pub fn opponent(&self) -> Color {
        self.turn.opponent()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Pieces (men and kings) a side has on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.counts[color]
    }

    #[must_use]
    pub fn black_count(&self) -> usize {
        self.counts[Color::Black]
    }

    #[must_use]
    pub fn white_count(&self) -> usize {
        self.counts[Color::White]
    }

    /// Moves since the last capture.
    #[must_use]
    pub fn tie_counter(&self) -> usize {
        self.tie_counter
    }

    /// Moves without a capture that end the game in a tie.
    #[must_use]
    pub fn tie_max(&self) -> usize {
        self.tie_max
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.log.len()
    }

    // === Move Enumeration ===

    /// All legal moves for the side to move.
    ///
    /// If any piece can capture, only capture chains are returned; otherwise
    /// every simple step. Squares are scanned row by row.
    #[must_use]
    pub fn get_all_moves(&self) -> Vec<Move> {
        let own: Vec<Square> = self
            .board
            .pieces()
            .filter(|(_, value)| value.belongs_to(self.turn))
            .map(|(square, _)| square)
            .collect();

        let captures: Vec<Move> = own
            .iter()
            .flat_map(|&square| search::capture_moves(&self.board, square))
            .collect();
        if !captures.is_empty() {
            return captures;
        }

        own.iter()
            .flat_map(|&square| search::step_moves(&self.board, square))
            .collect()
    }

    /// Moves of the piece on one square.
    ///
    /// Capture chains if the piece has any, otherwise its steps. The global
    /// forced-capture rule is applied by `get_all_moves` only.
    ///
    /// Fails with `WrongMove` if the square is off the board or does not hold
    /// a piece of the side to move.
    pub fn moves_from(&self, square: Square) -> Result<Vec<Move>> {
        self.check_movable(square)?;

        let captures = search::capture_moves(&self.board, square);
        if !captures.is_empty() {
            return Ok(captures);
        }
        Ok(search::step_moves(&self.board, square))
    }

    fn check_movable(&self, square: Square) -> Result<()> {
        let wrong = |reason: &'static str| EngineError::WrongMove {
            row: square.row,
            col: square.col,
            reason,
        };

        let value = self
            .board
            .get(square)
            .map_err(|_| wrong("square is off the board"))?;
        if !value.belongs_to(self.turn) {
            return Err(wrong("square does not hold a piece of the side to move"));
        }
        Ok(())
    }

    // === Move Application ===

    /// Apply a legal move and pass the turn.
    ///
    /// The move must be one of `get_all_moves()`. Fails without touching the
    /// position with `GameOver` if the game has ended, or `IllegalMove` if the
    /// move is not legal here.
    pub fn make_move(&mut self, mv: &Move) -> Result<()> {
        self.ensure_unfinished()?;
        if !self.get_all_moves().contains(mv) {
            return Err(EngineError::IllegalMove(mv.clone()));
        }
        self.apply(mv)
    }

    /// Apply a move taken from the latest `get_all_moves()` without
    /// re-validating it.
    ///
    /// Moves that cannot be written in full (off-board squares, hops that are
    /// not diagonal steps or jumps) fail with `IllegalMove` and leave the
    /// position untouched. Any other move outside the legal set leaves the
    /// position unspecified.
    pub fn make_move_unchecked(&mut self, mv: &Move) -> Result<()> {
        self.ensure_unfinished()?;
        self.apply(mv)
    }

    fn ensure_unfinished(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver(self.status));
        }
        Ok(())
    }

    /// Reject moves that cannot be written to the board in full.
    ///
    /// Every square must be on the board and every hop a diagonal step (for a
    /// single-step move) or a diagonal jump. Once this passes, none of the
    /// writes in `apply` can fail.
    fn check_shape(&self, mv: &Move) -> Result<()> {
        let illegal = || EngineError::IllegalMove(mv.clone());

        if mv.is_empty() || !self.board.contains(mv.start()) {
            return Err(illegal());
        }
        let single = mv.len() == 1;
        for (from, to) in mv.hops() {
            let (dr, dc) = ((to.row - from.row).abs(), (to.col - from.col).abs());
            let diagonal = dr == dc && (dr == 2 || (single && dr == 1));
            if !diagonal || !self.board.contains(to) {
                return Err(illegal());
            }
        }
        Ok(())
    }

    fn apply(&mut self, mv: &Move) -> Result<()> {
        self.check_shape(mv)?;
        let Some(destination) = mv.destination() else {
            return Err(EngineError::IllegalMove(mv.clone()));
        };

        let piece = self.board.get(mv.start())?;

        self.log.begin(self.tie_counter);
        self.tie_counter += 1;

        if mv.is_simple_step() {
            self.write(destination, piece)?;
            self.write(mv.start(), CellValue::Empty)?;
        } else {
            for (from, to) in mv.hops() {
                self.write(from.midpoint(to), CellValue::Empty)?;
                self.write(from, CellValue::Empty)?;
                self.write(to, piece)?;
            }
            self.tie_counter = 0;
        }

        let last_row = self.board.size() as i32 - 1;
        let promotes = match self.turn {
            Color::Black => destination.row == last_row,
            Color::White => destination.row == 0,
        };
        if promotes {
            self.write(destination, CellValue::king(self.turn))?;
        }

        log::debug!(
            "{} plays {} (black {}, white {}, tie counter {})",
            self.turn,
            mv,
            self.black_count(),
            self.white_count(),
            self.tie_counter
        );

        self.turn = self.turn.opponent();
        self.refresh_status();
        Ok(())
    }

    /// Logged, counted cell write.
    fn write(&mut self, square: Square, value: CellValue) -> Result<()> {
        let previous = self.board.replace(square, value)?;
        self.log.record(square, previous);
        self.recount(previous, value);
        Ok(())
    }

    fn recount(&mut self, removed: CellValue, placed: CellValue) {
        if let Some(color) = removed.color() {
            self.counts[color] -= 1;
        }
        if let Some(color) = placed.color() {
            self.counts[color] += 1;
        }
    }

    fn refresh_status(&mut self) {
        self.status = if self.tie_counter >= self.tie_max {
            GameStatus::Tie
        } else if self.get_all_moves().is_empty() {
            GameStatus::won_by(self.turn.opponent())
        } else {
            GameStatus::Unfinished
        };

        if self.status.is_terminal() {
            log::info!(
                "game over: {:?} (black {}, white {})",
                self.status,
                self.black_count(),
                self.white_count()
            );
        }
    }

    // === Undo ===

    /// Take back the last applied move.
    ///
    /// Restores the cells, counts, repetition counter and side to move, and
    /// resets the status to `Unfinished`. Returns `false` (and does nothing)
    /// when there is no move to take back.
    pub fn undo(&mut self) -> bool {
        let Some(frame) = self.log.pop() else {
            return false;
        };

        for change in frame.rewind() {
            // Every logged square was on the board when it was written.
            if let Ok(current) = self.board.replace(change.square, change.previous) {
                self.recount(current, change.previous);
            }
        }

        self.tie_counter = frame.tie_counter;
        self.turn = self.turn.opponent();
        self.status = GameStatus::Unfinished;

        log::debug!("{} move taken back", self.turn);
        true
    }
}
