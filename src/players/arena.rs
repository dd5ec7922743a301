//! Match driver: plays two choosers against each other on one engine.

use serde::{Deserialize, Serialize};

use crate::core::{Color, EngineConfig, EngineError, Result};
use crate::moves::Move;
use crate::rules::{GameEngine, GameStatus};

use super::MoveChooser;

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Engine settings (board size, tie ceiling).
    pub engine: EngineConfig,

    /// Maximum plies before the match is cut off unfinished.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            max_plies: 500,
        }
    }
}

impl MatchConfig {
    /// Create a match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Set maximum plies per match.
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }
}

/// Outcome and move list of a finished (or cut off) match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Board size the match was played on.
    pub board_size: usize,

    /// Moves in order, Black first.
    pub moves: Vec<Move>,

    /// Final status; `Unfinished` when cut off by `max_plies`.
    pub status: GameStatus,

    pub black_count: usize,
    pub white_count: usize,
}

impl MatchRecord {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Replay the moves on a fresh engine.
    pub fn replay(&self, config: &EngineConfig) -> Result<GameEngine> {
        let mut game = GameEngine::with_config(config.clone().with_board_size(self.board_size));
        for mv in &self.moves {
            game.make_move(mv)?;
        }
        Ok(game)
    }
}

/// Play one match between two choosers.
///
/// Each chooser is handed the opponent's previous move before it picks, and
/// every chosen move is validated by the match engine. The match ends when
/// the engine reports a terminal status, after `max_plies` moves, or when the
/// side to move has no legal moves in a position the engine still calls
/// `Unfinished` (the empty starting boards of size 1 and 2).
pub fn play_match(
    config: &MatchConfig,
    black: &mut dyn MoveChooser,
    white: &mut dyn MoveChooser,
) -> Result<MatchRecord> {
    if black.color() != Color::Black {
        return Err(EngineError::NotYourTurn(black.color()));
    }
    if white.color() != Color::White {
        return Err(EngineError::NotYourTurn(white.color()));
    }

    let mut game = GameEngine::with_config(config.engine.clone());
    let mut moves: Vec<Move> = Vec::new();

    while !game.status().is_terminal() && moves.len() < config.max_plies {
        // Only possible from the starting layout of boards too small to hold pieces.
        if game.get_all_moves().is_empty() {
            log::warn!("{} has no legal moves, stopping the match", game.turn());
            break;
        }

        let chooser: &mut dyn MoveChooser = match game.turn() {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };

        let mv = chooser.choose(moves.last())?;
        game.make_move(&mv)?;
        moves.push(mv);
    }

    log::info!(
        "match finished after {} plies: {:?} (black {}, white {})",
        moves.len(),
        game.status(),
        game.black_count(),
        game.white_count()
    );

    Ok(MatchRecord {
        board_size: game.board().size(),
        moves,
        status: game.status(),
        black_count: game.black_count(),
        white_count: game.white_count(),
    })
}
