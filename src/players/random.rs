//! Uniform random move chooser.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{Color, EngineConfig, EngineError, Result};
use crate::moves::Move;
use crate::rules::GameEngine;

use super::MoveChooser;

/// Picks uniformly among the legal moves.
///
/// Tracks the game on a private shadow engine. Uses ChaCha8 so the same seed
/// always plays the same game against the same opponent.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    game: GameEngine,
    color: Color,
    rng: ChaCha8Rng,
}

impl RandomChooser {
    /// Create a chooser for `color` on a fresh game built from `config`.
    #[must_use]
    pub fn new(config: EngineConfig, color: Color, seed: u64) -> Self {
        Self {
            game: GameEngine::with_config(config),
            color,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The chooser's own view of the game.
    #[must_use]
    pub fn shadow(&self) -> &GameEngine {
        &self.game
    }
}

impl MoveChooser for RandomChooser {
    fn color(&self) -> Color {
        self.color
    }

    fn choose(&mut self, opponent_move: Option<&Move>) -> Result<Move> {
        if let Some(mv) = opponent_move {
            self.game.make_move(mv)?;
        }
        if self.game.turn() != self.color {
            return Err(EngineError::NotYourTurn(self.color));
        }

        let moves = self.game.get_all_moves();
        let chosen = moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EngineError::NoLegalMoves(self.color))?;

        self.game.make_move_unchecked(&chosen)?;
        log::debug!("random {} chose {} of {} moves", self.color, chosen, moves.len());
        Ok(chosen)
    }
}
