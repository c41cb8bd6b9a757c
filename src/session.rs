//! In-process holder for one game across calls.
//!
//! The engine itself is a pure value type; a `Session` is the thin owner
//! that a driver (CLI, bot, test harness) talks to. It keeps the initial
//! deck and every step applied since the deal, so any position it has held
//! can be reconstructed by replay. Mutations go through `&mut self`, which
//! is the whole concurrency story: at most one in-flight mutation, and
//! readers see either the pre- or post-move value, never a partial one.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::game::{Game, Move};

/// One step of a play-through. Stock turns and redeals are recorded
/// alongside placement moves so that `replay` is faithful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// A placement move from `possible_moves`.
    Play(Move),
    /// One stock turn.
    Turn,
    /// One waste redeal.
    Reshuffle,
}

/// Owns one `Game` value plus the history that produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    initial_deck: Deck,
    game: Game,
    history: Vec<Step>,
}

impl Session {
    /// Deal a new session from a deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let game = Game::new(deck.clone());
        Self {
            initial_deck: deck,
            game,
            history: Vec::new(),
        }
    }

    /// Deal a new session from a seed-shuffled deck.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Deck::shuffled(seed))
    }

    /// The current position.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The legal moves from the current position, in the contractual order.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Move> {
        self.game.possible_moves()
    }

    /// Apply one move, replacing the held position.
    pub fn perform(&mut self, mv: Move) {
        self.game = self.game.perform(&mv);
        self.history.push(Step::Play(mv));
    }

    /// Advance the stock by one card.
    pub fn turn(&mut self) {
        self.game = self.game.turn();
        self.history.push(Step::Turn);
    }

    /// Redeal the waste once the draw pile is exhausted.
    pub fn reshuffle(&mut self) {
        self.game = self.game.reshuffle();
        self.history.push(Step::Reshuffle);
    }

    /// Current score (cards on foundations).
    #[must_use]
    pub fn score(&self) -> usize {
        self.game.score()
    }

    /// Number of steps applied since the deal, stock handling included.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Every step applied since the deal, in order.
    #[must_use]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Rebuild the current position from the initial deck and the history.
    ///
    /// A consistency helper: the result always equals `game()`.
    #[must_use]
    pub fn replay(&self) -> Game {
        self.history
            .iter()
            .fold(Game::new(self.initial_deck.clone()), |game, step| match step {
                Step::Play(mv) => game.perform(mv),
                Step::Turn => game.turn(),
                Step::Reshuffle => game.reshuffle(),
            })
    }
}
