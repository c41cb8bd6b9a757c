//! Tableau columns: face-down/face-up split piles with auto-reveal.
//!
//! The face-up pile is a stack whose *front* is the currently exposed,
//! playable card and whose *back* is the run's base (the highest-rank card).
//! Reading front to back, each card's rank is exactly one below the next and
//! colors alternate.
//!
//! Invariant: `up` is empty only if `down` is also empty. Every operation
//! that can empty `up` re-reveals the top face-down card before returning.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};

/// The exposed run removed by `Tableau::take_all`, front (exposed card)
/// first. Never longer than 13 cards, so it stays off the heap.
pub type Run = SmallVec<[Card; 13]>;

/// One of the seven playing columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    down: Vector<Card>,
    up: Vector<Card>,
}

impl Tableau {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a column directly from piles (both fronts on top). For
    /// diagnostics and tests; gameplay reaches every legal column through
    /// `add`/`take`/`place`.
    #[must_use]
    pub fn from_piles(
        down: impl IntoIterator<Item = Card>,
        up: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            down: down.into_iter().collect(),
            up: up.into_iter().collect(),
        }
        .reveal()
    }

    /// Append `cards` to the face-down pile, then auto-reveal.
    ///
    /// Used once per column during the initial deal: the chunk lands face
    /// down and exactly one card flips face up.
    #[must_use]
    pub fn add(&self, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut down = self.down.clone();
        down.extend(cards);
        Self {
            down,
            up: self.up.clone(),
        }
        .reveal()
    }

    /// Remove the exposed card, auto-revealing beneath it.
    ///
    /// Returns `None` when the column is empty.
    #[must_use]
    pub fn take(&self) -> Option<(Card, Tableau)> {
        let mut up = self.up.clone();
        let card = up.pop_front()?;
        let rest = Self {
            down: self.down.clone(),
            up,
        }
        .reveal();
        Some((card, rest))
    }

    /// Remove the entire exposed run, auto-revealing beneath it.
    ///
    /// The run comes back front-first (exposed card at index 0, run base
    /// last); an empty column yields an empty run.
    #[must_use]
    pub fn take_all(&self) -> (Run, Tableau) {
        let run: Run = self.up.iter().copied().collect();
        let rest = Self {
            down: self.down.clone(),
            up: Vector::new(),
        }
        .reveal();
        (run, rest)
    }

    /// Place one card on the exposed end of the column.
    ///
    /// The unconditional transition primitive: legality (a king on an empty
    /// column, otherwise one rank down in the opposite color) is the
    /// caller's contract, checked only in debug builds.
    #[must_use]
    pub fn place(&self, card: Card) -> Self {
        debug_assert!(self.can_place(card), "illegal tableau placement: {}", card);
        let mut up = self.up.clone();
        up.push_front(card);
        Self {
            down: self.down.clone(),
            up,
        }
    }

    /// Re-apply a run removed by `take_all`, preserving its order.
    ///
    /// `run` is front-first; cards are placed base-first so the destination
    /// ends with the same front-to-back order the source had.
    #[must_use]
    pub fn place_run(&self, run: &[Card]) -> Self {
        run.iter().rev().fold(self.clone(), |tableau, &card| tableau.place(card))
    }

    /// True if `card` may legally start or extend this column.
    #[must_use]
    pub fn can_place(&self, card: Card) -> bool {
        match self.exposed() {
            None => card.rank == Rank::KING,
            Some(exposed) => card.stacks_on(exposed),
        }
    }

    /// The currently exposed, playable card (front of the face-up pile).
    #[must_use]
    pub fn exposed(&self) -> Option<Card> {
        self.up.front().copied()
    }

    /// The highest-rank card at the base of the exposed run (back of the
    /// face-up pile). This is the card checked when the whole run moves.
    #[must_use]
    pub fn run_base(&self) -> Option<Card> {
        self.up.back().copied()
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn down_count(&self) -> usize {
        self.down.len()
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn up_count(&self) -> usize {
        self.up.len()
    }

    /// True if the column holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// The face-down pile, top first.
    #[must_use]
    pub fn down(&self) -> &Vector<Card> {
        &self.down
    }

    /// The face-up pile, exposed card first.
    #[must_use]
    pub fn up(&self) -> &Vector<Card> {
        &self.up
    }

    // Re-establish the invariant: an empty face-up pile flips the top
    // face-down card.
    fn reveal(mut self) -> Self {
        if self.up.is_empty() {
            if let Some(card) = self.down.pop_front() {
                self.up.push_front(card);
            }
        }
        self
    }
}
