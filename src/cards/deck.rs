//! The 52-card deck and seeded shuffling.
//!
//! A deck exists only to set up a game: `Deck::new` enumerates the 52 cards
//! in a fixed canonical order, `shuffle` permutes it through an explicit
//! caller-owned generator, and `Game::new` consumes the result. The deck is
//! not retained afterward.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::rng::ShuffleRng;

/// An ordered sequence of the 52 distinct cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// The canonical enumeration: suit-major (`Suit::ALL` order), rank-minor
    /// (ace to king). Deterministic, not random.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Permute the deck through the given generator.
    ///
    /// A pure function of (deck, generator state): the same seed always
    /// produces the same permutation within one build of this crate. No
    /// cross-implementation reproducibility is promised.
    #[must_use]
    pub fn shuffle(mut self, rng: &mut ShuffleRng) -> Self {
        rng.shuffle(&mut self.cards);
        self
    }

    /// Convenience: the canonical deck shuffled by a fresh seed-keyed
    /// generator.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        Deck::new().shuffle(&mut ShuffleRng::new(seed))
    }

    /// The cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (always 52 for decks built by `new`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
