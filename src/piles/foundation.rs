//! Foundation piles: ascending same-suit stacks built from the ace up.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// One foundation pile, most-recently-placed card at the front.
///
/// The predicate does not pin a suit to a slot: any ace may start any empty
/// foundation. Suit consistency follows from the rules — only an ace starts
/// a pile, and every later placement must match the suit of the card below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundation {
    cards: Vector<Card>,
}

impl Foundation {
    /// Create an empty foundation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The top card, or `None` for an empty pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The full pile, top card first.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// True if `card` may legally be placed on this pile: an ace on an empty
    /// pile, otherwise same suit and rank exactly one above the top.
    #[must_use]
    pub fn can_place(&self, card: Card) -> bool {
        match self.top() {
            None => card.rank == Rank::ACE,
            Some(top) => card.follows_on_foundation(top),
        }
    }

    /// Place `card` on top of the pile.
    ///
    /// The unconditional transition primitive: legality is the caller's
    /// contract, checked only in debug builds.
    #[must_use]
    pub fn place(&self, card: Card) -> Self {
        debug_assert!(self.can_place(card), "illegal foundation placement: {}", card);
        let mut cards = self.cards.clone();
        cards.push_front(card);
        Self { cards }
    }

    /// Build a pile directly from cards (top first). For diagnostics and
    /// tests; gameplay reaches every legal pile through `place`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank))
    }

    #[test]
    fn test_empty_accepts_only_aces() {
        let foundation = Foundation::new();

        assert!(foundation.can_place(card(Suit::Hearts, 1)));
        assert!(foundation.can_place(card(Suit::Spades, 1)));
        assert!(!foundation.can_place(card(Suit::Hearts, 2)));
        assert!(!foundation.can_place(card(Suit::Hearts, 13)));
    }

    #[test]
    fn test_ascending_same_suit() {
        let foundation = Foundation::new()
            .place(card(Suit::Hearts, 1))
            .place(card(Suit::Hearts, 2));

        assert_eq!(foundation.top(), Some(card(Suit::Hearts, 2)));
        assert!(foundation.can_place(card(Suit::Hearts, 3)));
        assert!(!foundation.can_place(card(Suit::Spades, 3)));
        assert!(!foundation.can_place(card(Suit::Hearts, 4)));
        assert!(!foundation.can_place(card(Suit::Hearts, 2)));
    }

    #[test]
    fn test_place_is_persistent() {
        let empty = Foundation::new();
        let one = empty.place(card(Suit::Clubs, 1));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.top(), Some(card(Suit::Clubs, 1)));
    }

    #[test]
    fn test_serialization() {
        let foundation = Foundation::new().place(card(Suit::Diamonds, 1));
        let json = serde_json::to_string(&foundation).unwrap();
        let deserialized: Foundation = serde_json::from_str(&json).unwrap();
        assert_eq!(foundation, deserialized);
    }
}
