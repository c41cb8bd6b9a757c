//! Rule validation: structured findings for positions built by hand.
//!
//! Normal play never needs this — `possible_moves`/`perform` only produce
//! legal positions. `validate` exists for diagnostics and tests: it checks
//! every pile independently and reports *all* violations it finds rather
//! than stopping at the first.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank, Suit};
use super::state::Game;

/// One rule violation found in a position.
///
/// Where two cards conflict, `card` is the one nearer the playable end and
/// `under` is the neighbor it rests on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    /// Adjacent face-up tableau cards that are not an alternating-color,
    /// descending-rank pair.
    TableauRunBreak {
        tableau: usize,
        card: Card,
        under: Card,
    },
    /// Adjacent foundation cards that are not a same-suit, ascending-rank
    /// pair.
    FoundationOrderBreak {
        foundation: usize,
        card: Card,
        under: Card,
    },
    /// A non-empty foundation whose bottom card is not an ace.
    FoundationBaseNotAce { foundation: usize, card: Card },
    /// A card appearing more than once across all piles.
    DuplicateCard { card: Card },
    /// A card of the 52-card set appearing nowhere.
    MissingCard { card: Card },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::TableauRunBreak { tableau, card, under } => {
                write!(f, "tableau {}: {} does not stack on {}", tableau, card, under)
            }
            Violation::FoundationOrderBreak { foundation, card, under } => {
                write!(f, "foundation {}: {} does not follow {}", foundation, card, under)
            }
            Violation::FoundationBaseNotAce { foundation, card } => {
                write!(f, "foundation {}: base card {} is not an ace", foundation, card)
            }
            Violation::DuplicateCard { card } => write!(f, "duplicate card {}", card),
            Violation::MissingCard { card } => write!(f, "missing card {}", card),
        }
    }
}

impl Game {
    /// Check the position against the placement rules and the 52-card set,
    /// accumulating every violation found.
    ///
    /// An empty result means the position is consistent; a position can
    /// report several defects across different piles at once.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Exposed runs: alternating color, strictly descending toward the
        // playable end.
        for (tableau, column) in self.tableaus().iter().enumerate() {
            let up = column.up();
            for (card, under) in up.iter().zip(up.iter().skip(1)) {
                if !card.stacks_on(*under) {
                    violations.push(Violation::TableauRunBreak {
                        tableau,
                        card: *card,
                        under: *under,
                    });
                }
            }
        }

        // Foundations: same suit, strictly ascending from an ace at the base.
        for (foundation, pile) in self.foundations().iter().enumerate() {
            let cards = pile.cards();
            for (card, under) in cards.iter().zip(cards.iter().skip(1)) {
                if !card.follows_on_foundation(*under) {
                    violations.push(Violation::FoundationOrderBreak {
                        foundation,
                        card: *card,
                        under: *under,
                    });
                }
            }
            if let Some(base) = cards.back() {
                if base.rank != Rank::ACE {
                    violations.push(Violation::FoundationBaseNotAce {
                        foundation,
                        card: *base,
                    });
                }
            }
        }

        // Conservation: the union of all piles is exactly the 52-card set.
        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert(card) {
                violations.push(Violation::DuplicateCard { card });
            }
        }
        for suit in Suit::ALL {
            for rank in Rank::all() {
                let card = Card::new(suit, rank);
                if !seen.contains(&card) {
                    violations.push(Violation::MissingCard { card });
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::game::state::{FOUNDATION_COUNT, TABLEAU_COUNT};
    use crate::piles::{Foundation, Stock, Tableau};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank))
    }

    fn full_deck_game() -> Game {
        Game::new(Deck::shuffled(1234))
    }

    #[test]
    fn test_fresh_deal_is_valid() {
        assert!(full_deck_game().validate().is_empty());
    }

    #[test]
    fn test_played_positions_stay_valid() {
        let mut game = full_deck_game();
        for _ in 0..40 {
            match game.possible_moves().first().copied() {
                Some(mv) => game = game.perform(&mv),
                None => game = game.turn(),
            }
            assert!(game.validate().is_empty());
        }
    }

    #[test]
    fn test_broken_run_is_reported() {
        // 7H resting on 9C skips a rank: exactly that pair must be flagged,
        // on the right column.
        let mut tableaus: [Tableau; TABLEAU_COUNT] = std::array::from_fn(|_| Tableau::new());
        tableaus[3] = Tableau::from_piles(
            [],
            [card(Suit::Hearts, 7), card(Suit::Clubs, 9), card(Suit::Hearts, 10)],
        );
        let foundations: [Foundation; FOUNDATION_COUNT] =
            std::array::from_fn(|_| Foundation::new());
        let game = Game::from_parts(Stock::new([]), tableaus, foundations);

        let violations = game.validate();
        assert!(violations.contains(&Violation::TableauRunBreak {
            tableau: 3,
            card: card(Suit::Hearts, 7),
            under: card(Suit::Clubs, 9),
        }));
        // 9C on 10H is a legal pair and must not be flagged.
        assert!(!violations.contains(&Violation::TableauRunBreak {
            tableau: 3,
            card: card(Suit::Clubs, 9),
            under: card(Suit::Hearts, 10),
        }));
    }

    #[test]
    fn test_multiple_defects_accumulate() {
        // Foundation 0: 5D sitting directly on AH (suit break), foundation 1
        // based on a 3 (no ace). Both must be reported, plus the cards the
        // hand-built position leaves out of play.
        let mut foundations: [Foundation; FOUNDATION_COUNT] =
            std::array::from_fn(|_| Foundation::new());
        foundations[0] = Foundation::from_cards([card(Suit::Diamonds, 5), card(Suit::Hearts, 1)]);
        foundations[1] = Foundation::from_cards([card(Suit::Spades, 3)]);
        let tableaus: [Tableau; TABLEAU_COUNT] = std::array::from_fn(|_| Tableau::new());
        let game = Game::from_parts(Stock::new([]), tableaus, foundations);

        let violations = game.validate();

        assert!(violations.contains(&Violation::FoundationOrderBreak {
            foundation: 0,
            card: card(Suit::Diamonds, 5),
            under: card(Suit::Hearts, 1),
        }));
        assert!(violations.contains(&Violation::FoundationBaseNotAce {
            foundation: 1,
            card: card(Suit::Spades, 3),
        }));
        // 49 cards never entered this position.
        let missing = violations
            .iter()
            .filter(|v| matches!(v, Violation::MissingCard { .. }))
            .count();
        assert_eq!(missing, 49);
    }

    #[test]
    fn test_duplicate_card_is_reported() {
        let mut tableaus: [Tableau; TABLEAU_COUNT] = std::array::from_fn(|_| Tableau::new());
        tableaus[0] = Tableau::from_piles([], [card(Suit::Hearts, 13)]);
        tableaus[1] = Tableau::from_piles([], [card(Suit::Hearts, 13)]);
        let foundations: [Foundation; FOUNDATION_COUNT] =
            std::array::from_fn(|_| Foundation::new());
        let game = Game::from_parts(Stock::new([]), tableaus, foundations);

        assert!(game.validate().contains(&Violation::DuplicateCard {
            card: card(Suit::Hearts, 13),
        }));
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::FoundationBaseNotAce {
            foundation: 2,
            card: card(Suit::Spades, 3),
        };
        assert_eq!(format!("{}", v), "foundation 2: base card 3S is not an ace");
    }
}
