//! Move representation, enumeration, and application.
//!
//! ## Move Ordering Is a Contract
//!
//! `possible_moves` reports legal moves in a fixed order:
//!
//! 1. tableau → foundation, by tableau index (first accepting foundation)
//! 2. deck → foundation, for the waste top (first accepting foundation)
//! 3. tableau → tableau, by source index then destination index
//! 4. deck → tableau, by destination index
//!
//! Automated players that always take the first reported move, and tests
//! that pin positions, depend on this order being stable for a given
//! position. Reorder at your peril.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use super::state::Game;

/// One legal move: exactly four shapes exist, each carrying only the
/// indices it needs plus the card that would move, so a consumer never has
/// to re-derive it.
///
/// For `TableauToTableau` the card is the *base* of the moving run (the
/// card checked against the destination); the whole exposed run moves with
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The exposed card of a tableau goes to a foundation.
    TableauToFoundation {
        tableau: usize,
        foundation: usize,
        card: Card,
    },
    /// The entire exposed run of one tableau relocates to another.
    TableauToTableau {
        from: usize,
        to: usize,
        card: Card,
    },
    /// The waste top goes to a foundation.
    DeckToFoundation {
        foundation: usize,
        card: Card,
    },
    /// The waste top goes to a tableau.
    DeckToTableau {
        tableau: usize,
        card: Card,
    },
}

impl Move {
    /// The card this move relocates.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            Move::TableauToFoundation { card, .. }
            | Move::TableauToTableau { card, .. }
            | Move::DeckToFoundation { card, .. }
            | Move::DeckToTableau { card, .. } => card,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::TableauToFoundation { tableau, foundation, card } => {
                write!(f, "{} tableau {} -> foundation {}", card, tableau, foundation)
            }
            Move::TableauToTableau { from, to, card } => {
                write!(f, "{} run tableau {} -> tableau {}", card, from, to)
            }
            Move::DeckToFoundation { foundation, card } => {
                write!(f, "{} waste -> foundation {}", card, foundation)
            }
            Move::DeckToTableau { tableau, card } => {
                write!(f, "{} waste -> tableau {}", card, tableau)
            }
        }
    }
}

impl Game {
    /// Enumerate every legal move from this position, in the contractual
    /// order documented at module level.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        // Tableau -> foundation.
        for (tableau, column) in self.tableaus().iter().enumerate() {
            if let Some(card) = column.exposed() {
                if let Some(foundation) = self.accepting_foundation(card) {
                    moves.push(Move::TableauToFoundation {
                        tableau,
                        foundation,
                        card,
                    });
                }
            }
        }

        // Deck -> foundation.
        if let Some(card) = self.stock().top() {
            if let Some(foundation) = self.accepting_foundation(card) {
                moves.push(Move::DeckToFoundation { foundation, card });
            }
        }

        // Tableau -> tableau: the whole exposed run, base card checked
        // against the destination. Suppressed when it would accomplish
        // nothing: a fully-revealed run moving onto an empty column.
        for (from, source) in self.tableaus().iter().enumerate() {
            let Some(card) = source.run_base() else {
                continue;
            };
            for (to, destination) in self.tableaus().iter().enumerate() {
                if from == to {
                    continue;
                }
                let useful = destination.up_count() > 0 || source.down_count() > 0;
                if useful && destination.can_place(card) {
                    moves.push(Move::TableauToTableau { from, to, card });
                }
            }
        }

        // Deck -> tableau.
        if let Some(card) = self.stock().top() {
            for (tableau, destination) in self.tableaus().iter().enumerate() {
                if destination.can_place(card) {
                    moves.push(Move::DeckToTableau { tableau, card });
                }
            }
        }

        moves
    }

    /// Apply one move, producing the next position.
    ///
    /// `perform` trusts that `mv` came from `possible_moves` on this very
    /// position (or is otherwise known legal) and does not re-validate; a
    /// stale or fabricated move is a caller bug, caught by assertions in
    /// debug builds.
    #[must_use]
    pub fn perform(&self, mv: &Move) -> Game {
        match *mv {
            Move::TableauToFoundation { tableau, foundation, card } => {
                let (taken, rest) = self.tableau(tableau)
                    .take()
                    .expect("move source tableau is empty");
                debug_assert_eq!(taken, card, "stale move: exposed card changed");
                self.with_tableau(tableau, rest)
                    .with_foundation(foundation, self.foundation(foundation).place(taken))
            }
            Move::TableauToTableau { from, to, card } => {
                let (run, rest) = self.tableau(from).take_all();
                debug_assert_eq!(run.last().copied(), Some(card), "stale move: run base changed");
                self.with_tableau(from, rest)
                    .with_tableau(to, self.tableau(to).place_run(&run))
            }
            Move::DeckToFoundation { foundation, card } => {
                let (taken, stock) = self.stock()
                    .take()
                    .expect("move source waste is empty");
                debug_assert_eq!(taken, card, "stale move: waste top changed");
                self.with_stock(stock)
                    .with_foundation(foundation, self.foundation(foundation).place(taken))
            }
            Move::DeckToTableau { tableau, card } => {
                let (taken, stock) = self.stock()
                    .take()
                    .expect("move source waste is empty");
                debug_assert_eq!(taken, card, "stale move: waste top changed");
                self.with_stock(stock)
                    .with_tableau(tableau, self.tableau(tableau).place(taken))
            }
        }
    }

    /// The first foundation (in index order) that accepts `card`, if any.
    fn accepting_foundation(&self, card: Card) -> Option<usize> {
        self.foundations()
            .iter()
            .position(|foundation| foundation.can_place(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Rank, Suit};
    use crate::game::state::{FOUNDATION_COUNT, TABLEAU_COUNT};
    use crate::piles::{Foundation, Stock, Tableau};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank))
    }

    fn empty_tableaus() -> [Tableau; TABLEAU_COUNT] {
        std::array::from_fn(|_| Tableau::new())
    }

    fn empty_foundations() -> [Foundation; FOUNDATION_COUNT] {
        std::array::from_fn(|_| Foundation::new())
    }

    /// A small hand-built position:
    ///   tableau 0: AH exposed
    ///   tableau 1: 2S on top of a face-down card
    ///   tableau 2: 8D exposed
    ///   waste top: 7C
    fn sample_game() -> Game {
        let mut tableaus = empty_tableaus();
        tableaus[0] = Tableau::from_piles([], [card(Suit::Hearts, 1)]);
        tableaus[1] = Tableau::from_piles([card(Suit::Clubs, 11)], [card(Suit::Spades, 2)]);
        tableaus[2] = Tableau::from_piles([], [card(Suit::Diamonds, 8)]);
        let stock = Stock::new([card(Suit::Clubs, 7)]).turn();
        Game::from_parts(stock, tableaus, empty_foundations())
    }

    #[test]
    fn test_ace_to_first_foundation_comes_first() {
        let game = sample_game();
        let moves = game.possible_moves();

        assert_eq!(
            moves[0],
            Move::TableauToFoundation {
                tableau: 0,
                foundation: 0,
                card: card(Suit::Hearts, 1),
            }
        );
    }

    #[test]
    fn test_enumeration_order() {
        let game = sample_game();
        let moves = game.possible_moves();

        // AH -> foundation 0 first; the (legal, if pointless) AH onto the 2S
        // next; the waste 7C onto the 8D last.
        assert_eq!(
            moves,
            vec![
                Move::TableauToFoundation {
                    tableau: 0,
                    foundation: 0,
                    card: card(Suit::Hearts, 1),
                },
                Move::TableauToTableau {
                    from: 0,
                    to: 1,
                    card: card(Suit::Hearts, 1),
                },
                Move::DeckToTableau {
                    tableau: 2,
                    card: card(Suit::Clubs, 7),
                },
            ]
        );
    }

    #[test]
    fn test_deck_to_foundation_after_ace_placed() {
        let game = sample_game();
        let after_ace = game.perform(&game.possible_moves()[0]);

        // 2H on the waste would now go to foundation 0.
        let mut tableaus = after_ace.tableaus().clone();
        tableaus[0] = Tableau::new();
        let stock = Stock::new([card(Suit::Hearts, 2)]).turn();
        let game = Game::from_parts(stock, tableaus, after_ace.foundations().clone());

        let moves = game.possible_moves();
        assert!(moves.contains(&Move::DeckToFoundation {
            foundation: 0,
            card: card(Suit::Hearts, 2),
        }));
    }

    #[test]
    fn test_tableau_run_moves_whole_run() {
        // Tableau 0: 6D-7S run over a hidden card; tableau 1: 8H exposed.
        let mut tableaus = empty_tableaus();
        tableaus[0] = Tableau::from_piles(
            [card(Suit::Clubs, 12)],
            [card(Suit::Diamonds, 6), card(Suit::Spades, 7)],
        );
        tableaus[1] = Tableau::from_piles([], [card(Suit::Hearts, 8)]);
        let game = Game::from_parts(Stock::new([]), tableaus, empty_foundations());

        let moves = game.possible_moves();
        let run_move = Move::TableauToTableau {
            from: 0,
            to: 1,
            card: card(Suit::Spades, 7),
        };
        assert!(moves.contains(&run_move));

        let next = game.perform(&run_move);
        // The hidden queen flips; the run sits on the 8H in order.
        assert_eq!(next.tableau(0).exposed(), Some(card(Suit::Clubs, 12)));
        assert_eq!(next.tableau(1).exposed(), Some(card(Suit::Diamonds, 6)));
        assert_eq!(next.tableau(1).up_count(), 3);
    }

    #[test]
    fn test_settled_run_does_not_move_to_empty_column() {
        // Tableau 0 holds a fully-revealed king run, tableau 1 is empty:
        // relocating it accomplishes nothing and must not be reported.
        let mut tableaus = empty_tableaus();
        tableaus[0] = Tableau::from_piles(
            [],
            [card(Suit::Diamonds, 12), card(Suit::Spades, 13)],
        );
        let game = Game::from_parts(Stock::new([]), tableaus, empty_foundations());

        assert!(game.possible_moves().is_empty());
    }

    #[test]
    fn test_king_run_with_hidden_cards_moves_to_empty_column() {
        // Same run, but a card is still hidden beneath it: moving frees it.
        let mut tableaus = empty_tableaus();
        tableaus[0] = Tableau::from_piles(
            [card(Suit::Hearts, 4)],
            [card(Suit::Diamonds, 12), card(Suit::Spades, 13)],
        );
        let game = Game::from_parts(Stock::new([]), tableaus, empty_foundations());

        // Every empty column is offered, in destination index order.
        let moves = game.possible_moves();
        let expected: Vec<Move> = (1..TABLEAU_COUNT)
            .map(|to| Move::TableauToTableau {
                from: 0,
                to,
                card: card(Suit::Spades, 13),
            })
            .collect();
        assert_eq!(moves, expected);

        let next = game.perform(&moves[0]);
        assert_eq!(next.tableau(0).exposed(), Some(card(Suit::Hearts, 4)));
        assert_eq!(next.tableau(1).run_base(), Some(card(Suit::Spades, 13)));
    }

    #[test]
    fn test_non_king_never_starts_empty_column() {
        let mut tableaus = empty_tableaus();
        tableaus[0] = Tableau::from_piles(
            [card(Suit::Hearts, 4)],
            [card(Suit::Diamonds, 12)],
        );
        let game = Game::from_parts(Stock::new([]), tableaus, empty_foundations());

        assert!(game.possible_moves().is_empty());
    }

    #[test]
    fn test_every_reported_move_passes_its_predicate() {
        let game = Game::new(Deck::shuffled(1234));

        for mv in game.possible_moves() {
            match mv {
                Move::TableauToFoundation { tableau, foundation, card } => {
                    assert_eq!(game.tableau(tableau).exposed(), Some(card));
                    assert!(game.foundation(foundation).can_place(card));
                }
                Move::TableauToTableau { from, to, card } => {
                    assert_eq!(game.tableau(from).run_base(), Some(card));
                    assert!(game.tableau(to).can_place(card));
                }
                Move::DeckToFoundation { foundation, card } => {
                    assert_eq!(game.stock().top(), Some(card));
                    assert!(game.foundation(foundation).can_place(card));
                }
                Move::DeckToTableau { tableau, card } => {
                    assert_eq!(game.stock().top(), Some(card));
                    assert!(game.tableau(tableau).can_place(card));
                }
            }
        }
    }

    #[test]
    fn test_every_satisfying_placement_is_reported() {
        // Converse direction on a hand-built position: scan all card/pile
        // pairs the predicates accept and demand each shows up.
        let game = sample_game();
        let moves = game.possible_moves();

        for (i, tableau) in game.tableaus().iter().enumerate() {
            if let Some(exposed) = tableau.exposed() {
                if let Some(f) = game
                    .foundations()
                    .iter()
                    .position(|fd| fd.can_place(exposed))
                {
                    assert!(moves.contains(&Move::TableauToFoundation {
                        tableau: i,
                        foundation: f,
                        card: exposed,
                    }));
                }
            }
        }
        if let Some(top) = game.stock().top() {
            for (i, tableau) in game.tableaus().iter().enumerate() {
                if tableau.can_place(top) {
                    assert!(moves.contains(&Move::DeckToTableau {
                        tableau: i,
                        card: top,
                    }));
                }
            }
        }
    }

    #[test]
    fn test_perform_leaves_source_position_intact() {
        let game = sample_game();
        let before = game.clone();
        let _ = game.perform(&game.possible_moves()[0]);
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::DeckToTableau {
            tableau: 3,
            card: card(Suit::Clubs, 7),
        };
        assert_eq!(format!("{}", mv), "7C waste -> tableau 3");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::TableauToTableau {
            from: 0,
            to: 5,
            card: card(Suit::Spades, 13),
        };
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
