//! Full game positions: one stock, seven tableaus, four foundations.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::piles::{Foundation, Stock, Tableau};

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// An immutable Klondike position.
///
/// Every operation returns a new value; the piles share structure, so
/// holding many positions of a line of play is cheap. `Game` is `Eq` and
/// `Hash`, which lets a driver keep a seen-set for loop detection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    stock: Stock,
    tableaus: [Tableau; TABLEAU_COUNT],
    foundations: [Foundation; FOUNDATION_COUNT],
}

impl Game {
    /// Deal a fresh game from a (usually shuffled) deck.
    ///
    /// Tableaus 0..7 receive 1..=7 cards in cumulative order, consuming 28
    /// cards; each column flips exactly one card face up. The remaining 24
    /// cards become the stock, turned once so a card is ready to play.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let mut cards = deck.into_iter();

        let tableaus = std::array::from_fn(|i| Tableau::new().add(cards.by_ref().take(i + 1)));
        let foundations = std::array::from_fn(|_| Foundation::new());
        let stock = Stock::new(cards).turn();

        Self {
            stock,
            tableaus,
            foundations,
        }
    }

    /// Assemble a position directly from its piles.
    ///
    /// For diagnostics and tests (`validate` exists exactly to check such
    /// positions); normal play reaches every position through `new` and the
    /// transition operations.
    #[must_use]
    pub fn from_parts(
        stock: Stock,
        tableaus: [Tableau; TABLEAU_COUNT],
        foundations: [Foundation; FOUNDATION_COUNT],
    ) -> Self {
        Self {
            stock,
            tableaus,
            foundations,
        }
    }

    /// The stock.
    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// All seven tableau columns, in index order.
    #[must_use]
    pub fn tableaus(&self) -> &[Tableau; TABLEAU_COUNT] {
        &self.tableaus
    }

    /// All four foundation piles, in index order.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// One tableau column by index.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Tableau {
        &self.tableaus[index]
    }

    /// One foundation pile by index.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Foundation {
        &self.foundations[index]
    }

    /// Advance the stock by one card. A no-op when the draw pile is empty.
    #[must_use]
    pub fn turn(&self) -> Self {
        Self {
            stock: self.stock.turn(),
            tableaus: self.tableaus.clone(),
            foundations: self.foundations.clone(),
        }
    }

    /// Redeal the waste back into the draw pile for another pass.
    ///
    /// A no-op unless the draw pile is empty; tableaus and foundations are
    /// untouched either way.
    #[must_use]
    pub fn reshuffle(&self) -> Self {
        if !self.stock.is_exhausted() {
            return self.clone();
        }
        Self {
            stock: self.stock.redeal(),
            tableaus: self.tableaus.clone(),
            foundations: self.foundations.clone(),
        }
    }

    /// Sum of the foundation sizes: 0 at the deal, 52 for a won game,
    /// non-decreasing under legal play.
    #[must_use]
    pub fn score(&self) -> usize {
        self.foundations.iter().map(Foundation::len).sum()
    }

    /// True once every card has reached a foundation.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.score() == Deck::SIZE
    }

    /// Every card in the position, container by container: draw pile, waste,
    /// each tableau (down then up), each foundation.
    ///
    /// For any position reachable by legal play this yields each of the 52
    /// cards exactly once.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let stock = self
            .stock
            .remaining()
            .iter()
            .chain(self.stock.waste().iter());
        let tableaus = self
            .tableaus
            .iter()
            .flat_map(|t| t.down().iter().chain(t.up().iter()));
        let foundations = self.foundations.iter().flat_map(|f| f.cards().iter());
        stock.chain(tableaus).chain(foundations).copied()
    }

    // Replace one tableau, keeping everything else.
    pub(crate) fn with_tableau(&self, index: usize, tableau: Tableau) -> Self {
        let mut next = self.clone();
        next.tableaus[index] = tableau;
        next
    }

    // Replace one foundation, keeping everything else.
    pub(crate) fn with_foundation(&self, index: usize, foundation: Foundation) -> Self {
        let mut next = self.clone();
        next.foundations[index] = foundation;
        next
    }

    // Replace the stock, keeping everything else.
    pub(crate) fn with_stock(&self, stock: Stock) -> Self {
        let mut next = self.clone();
        next.stock = stock;
        next
    }
}
