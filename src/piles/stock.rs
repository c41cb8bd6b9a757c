//! The stock: a face-down draw pile and a face-up waste pile.
//!
//! Turning reveals one card at a time from draw to waste; once the draw
//! pile is exhausted, the waste can be redealt (reversed back into the draw
//! pile) for another pass.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The draw/waste pair. Both fronts are the tops of their piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    draw: Vector<Card>,
    waste: Vector<Card>,
}

impl Stock {
    /// Wrap the undealt remainder of a deck: everything in the draw pile,
    /// the waste empty.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            waste: Vector::new(),
        }
    }

    /// Reveal one card: the top of the draw pile moves onto the waste.
    ///
    /// A no-op when the draw pile is already empty.
    #[must_use]
    pub fn turn(&self) -> Self {
        let mut draw = self.draw.clone();
        match draw.pop_front() {
            None => self.clone(),
            Some(card) => {
                let mut waste = self.waste.clone();
                waste.push_front(card);
                Self { draw, waste }
            }
        }
    }

    /// The playable card on top of the waste, or `None` if the waste is
    /// empty.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.waste.front().copied()
    }

    /// Remove the top of the waste (one card played away).
    ///
    /// Returns `None` when the waste is empty.
    #[must_use]
    pub fn take(&self) -> Option<(Card, Stock)> {
        let mut waste = self.waste.clone();
        let card = waste.pop_front()?;
        Some((
            card,
            Self {
                draw: self.draw.clone(),
                waste,
            },
        ))
    }

    /// The remaining undrawn draw pile, top first. Reporting only; play
    /// legality never looks past the waste top.
    #[must_use]
    pub fn remaining(&self) -> &Vector<Card> {
        &self.draw
    }

    /// The waste pile, top first.
    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    /// True if the draw pile is empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw.is_empty()
    }

    /// Turn the reversed waste back into a fresh draw pile, emptying the
    /// waste.
    ///
    /// Only meaningful once the draw pile is exhausted; `Game::reshuffle`
    /// gates on that, and the contract is checked here in debug builds.
    #[must_use]
    pub fn redeal(&self) -> Self {
        debug_assert!(self.is_exhausted(), "redeal with a non-empty draw pile");
        Self {
            draw: self.waste.iter().rev().copied().collect(),
            waste: Vector::new(),
        }
    }
}
