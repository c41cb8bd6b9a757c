//! Card system: value types and the 52-card deck.
//!
//! ## Key Types
//!
//! - `Suit`: The four suits, with `Color` derived (hearts/diamonds red,
//!   spades/clubs black)
//! - `Rank`: Rank 1..=13 (`Rank::ACE` through `Rank::KING`)
//! - `Card`: A suit/rank pair with no identity beyond value equality
//! - `Deck`: The canonical 52-card enumeration plus seeded shuffling
//!
//! Cards carry the two placement predicates (`Card::stacks_on` for tableau
//! runs, `Card::follows_on_foundation` for foundation piles) so the piles
//! and the validator share one encoding of the rules.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
