//! Game positions, move enumeration, transitions, and rule validation.
//!
//! A `Game` is a plain value: one stock, seven tableaus, four foundations.
//! There is no separate state enum — positions are the states, and
//! `perform`/`turn`/`reshuffle` are the transitions, each returning a new
//! value. Terminal conditions are the caller's call: the engine reports
//! `possible_moves` and leaves "game over" to whoever is driving.
//!
//! ## Key Types
//!
//! - `Game`: a full position
//! - `Move`: the closed set of four legal move shapes
//! - `Violation`: a structured rule-violation finding from `validate`

pub mod moves;
pub mod state;
pub mod validate;

pub use moves::Move;
pub use state::{Game, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use validate::Violation;
