//! Pile types: foundations, tableaus, and the stock.
//!
//! All three are immutable value types backed by persistent vectors, so
//! "updating" a pile means building a new one that shares structure with the
//! old. Each pile owns its placement predicate; the unconditional transition
//! primitives (`place`, `take`, ...) trust the caller to have checked it,
//! matching how `Game::perform` uses them.
//!
//! ## Key Types
//!
//! - `Foundation`: one per suit in practice; ascending same-suit pile from
//!   the ace up
//! - `Tableau`: one of the seven columns; a face-down/face-up split with
//!   auto-reveal
//! - `Stock`: the draw/waste pair feeding the tableaus and foundations

pub mod foundation;
pub mod stock;
pub mod tableau;

pub use foundation::Foundation;
pub use stock::Stock;
pub use tableau::{Run, Tableau};
