//! Human-readable rendering of positions.
//!
//! Face-down cards are shown as `"XX"`, face-up cards with their short code
//! ("AH", "7C", "TD"). The intent is a stable, readable representation for
//! debugging and for logging lines of play, not a UI.

use std::fmt;

use crate::cards::Card;
use crate::game::{Game, TABLEAU_COUNT};
use crate::piles::Tableau;

/// Render the foundation row, top card per pile.
///
/// Empty foundations show as `[  ]`; non-empty as e.g. `[AH]`, `[7C]`.
fn render_foundations(game: &Game, out: &mut String) {
    out.push_str("Foundations:");
    for foundation in game.foundations() {
        match foundation.top() {
            None => out.push_str(" [  ]"),
            Some(card) => {
                out.push_str(" [");
                out.push_str(&card.to_string());
                out.push(']');
            }
        }
    }
    out.push('\n');
}

/// Render the stock on one line: draw-pile count and the waste top.
fn render_stock(game: &Game, out: &mut String) {
    let stock = game.stock();
    match stock.remaining().len() {
        0 => out.push_str("Stock: [empty]"),
        n => out.push_str(&format!("Stock: [{} cards]", n)),
    }
    match stock.top() {
        None => out.push_str("    Waste: [empty]"),
        Some(card) => out.push_str(&format!(
            "    Waste: [{}] ({} cards)",
            card,
            stock.waste().len()
        )),
    }
    out.push('\n');
}

// A column read top-to-bottom on the table: the face-down pile, then the
// face-up run from its base down to the exposed card.
fn column_cells(tableau: &Tableau) -> Vec<Option<Card>> {
    let mut cells: Vec<Option<Card>> = tableau.down().iter().map(|_| None).collect();
    cells.extend(tableau.up().iter().rev().map(|&card| Some(card)));
    cells
}

/// Render the seven columns as a top-justified grid.
fn render_tableaus(game: &Game, out: &mut String) {
    out.push_str("Columns:\n");
    for i in 0..TABLEAU_COUNT {
        out.push_str(&format!(" C{} ", i + 1));
    }
    out.push('\n');

    let columns: Vec<Vec<Option<Card>>> =
        game.tableaus().iter().map(column_cells).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..height {
        for cells in &columns {
            match cells.get(row) {
                Some(None) => out.push_str(" XX "),
                Some(Some(card)) => out.push_str(&format!(" {} ", card)),
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }
}

/// Render a full position as multi-line text.
#[must_use]
pub fn render(game: &Game) -> String {
    let mut out = String::new();
    render_foundations(game, &mut out);
    render_stock(game, &mut out);
    render_tableaus(game, &mut out);
    out
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
