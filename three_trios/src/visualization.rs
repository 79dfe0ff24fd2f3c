use crate::{Game, Grid};

/// Draws the grid one row per line: `_` for an empty cell, a space for a
/// hole and the first letter of the owner's color for a card.
pub fn visualize_grid(grid: &Grid) -> String {
    let mut result = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        result.extend(row.iter().map(|slot| slot.glyph()));
        result.push('\n');
    }
    result
}

/// Draws the game from the point of view of the current player: whose turn
/// it is, the grid, and the cards in that player's hand.
///
/// ```text
/// Player: RED
/// _ R
/// B__
/// Hand:
/// dragon 9 3 A 1
/// ```
pub fn visualize_game(game: &Game) -> String {
    let player = game.current_player();
    let mut result = format!("Player: {}\n", player);
    result += &visualize_grid(game.grid());
    result += "Hand:\n";
    for card in game.hand(player) {
        result += &format!("{}\n", card);
    }
    result
}
