use crate::{Card, Direction, Game, Move, Player, Strategy};

use super::{playable_card, retain_best};

/// Grabs the corners of the grid with the card that is strongest towards the
/// inside of the grid there.
///
/// A corner scores the sum of the card's two sides facing the grid, every
/// other cell scores 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoForCorners;

impl GoForCorners {
    fn corner_score(card: &Card, x: usize, y: usize, width: usize, height: usize) -> i32 {
        let (left, top, right, bottom) = (x == 0, y == 0, x + 1 == width, y + 1 == height);
        let corners = [
            (left && top, Direction::Right, Direction::Down),
            (right && top, Direction::Left, Direction::Down),
            (left && bottom, Direction::Right, Direction::Up),
            (right && bottom, Direction::Left, Direction::Up),
        ];
        corners
            .into_iter()
            .filter(|(is_corner, _, _)| *is_corner)
            .map(|(_, a, b)| i32::from(card.value(a).value() + card.value(b).value()))
            .max()
            .unwrap_or(0)
    }
}

impl Strategy for GoForCorners {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        let (width, height) = (game.width(), game.height());
        retain_best(options.into_iter().filter_map(|mv| {
            let card = playable_card(game, player, &mv)?;
            let score = Self::corner_score(card, mv.x, mv.y, width, height);
            Some((score, mv.with_score(score)))
        }))
    }
}
