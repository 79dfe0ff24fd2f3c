use crate::{Game, Move, Player, Strategy};

use super::{playable_card, retain_best};

/// Plays wherever the most cards get flipped right away.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostFlipped;

impl Strategy for MostFlipped {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        retain_best(options.into_iter().filter_map(|mv| {
            let card = playable_card(game, player, &mv)?;
            let flipped = game.possible_cards_flipped(card, mv.x, mv.y).ok()?;
            let score = i32::try_from(flipped).unwrap_or(i32::MAX);
            Some((score, mv.with_score(score)))
        }))
    }
}
