use crate::{Card, Direction, Game, Move, Player, Strategy};

use super::{playable_card, retain_best};

/// Plays where the opponent's hand has the fewest ways of flipping the card
/// back.
///
/// For every side of the card next to a cell the opponent could still play
/// to, each opponent card that is stronger on the facing side counts as one
/// threat. The move with the fewest threats wins, and is reported with a
/// score of `4 * opponent hand size + 1 - threats`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastChanceOfBeingFlipped;

impl LeastChanceOfBeingFlipped {
    fn threats(card: &Card, x: usize, y: usize, game: &Game, opponent_hand: &[Card]) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                game.grid()
                    .neighbor(x, y, dir)
                    .is_some_and(|(nx, ny)| game.is_move_legal(nx, ny))
            })
            .map(|dir| {
                let own = card.value(dir);
                opponent_hand
                    .iter()
                    .filter(|other| other.value(dir.opposite()) > own)
                    .count()
            })
            .sum()
    }
}

impl Strategy for LeastChanceOfBeingFlipped {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        let opponent_hand = game.hand(player.next());
        let worst = 4 * opponent_hand.len() + 1;
        retain_best(options.into_iter().filter_map(|mv| {
            let card = playable_card(game, player, &mv)?;
            let threats = Self::threats(card, mv.x, mv.y, game, opponent_hand);
            let score = i32::try_from(worst - threats).unwrap_or(i32::MAX);
            Some((score, mv.with_score(score)))
        }))
    }
}
