use std::cmp::Reverse;

use crate::{Game, Move, Player, Strategy};

use super::retain_best;

/// Plays the move that leaves the opponent with the worst best answer,
/// assuming the opponent plays by `opponent`.
///
/// The score of a move is the score of the opponent's answer according to
/// `opponent`, so lower is better here. A move after which the opponent
/// cannot answer at all scores [`i32::MIN`].
///
/// Every option is tried out in its own copy of the game and then answered
/// by a full run of the opponent strategy, so this is slower than the
/// opponent strategy by a factor of the number of options. On large grids
/// with large hands that adds up quickly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimax<S> {
    opponent: S,
}

impl<S: Strategy> Minimax<S> {
    pub fn new(opponent: S) -> Self {
        Self { opponent }
    }

    /// The opponent's best answer to `mv`, or `None` if `mv` cannot be played.
    fn answer(&self, mv: &Move, game: &Game, player: Player) -> Option<i32> {
        let mut simulation = game.simulation(player);
        simulation.place(mv.hand_idx, mv.x, mv.y).ok()?;
        Some(
            self.opponent
                .choose_move(&simulation, player.next())
                .map_or(i32::MIN, |answer| answer.score),
        )
    }
}

impl<S: Strategy> Strategy for Minimax<S> {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        retain_best(options.into_iter().filter_map(|mv| {
            let score = self.answer(&mv, game, player)?;
            Some((Reverse(score), mv.with_score(score)))
        }))
    }
}
