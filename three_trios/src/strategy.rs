mod combined;
mod corners;
mod least_chance;
mod minimax;
mod most_flipped;

pub use combined::*;
pub use corners::*;
pub use least_chance::*;
pub use minimax::*;
pub use most_flipped::*;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Card, Game, IllegalState, Player};

/// A candidate move: play the card at `hand_idx` to `(x, y)`.
///
/// The score is assigned by the strategy that produced the move, and its
/// meaning depends on that strategy. Scores of different strategies are not
/// comparable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub hand_idx: usize,
    pub x: usize,
    pub y: usize,
    pub score: i32,
}

impl Move {
    pub fn new(hand_idx: usize, x: usize, y: usize, score: i32) -> Self {
        Self {
            hand_idx,
            x,
            y,
            score,
        }
    }

    #[must_use]
    pub fn with_score(self, score: i32) -> Self {
        Self { score, ..self }
    }
}

/// A way of picking a move that always finds one if any move is legal.
///
/// Strategies only read the game. Ties are broken by position: the move
/// furthest up, then furthest left, then with the lowest hand index wins.
pub trait Strategy {
    /// Returns the moves among `options` that this strategy rates best, in
    /// the order they appear in `options`.
    ///
    /// Options whose cell is not playable are dropped.
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move>;

    /// The best of all legal moves of `player`.
    fn all_best_move_candidates(&self, game: &Game, player: Player) -> Vec<Move> {
        self.choose_from_options(legal_moves(game, player), game, player)
    }

    /// The first of the best moves of `player`.
    fn choose_move(&self, game: &Game, player: Player) -> Result<Move, IllegalState> {
        self.all_best_move_candidates(game, player)
            .into_iter()
            .next()
            .ok_or(IllegalState::NoLegalMoves)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        (**self).choose_from_options(options, game, player)
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        (**self).choose_from_options(options, game, player)
    }
}

/// Every move `player` can make, with a score of 0.
///
/// Sorted by row, then column, then hand index.
pub fn legal_moves(game: &Game, player: Player) -> Vec<Move> {
    let hand_size = game.hand(player).len();
    game.grid()
        .cells()
        .filter(|(_, _, slot)| slot.can_play_card())
        .flat_map(|(x, y, _)| (0..hand_size).map(move |hand_idx| Move::new(hand_idx, x, y, 0)))
        .collect()
}

/// The card `mv` would play, if `mv` is still legal for `player`.
pub(crate) fn playable_card<'g>(game: &'g Game, player: Player, mv: &Move) -> Option<&'g Card> {
    if !game.is_move_legal(mv.x, mv.y) {
        return None;
    }
    game.hand(player).get(mv.hand_idx)
}

/// Keeps the moves with the greatest rank, in their original order.
pub(crate) fn retain_best<K: Ord>(ranked: impl IntoIterator<Item = (K, Move)>) -> Vec<Move> {
    let mut best: Option<K> = None;
    let mut moves = Vec::new();
    for (rank, mv) in ranked {
        match best.as_ref().map(|top| rank.cmp(top)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => moves.push(mv),
            Some(Ordering::Greater) | None => {
                best = Some(rank);
                moves.clear();
                moves.push(mv);
            }
        }
    }
    moves
}
