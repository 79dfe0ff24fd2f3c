use crate::{Game, Move, Player, Strategy};

/// Breaks the ties of `first` with `second`.
///
/// `second` only ever sees the moves `first` rated best, so the scores of
/// `first` are never mixed with those of `second`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombinedStrategy<S1, S2> {
    first: S1,
    second: S2,
}

impl<S1: Strategy, S2: Strategy> CombinedStrategy<S1, S2> {
    pub fn new(first: S1, second: S2) -> Self {
        Self { first, second }
    }
}

impl<S1: Strategy, S2: Strategy> Strategy for CombinedStrategy<S1, S2> {
    fn choose_from_options(&self, options: Vec<Move>, game: &Game, player: Player) -> Vec<Move> {
        let options = self.first.choose_from_options(options, game, player);
        self.second.choose_from_options(options, game, player)
    }
}
