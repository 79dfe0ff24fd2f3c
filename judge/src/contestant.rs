use three_trios::{
    CombinedStrategy, Game, GoForCorners, IllegalState, LeastChanceOfBeingFlipped, Minimax,
    MostFlipped, Move, Player, Strategy,
};

use crate::error::StrategyNameErr;

/// A named strategy taking part in a matchup.
pub struct Contestant {
    pub name: String,
    strategy: Box<dyn Strategy>,
}

impl Contestant {
    /// See [`parse_strategy()`] for the accepted names.
    pub fn new(name: &str) -> Result<Self, StrategyNameErr> {
        Ok(Self {
            name: String::from(name),
            strategy: parse_strategy(name)?,
        })
    }

    pub fn choose_move(&self, game: &Game, player: Player) -> Result<Move, IllegalState> {
        self.strategy.choose_move(game, player)
    }
}

/// Builds a strategy from its name.
///
/// The basic strategies are `most-flipped`, `corners` and `least-chance`.
/// `minimax-<name>` plays against the strategy `<name>`, and `<a>+<b>` breaks
/// the ties of `<a>` with `<b>`. `+` binds loosest, so
/// `minimax-corners+most-flipped` combines a minimax with `most-flipped`.
pub fn parse_strategy(name: &str) -> Result<Box<dyn Strategy>, StrategyNameErr> {
    if let Some((first, second)) = name.split_once('+') {
        return Ok(Box::new(CombinedStrategy::new(
            parse_strategy(first)?,
            parse_strategy(second)?,
        )));
    }
    if let Some(opponent) = name.strip_prefix("minimax-") {
        return Ok(Box::new(Minimax::new(parse_strategy(opponent)?)));
    }
    match name.trim() {
        "" => Err(StrategyNameErr::Empty),
        "most-flipped" => Ok(Box::new(MostFlipped)),
        "corners" => Ok(Box::new(GoForCorners)),
        "least-chance" => Ok(Box::new(LeastChanceOfBeingFlipped)),
        other => Err(StrategyNameErr::Unknown(String::from(other))),
    }
}
