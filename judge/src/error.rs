use three_trios::{GameError, IllegalState, Move};

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalMove {
    /// The strategy found nothing to play although the game is not over.
    NoMoveChosen(IllegalState),
    /// The game did not accept the move the strategy chose.
    Rejected { mv: Move, err: GameError },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::NoMoveChosen(err) => Some(err),
            IllegalMove::Rejected { err, .. } => Some(err),
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NoMoveChosen(_) => write!(f, "The strategy did not choose a move"),
            IllegalMove::Rejected { mv, err: _ } => write!(
                f,
                "Tried to play the card at hand index {} to ({}, {})",
                mv.hand_idx, mv.x, mv.y
            ),
        }
    }
}

/// The error type for parsing a strategy name.
#[derive(Debug, PartialEq, Eq)]
pub enum StrategyNameErr {
    Unknown(String),
    Empty,
}

impl std::error::Error for StrategyNameErr {}

impl std::fmt::Display for StrategyNameErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyNameErr::Unknown(name) => write!(
                f,
                "Unknown strategy '{}', expected one of most-flipped, corners, least-chance, minimax-<strategy> or <strategy>+<strategy>",
                name
            ),
            StrategyNameErr::Empty => write!(f, "The strategy name is empty"),
        }
    }
}
