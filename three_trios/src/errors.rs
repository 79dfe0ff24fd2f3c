/// The error type for [`Game::new()`](crate::Game::new) and
/// [`Grid::new()`](crate::Grid::new).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidSetup {
    EmptyGrid,
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
    NotEnoughCards {
        empty_cells: usize,
        cards: usize,
    },
}

impl std::error::Error for InvalidSetup {}

impl std::fmt::Display for InvalidSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSetup::EmptyGrid => write!(f, "The grid must be at least 1 by 1 in size"),
            InvalidSetup::RaggedGrid { row, len, expected } => write!(
                f,
                "Row {} of the grid has {} cells, but the first row has {}",
                row, len, expected
            ),
            InvalidSetup::NotEnoughCards { empty_cells, cards } => write!(
                f,
                "There must be more cards than empty cells, but there are {} cards for {} cells",
                cards, empty_cells
            ),
        }
    }
}

/// A caller passed an argument that does not fit the current game.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { x: usize, y: usize },
    CellUnavailable { x: usize, y: usize },
    HandIndexOutOfRange { hand_idx: usize, hand_size: usize },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { x, y } => {
                write!(f, "The coordinates ({}, {}) are outside of the grid", x, y)
            }
            IllegalPlacement::CellUnavailable { x, y } => {
                write!(f, "No card can be played to the cell at ({}, {})", x, y)
            }
            IllegalPlacement::HandIndexOutOfRange {
                hand_idx,
                hand_size,
            } => write!(
                f,
                "Hand index {} is out of range for a hand of {} cards",
                hand_idx, hand_size
            ),
        }
    }
}

/// An operation was called at a point in the game where it is not allowed.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalState {
    NotStarted,
    AlreadyStarted,
    GameOver,
    GameNotOver,
    RulesFrozen,
    TooManyListeners,
    UnpairedListener,
    NoLegalMoves,
}

impl std::error::Error for IllegalState {}

impl std::fmt::Display for IllegalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalState::NotStarted => write!(f, "The game has not started yet"),
            IllegalState::AlreadyStarted => write!(f, "The game has already started"),
            IllegalState::GameOver => write!(f, "The game is over"),
            IllegalState::GameNotOver => write!(f, "The game is not over yet"),
            IllegalState::RulesFrozen => {
                write!(f, "Rules cannot be changed once the game has started")
            }
            IllegalState::TooManyListeners => {
                write!(f, "Both players already have a listener")
            }
            IllegalState::UnpairedListener => {
                write!(
                    f,
                    "The game needs a listener for either both players or neither"
                )
            }
            IllegalState::NoLegalMoves => write!(f, "There are no legal moves"),
        }
    }
}

/// The error type for [`Game::place()`](crate::Game::place).
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    IllegalState(IllegalState),
    IllegalPlacement(IllegalPlacement),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalState(err) => Some(err),
            GameError::IllegalPlacement(err) => Some(err),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalState(_) => write!(f, "Cannot play a card right now"),
            GameError::IllegalPlacement(_) => write!(f, "Cannot play this card there"),
        }
    }
}

impl From<IllegalState> for GameError {
    fn from(err: IllegalState) -> Self {
        GameError::IllegalState(err)
    }
}

impl From<IllegalPlacement> for GameError {
    fn from(err: IllegalPlacement) -> Self {
        GameError::IllegalPlacement(err)
    }
}
