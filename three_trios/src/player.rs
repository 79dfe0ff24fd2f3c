use serde::{Deserialize, Serialize};

/// A participant in the game.
///
/// `None` never takes a turn. It is the owner of cells without a card, and
/// the winner of a tied game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    A,
    B,
    None,
}

/// How a cell is shown by a graphical view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotColor {
    Red,
    Blue,
    Gray,
    Yellow,
}

impl Player {
    /// The player who moves first.
    pub const FIRST: Player = Player::A;

    /// The player whose turn comes after this one.
    pub fn next(self) -> Self {
        match self {
            Player::A => Player::B,
            _ => Player::A,
        }
    }

    pub fn color(self) -> SlotColor {
        match self {
            Player::A => SlotColor::Red,
            Player::B => SlotColor::Blue,
            Player::None => SlotColor::Gray,
        }
    }

    /// Index into per-player arrays.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "RED"),
            Player::B => write!(f, "BLUE"),
            Player::None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_alternate() {
        assert_eq!(Player::FIRST, Player::A);
        assert_eq!(Player::A.next(), Player::B);
        assert_eq!(Player::B.next(), Player::A);
        assert_eq!(Player::None.next(), Player::A);
    }

    #[test]
    fn display_names() {
        assert_eq!(Player::A.to_string(), "RED");
        assert_eq!(Player::B.to_string(), "BLUE");
        assert_eq!(Player::None.to_string(), "");
    }

    #[test]
    fn colors() {
        assert_eq!(Player::A.color(), SlotColor::Red);
        assert_eq!(Player::B.color(), SlotColor::Blue);
        assert_eq!(Player::None.color(), SlotColor::Gray);
    }
}
