use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The strength of one side of a [card](crate::Card).
///
/// Values range from 1 to 10, where 10 is written as `A`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttackValue {
    #[serde(rename = "1")]
    One = 1,
    #[serde(rename = "2")]
    Two = 2,
    #[serde(rename = "3")]
    Three = 3,
    #[serde(rename = "4")]
    Four = 4,
    #[serde(rename = "5")]
    Five = 5,
    #[serde(rename = "6")]
    Six = 6,
    #[serde(rename = "7")]
    Seven = 7,
    #[serde(rename = "8")]
    Eight = 8,
    #[serde(rename = "9")]
    Nine = 9,
    #[serde(rename = "A")]
    Ace = 10,
}

impl AttackValue {
    /// All attack values in ascending order.
    pub const ALL: [AttackValue; 10] = [
        AttackValue::One,
        AttackValue::Two,
        AttackValue::Three,
        AttackValue::Four,
        AttackValue::Five,
        AttackValue::Six,
        AttackValue::Seven,
        AttackValue::Eight,
        AttackValue::Nine,
        AttackValue::Ace,
    ];

    /// The numeric strength, between 1 and 10.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns `None` if `value` is not between 1 and 10.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

impl std::fmt::Display for AttackValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackValue::Ace => write!(f, "A"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`AttackValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackValueFromStrErr {
    NotANumber,
    OutOfRange,
}

impl std::error::Error for AttackValueFromStrErr {}

impl std::fmt::Display for AttackValueFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackValueFromStrErr::NotANumber => {
                write!(f, "Attack value must be a number from 1 to 9, or A")
            }
            AttackValueFromStrErr::OutOfRange => write!(f, "Attack value must be between 1 and 10"),
        }
    }
}

impl FromStr for AttackValue {
    type Err = AttackValueFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "A" {
            return Ok(AttackValue::Ace);
        }
        let value: u8 = s.parse().map_err(|_| AttackValueFromStrErr::NotANumber)?;
        AttackValue::from_value(value).ok_or(AttackValueFromStrErr::OutOfRange)
    }
}

/// One of the four sides of a card, or one of the four neighbors of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The order in which neighbors are battled.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The step `(dx, dy)` to the neighbor in this direction. `y` grows downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Compares two attack values; `Greater` means the first one wins.
///
/// Cards use [`default_rule`] unless another rule is registered before the game starts.
pub type AttackRule = fn(AttackValue, AttackValue) -> Ordering;

/// Plain numeric comparison.
pub fn default_rule(a: AttackValue, b: AttackValue) -> Ordering {
    a.cmp(&b)
}

/// A map applied to both sides of a battle before they are compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueTransform {
    /// `v` becomes `11 - v`, so 1 beats A.
    Reverse,
    /// An A becomes a 1, everything else grows by one.
    FallenAce,
}

impl ValueTransform {
    pub fn apply(self, value: AttackValue) -> AttackValue {
        let transformed = match self {
            ValueTransform::Reverse => 11 - value.value(),
            ValueTransform::FallenAce if value == AttackValue::Ace => 1,
            ValueTransform::FallenAce => value.value() + 1,
        };
        AttackValue::ALL[usize::from(transformed) - 1]
    }
}
