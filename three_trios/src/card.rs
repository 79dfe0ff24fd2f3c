use std::cmp::Ordering;
use std::str::FromStr;

use crate::{
    default_rule, AttackRule, AttackValue, AttackValueFromStrErr, Direction, Player, Slot,
    ValueTransform,
};

/// A card with a strength on each of its four sides.
///
/// The owner is the only part of a card that changes during a game. The
/// rule and the transforms are fixed before the game starts, see
/// [`Game::add_rule()`](crate::Game::add_rule).
#[derive(Clone, Debug)]
pub struct Card {
    name: String,
    owner: Player,
    /// Indexed by [`Direction`].
    values: [AttackValue; 4],
    rule: AttackRule,
    /// Applied in order to both sides of every comparison.
    transforms: Vec<ValueTransform>,
}

impl Card {
    /// Creates an unowned card with the default rule and no transforms.
    pub fn new(
        name: impl Into<String>,
        up: AttackValue,
        down: AttackValue,
        right: AttackValue,
        left: AttackValue,
    ) -> Self {
        let mut values = [AttackValue::One; 4];
        values[Direction::Up as usize] = up;
        values[Direction::Down as usize] = down;
        values[Direction::Left as usize] = left;
        values[Direction::Right as usize] = right;
        Self {
            name: name.into(),
            owner: Player::None,
            values,
            rule: default_rule,
            transforms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Player) -> Self {
        self.owner = owner;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    /// The strength of the side facing `dir`.
    pub fn value(&self, dir: Direction) -> AttackValue {
        self.values[dir as usize]
    }

    pub fn transforms(&self) -> &[ValueTransform] {
        &self.transforms
    }

    /// Reassigns the owner, even if it is already `player`.
    pub fn switch_player(&mut self, player: Player) {
        self.owner = player;
    }

    /// Replaces the comparison rule.
    pub fn add_rule(&mut self, rule: AttackRule) {
        self.rule = rule;
    }

    /// Appends a transform, to be applied after the existing ones.
    pub fn add_transformer(&mut self, transform: ValueTransform) {
        self.transforms.push(transform);
    }

    /// Compares this card, attacked from `dir_attack_comes_from`, to the
    /// attacker's `incoming` value. `Greater` means this card holds.
    ///
    /// The defending side is the one facing the attacker, i.e. the opposite of
    /// the direction the attack travels in.
    pub fn compare_attack_value_to(
        &self,
        dir_attack_comes_from: Direction,
        incoming: AttackValue,
    ) -> Ordering {
        let mut own = self.value(dir_attack_comes_from.opposite());
        let mut other = incoming;
        for transform in &self.transforms {
            own = transform.apply(own);
            other = transform.apply(other);
        }
        (self.rule)(own, other)
    }

    /// Whether this card beats `other`, which lies in direction `dir` from it.
    pub fn battle(&self, other: &Slot, dir: Direction) -> bool {
        other.compare_attack_value_to(dir, self.value(dir)) == Ordering::Less
    }
}

/// Rule and transforms are not part of a card's identity.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner == other.owner && self.values == other.values
    }
}

impl Eq for Card {}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name,
            self.value(Direction::Up),
            self.value(Direction::Down),
            self.value(Direction::Right),
            self.value(Direction::Left)
        )
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    WrongNumberOfFields { found: usize },
    InvalidValue(AttackValueFromStrErr),
}

impl std::error::Error for CardFromStrErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CardFromStrErr::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::WrongNumberOfFields { found } => write!(
                f,
                "A card needs a name and four values (up, down, right, left), found {} fields",
                found
            ),
            CardFromStrErr::InvalidValue(_) => write!(f, "A card has an invalid attack value"),
        }
    }
}

impl From<AttackValueFromStrErr> for CardFromStrErr {
    fn from(err: AttackValueFromStrErr) -> Self {
        CardFromStrErr::InvalidValue(err)
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses `"<name> <up> <down> <right> <left>"`, e.g. `"dragon 9 3 A 1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[name, up, down, right, left] = fields.as_slice() else {
            return Err(CardFromStrErr::WrongNumberOfFields {
                found: fields.len(),
            });
        };
        Ok(Card::new(
            name,
            up.parse()?,
            down.parse()?,
            right.parse()?,
            left.parse()?,
        ))
    }
}

/// Shorthand for creating unowned cards from their text form.
///
/// The values are given in the order up, down, right, left.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use three_trios::{card, AttackValue, Direction};
/// let card = card!("wyvern 3 A 7 1");
/// assert_eq!(card.value(Direction::Down), AttackValue::Ace);
/// assert_eq!(card.value(Direction::Left), AttackValue::One);
/// ```
#[macro_export]
macro_rules! card {
    ($s:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($s)
            .expect("Invalid card given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed(a: AttackValue, b: AttackValue) -> Ordering {
        b.cmp(&a)
    }

    #[test]
    fn parse_and_display() {
        let card = card!("c1 3 5 A 7");
        assert_eq!(card.name(), "c1");
        assert_eq!(card.value(Direction::Up), AttackValue::Three);
        assert_eq!(card.value(Direction::Down), AttackValue::Five);
        assert_eq!(card.value(Direction::Right), AttackValue::Ace);
        assert_eq!(card.value(Direction::Left), AttackValue::Seven);
        assert_eq!(card.owner(), Player::None);
        assert_eq!(card.to_string(), "c1 3 5 A 7");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "c1 3 5 A".parse::<Card>(),
            Err(CardFromStrErr::WrongNumberOfFields { found: 4 })
        );
        assert_eq!(
            "c1 3 5 A 0".parse::<Card>(),
            Err(CardFromStrErr::InvalidValue(
                AttackValueFromStrErr::OutOfRange
            ))
        );
    }

    #[test]
    fn defender_uses_the_side_facing_the_attacker() {
        let attacker = card!("atk 1 1 9 1").with_owner(Player::A);
        let defender = card!("def 1 1 1 3").with_owner(Player::B);
        // The attack travels right, so it hits the defender's left side.
        assert_eq!(
            defender.compare_attack_value_to(Direction::Right, AttackValue::Nine),
            Ordering::Less
        );
        let (attacking, defending) = (Slot::Card(attacker.clone()), Slot::Card(defender.clone()));
        assert!(attacker.battle(&defending, Direction::Right));
        assert!(!defender.battle(&attacking, Direction::Left));
    }

    #[test]
    fn ties_do_not_flip() {
        let left = card!("l 1 1 5 1");
        let right = card!("r 1 1 1 5");
        assert!(!left.battle(&Slot::Card(right), Direction::Right));
    }

    #[test]
    fn non_cards_are_never_beaten() {
        let card = card!("strong A A A A");
        assert!(!card.battle(&Slot::Empty, Direction::Up));
        assert!(!card.battle(&Slot::Hole, Direction::Down));
    }

    #[test]
    fn custom_rule_inverts_battles() {
        let strong = card!("strong 1 1 9 1");
        let mut weak = card!("weak 1 1 1 2");
        assert!(strong.battle(&Slot::Card(weak.clone()), Direction::Right));
        weak.add_rule(reversed);
        assert!(!strong.battle(&Slot::Card(weak), Direction::Right));
    }

    #[test]
    fn transforms_apply_in_order() {
        // Defender's left side is 4, attacker brings an A.
        let mut defender = card!("def 1 1 1 4");
        assert_eq!(
            defender.compare_attack_value_to(Direction::Right, AttackValue::Ace),
            Ordering::Less
        );
        // Fallen ace: 4 -> 5, A -> 1.
        defender.add_transformer(ValueTransform::FallenAce);
        assert_eq!(
            defender.compare_attack_value_to(Direction::Right, AttackValue::Ace),
            Ordering::Greater
        );
        // Then reverse: 5 -> 6, 1 -> A.
        defender.add_transformer(ValueTransform::Reverse);
        assert_eq!(
            defender.compare_attack_value_to(Direction::Right, AttackValue::Ace),
            Ordering::Less
        );
        assert_eq!(
            defender.transforms(),
            &[ValueTransform::FallenAce, ValueTransform::Reverse]
        );
    }

    #[test]
    fn equality_ignores_rules() {
        let mut a = card!("c 1 2 3 4");
        let b = card!("c 1 2 3 4");
        a.add_transformer(ValueTransform::Reverse);
        assert_eq!(a, b);
        assert_ne!(a.with_owner(Player::A), b);
    }
}
