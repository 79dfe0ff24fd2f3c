use std::cmp::Ordering;

use crate::{AttackRule, AttackValue, Card, Direction, Player, SlotColor, ValueTransform};

/// The content of a single cell of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A cell that can never hold a card.
    Hole,
    /// A cell that is waiting for a card.
    Empty,
    /// A cell with a card on it.
    Card(Card),
}

impl Slot {
    pub fn can_play_card(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn owner(&self) -> Player {
        match self {
            Slot::Card(card) => card.owner(),
            _ => Player::None,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            Slot::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Changes the owner of a card; does nothing for other slots.
    pub fn switch_player(&mut self, player: Player) {
        if let Slot::Card(card) = self {
            card.switch_player(player);
        }
    }

    /// Whether this slot beats `other`, which lies in direction `dir` from it.
    ///
    /// Only cards can win a battle.
    pub fn battle(&self, other: &Slot, dir: Direction) -> bool {
        match self {
            Slot::Card(card) => card.battle(other, dir),
            _ => false,
        }
    }

    /// See [`Card::compare_attack_value_to()`]. Slots without a card always hold.
    pub fn compare_attack_value_to(
        &self,
        dir_attack_comes_from: Direction,
        incoming: AttackValue,
    ) -> Ordering {
        match self {
            Slot::Card(card) => card.compare_attack_value_to(dir_attack_comes_from, incoming),
            _ => Ordering::Greater,
        }
    }

    /// Increments the count of the card's owner, indexed by player.
    pub fn add_to_player_count(&self, counts: &mut [usize; 3]) {
        if let Slot::Card(card) = self {
            counts[card.owner().index()] += 1;
        }
    }

    pub(crate) fn add_rule(&mut self, rule: AttackRule) {
        if let Slot::Card(card) = self {
            card.add_rule(rule);
        }
    }

    pub(crate) fn add_transformer(&mut self, transform: ValueTransform) {
        if let Slot::Card(card) = self {
            card.add_transformer(transform);
        }
    }

    /// The character used for this slot in the text view.
    pub fn glyph(&self) -> char {
        match self {
            Slot::Hole => ' ',
            Slot::Empty => '_',
            Slot::Card(card) => card.owner().to_string().chars().next().unwrap_or('?'),
        }
    }

    pub fn color(&self) -> SlotColor {
        match self {
            Slot::Hole => SlotColor::Gray,
            Slot::Empty => SlotColor::Yellow,
            Slot::Card(card) => card.owner().color(),
        }
    }
}

impl From<Card> for Slot {
    fn from(card: Card) -> Self {
        Slot::Card(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn only_empty_cells_are_playable() {
        assert!(Slot::Empty.can_play_card());
        assert!(!Slot::Hole.can_play_card());
        assert!(!Slot::from(card!("c 1 1 1 1")).can_play_card());
    }

    #[test]
    fn non_cards_have_no_owner_and_never_win() {
        let mut hole = Slot::Hole;
        hole.switch_player(Player::A);
        assert_eq!(hole.owner(), Player::None);
        let target = Slot::from(card!("weak 1 1 1 1").with_owner(Player::B));
        assert!(!Slot::Empty.battle(&target, Direction::Right));
        assert!(!Slot::Hole.battle(&target, Direction::Right));
        assert_eq!(
            Slot::Empty.compare_attack_value_to(Direction::Left, AttackValue::Ace),
            Ordering::Greater
        );
    }

    #[test]
    fn switch_player_is_idempotent() {
        let mut slot = Slot::from(card!("c 1 1 1 1").with_owner(Player::A));
        slot.switch_player(Player::B);
        slot.switch_player(Player::B);
        assert_eq!(slot.owner(), Player::B);
    }

    #[test]
    fn counts_only_cards() {
        let mut counts = [0; 3];
        for slot in [
            Slot::Hole,
            Slot::Empty,
            Slot::from(card!("a 1 1 1 1").with_owner(Player::A)),
            Slot::from(card!("b 1 1 1 1").with_owner(Player::B)),
            Slot::from(card!("c 1 1 1 1").with_owner(Player::A)),
        ] {
            slot.add_to_player_count(&mut counts);
        }
        assert_eq!(counts, [2, 1, 0]);
    }

    #[test]
    fn copies_are_independent() {
        let original = Slot::from(card!("c 1 1 1 1").with_owner(Player::A));
        let mut copy = original.clone();
        copy.switch_player(Player::B);
        copy.add_transformer(ValueTransform::Reverse);
        assert_eq!(original.owner(), Player::A);
        assert!(original.card().unwrap().transforms().is_empty());
    }

    fn owned_by(player: Player) -> Slot {
        Slot::from(card!("c 1 1 1 1").with_owner(player))
    }

    #[test]
    fn glyphs() {
        assert_eq!(Slot::Hole.glyph(), ' ');
        assert_eq!(Slot::Empty.glyph(), '_');
        assert_eq!(owned_by(Player::A).glyph(), 'R');
        assert_eq!(owned_by(Player::B).glyph(), 'B');
    }

    #[test]
    fn colors() {
        assert_eq!(Slot::Hole.color(), SlotColor::Gray);
        assert_eq!(Slot::Empty.color(), SlotColor::Yellow);
        assert_eq!(owned_by(Player::A).color(), SlotColor::Red);
        assert_eq!(owned_by(Player::B).color(), SlotColor::Blue);
        assert_eq!(owned_by(Player::None).color(), SlotColor::Gray);
    }
}
