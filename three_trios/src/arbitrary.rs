use quickcheck::{Arbitrary, Gen};

use crate::{AttackValue, Card, Direction, Grid, Player, Slot};

fn dimension(g: &mut Gen) -> usize {
    usize::arbitrary(g) % 4 + 1
}

/// A grid with cards owned by A or B, and the coordinates of one of the
/// cards to start battle resolution from.
#[derive(Clone, Debug)]
pub struct BattleInput {
    pub grid: Grid,
    pub x: usize,
    pub y: usize,
}

impl Arbitrary for BattleInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let (width, height) = (dimension(g), dimension(g));
        let x = usize::arbitrary(g) % width;
        let y = usize::arbitrary(g) % height;
        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let owner = *g.choose(&[Player::A, Player::B]).unwrap();
                        let is_start = (col, row) == (x, y);
                        match u8::arbitrary(g) % 5 {
                            _ if is_start => Slot::Card(Card::arbitrary(g).with_owner(owner)),
                            0 => Slot::Hole,
                            1 => Slot::Empty,
                            _ => Slot::Card(Card::arbitrary(g).with_owner(owner)),
                        }
                    })
                    .collect()
            })
            .collect();
        BattleInput {
            grid: Grid::new(rows).unwrap(),
            x,
            y,
        }
    }
}

/// A grid of holes and at least one empty cell, together with enough
/// unowned cards to fill it.
#[derive(Clone, Debug)]
pub struct GameInput {
    pub grid: Grid,
    pub cards: Vec<Card>,
    pub seed: u64,
}

impl Arbitrary for GameInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let (width, height) = (dimension(g), dimension(g));
        let mut rows: Vec<Vec<Slot>> = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| {
                        if u8::arbitrary(g) % 4 == 0 {
                            Slot::Hole
                        } else {
                            Slot::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        rows[0][0] = Slot::Empty;
        let grid = Grid::new(rows).unwrap();
        let num_cards = grid.num_playable_cells() + 1 + usize::arbitrary(g) % 3;
        let cards = (0..num_cards).map(|_| Card::arbitrary(g)).collect();
        GameInput {
            grid,
            cards,
            seed: u64::arbitrary(g),
        }
    }
}

impl Arbitrary for AttackValue {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&AttackValue::ALL).unwrap()
    }
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        let name = format!("card{}", u16::arbitrary(g));
        Card::new(
            name,
            AttackValue::arbitrary(g),
            AttackValue::arbitrary(g),
            AttackValue::arbitrary(g),
            AttackValue::arbitrary(g),
        )
    }
}
