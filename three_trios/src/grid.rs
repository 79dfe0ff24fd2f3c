use std::ops::Deref;

use crate::{Card, Direction, InvalidSetup, Player, Slot};

/// A rectangular playing field of [`Slot`]s.
///
/// Coordinates are `(x, y)` with `(0, 0)` at the top left; `x` is the
/// column and `y` the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major.
    slots: Vec<Slot>,
}

impl Grid {
    /// Creates a grid from its rows, top to bottom.
    pub fn new(rows: Vec<Vec<Slot>>) -> Result<Self, InvalidSetup> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(InvalidSetup::EmptyGrid);
        }
        let height = rows.len();
        let mut slots = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(InvalidSetup::RaggedGrid {
                    row: row_idx,
                    len: row.len(),
                    expected: width,
                });
            }
            slots.extend(row);
        }
        Ok(Self {
            width,
            height,
            slots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Slot> {
        self.is_in_bounds(x, y)
            .then(|| &self.slots[self.index(x, y)])
    }

    /// The coordinates of the neighbor of `(x, y)` in direction `dir`, if it is on the grid.
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.is_in_bounds(nx, ny).then_some((nx, ny))
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| (idx % self.width, idx / self.width, slot))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> + '_ {
        self.slots.chunks(self.width)
    }

    /// The number of cells a card can still be played to.
    pub fn num_playable_cells(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.can_play_card())
            .count()
    }

    /// The number of cards on the grid owned by each player, indexed by player.
    pub fn player_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for slot in &self.slots {
            slot.add_to_player_count(&mut counts);
        }
        counts
    }

    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }

    /// Puts `card` on the cell, replacing what was there.
    ///
    /// Panics if the coordinates are out of bounds.
    pub(crate) fn put(&mut self, x: usize, y: usize, card: Card) {
        let idx = self.index(x, y);
        self.slots[idx] = Slot::Card(card);
    }

    /// Lets the card at `(x, y)` battle its neighbors and flips every card
    /// it beats over to `mover`, continuing from each flipped card.
    ///
    /// A cell is processed at most once, and a neighbor is never flipped if
    /// it already belongs to the attacking card's owner. Returns the number of
    /// flipped cards.
    pub(crate) fn resolve_battles(&mut self, x: usize, y: usize, mover: Player) -> usize {
        let mut visited = vec![false; self.slots.len()];
        self.battle_neighbors(x, y, mover, &mut visited)
    }

    fn battle_neighbors(
        &mut self,
        x: usize,
        y: usize,
        mover: Player,
        visited: &mut [bool],
    ) -> usize {
        let idx = self.index(x, y);
        visited[idx] = true;
        let mut flipped = 0;
        for dir in Direction::ALL {
            let Some((nx, ny)) = self.neighbor(x, y, dir) else {
                continue;
            };
            let neighbor_idx = self.index(nx, ny);
            if visited[neighbor_idx] {
                continue;
            }
            let attacker = &self.slots[idx];
            let defender = &self.slots[neighbor_idx];
            if attacker.battle(defender, dir) && defender.owner() != attacker.owner() {
                self.slots[neighbor_idx].switch_player(mover);
                flipped += 1 + self.battle_neighbors(nx, ny, mover, visited);
            }
        }
        flipped
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl Deref for Grid {
    type Target = [Slot];

    fn deref(&self) -> &Self::Target {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::BattleInput;
    use crate::card;

    fn owned(card: Card, owner: Player) -> Slot {
        Slot::Card(card.with_owner(owner))
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(Grid::new(vec![]), Err(InvalidSetup::EmptyGrid));
        assert_eq!(Grid::new(vec![vec![]]), Err(InvalidSetup::EmptyGrid));
        assert_eq!(
            Grid::new(vec![vec![Slot::Empty, Slot::Empty], vec![Slot::Empty]]),
            Err(InvalidSetup::RaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn coordinates_are_column_then_row() {
        let grid = Grid::new(vec![
            vec![Slot::Empty, Slot::Hole, Slot::Empty],
            vec![Slot::Hole, Slot::Empty, Slot::Empty],
        ])
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some(&Slot::Hole));
        assert_eq!(grid.get(0, 1), Some(&Slot::Hole));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.num_playable_cells(), 4);
        assert_eq!(grid.neighbor(0, 0, Direction::Up), None);
        assert_eq!(grid.neighbor(0, 0, Direction::Left), None);
        assert_eq!(grid.neighbor(2, 1, Direction::Right), None);
        assert_eq!(grid.neighbor(1, 0, Direction::Down), Some((1, 1)));
        let coords: Vec<_> = grid.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn basic_flip() {
        let mut grid = Grid::new(vec![vec![
            owned(card!("atk 1 1 9 1"), Player::A),
            owned(card!("def 1 1 1 3"), Player::B),
        ]])
        .unwrap();
        assert_eq!(grid.resolve_battles(0, 0, Player::A), 1);
        assert_eq!(grid.get(1, 0).unwrap().owner(), Player::A);
    }

    #[test]
    fn chain_reaction_flips_along_the_line() {
        // first beats second with 9 against 2, then second beats third with
        // 8 against 2.
        let mut grid = Grid::new(vec![vec![
            owned(card!("first 1 1 9 1"), Player::A),
            owned(card!("second 1 1 8 2"), Player::B),
            owned(card!("third 1 1 1 2"), Player::B),
        ]])
        .unwrap();
        assert_eq!(grid.resolve_battles(0, 0, Player::A), 2);
        assert!(grid.iter().all(|slot| slot.owner() == Player::A));
    }

    #[test]
    fn chain_flips_to_the_mover() {
        // A card of player B that is beaten while the chain runs through a
        // card owned by B on behalf of A still ends up with A.
        let mut grid = Grid::new(vec![vec![
            owned(card!("placed 1 1 9 1"), Player::A),
            owned(card!("mid 1 1 9 1"), Player::B),
            owned(card!("end 1 1 1 1"), Player::B),
        ]])
        .unwrap();
        assert_eq!(grid.resolve_battles(0, 0, Player::A), 2);
        assert_eq!(grid.get(2, 0).unwrap().owner(), Player::A);
    }

    #[test]
    fn no_self_flip() {
        let mut grid = Grid::new(vec![vec![
            owned(card!("strong 1 1 A 1"), Player::A),
            owned(card!("weak 1 1 1 1"), Player::A),
        ]])
        .unwrap();
        assert_eq!(grid.resolve_battles(0, 0, Player::A), 0);
        assert_eq!(grid.get(1, 0).unwrap().owner(), Player::A);
    }

    #[test]
    fn holes_and_empty_cells_stop_chains() {
        let mut grid = Grid::new(vec![
            vec![
                owned(card!("placed A A A A"), Player::A),
                Slot::Hole,
                owned(card!("far 1 1 1 1"), Player::B),
            ],
            vec![Slot::Empty, Slot::Empty, Slot::Empty],
        ])
        .unwrap();
        assert_eq!(grid.resolve_battles(0, 0, Player::A), 0);
        assert_eq!(grid.get(2, 0).unwrap().owner(), Player::B);
    }

    quickcheck! {
        fn resolution_conserves_cards_and_flips_to_the_mover(input: BattleInput) -> bool {
            let BattleInput { mut grid, x, y } = input;
            let cells = grid.width() * grid.height();
            let mover = grid.get(x, y).unwrap().owner();
            let before = grid.player_counts();
            let flipped = grid.resolve_battles(x, y, mover);
            let after = grid.player_counts();
            flipped < cells
                && before.iter().sum::<usize>() == after.iter().sum::<usize>()
                && after[mover as usize] == before[mover as usize] + flipped
        }
    }
}
