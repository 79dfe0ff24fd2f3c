use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use three_trios::{AttackValue, Card, Grid, Slot, ValueTransform};

/// One card as written in a setup file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub name: String,
    pub up: AttackValue,
    pub down: AttackValue,
    pub right: AttackValue,
    pub left: AttackValue,
}

/// The contents of a setup file.
///
/// ```json
/// {
///   "grid": ["XCX", "CCX", "XCX"],
///   "cards": [{ "name": "c1", "up": "3", "down": "5", "right": "A", "left": "7" }]
/// }
/// ```
///
/// In the grid, `C` is a cell cards can be played to and `X` is a hole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub grid: Vec<String>,
    pub cards: Vec<CardConfig>,
}

impl SetupConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open setup file '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse setup file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn parse_grid(&self) -> anyhow::Result<Grid> {
        let mut rows = Vec::with_capacity(self.grid.len());
        for (row_idx, row) in self.grid.iter().enumerate() {
            let mut slots = Vec::with_capacity(row.len());
            for (col_idx, c) in row.chars().enumerate() {
                slots.push(match c {
                    'C' => Slot::Empty,
                    'X' => Slot::Hole,
                    _ => anyhow::bail!(
                        "Unknown cell '{}' in row {}, column {} of the grid",
                        c,
                        row_idx,
                        col_idx
                    ),
                });
            }
            rows.push(slots);
        }
        Ok(Grid::new(rows)?)
    }

    pub fn cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .map(|card| Card::new(&card.name, card.up, card.down, card.right, card.left))
            .collect()
    }
}

impl Default for SetupConfig {
    /// A small cross-shaped grid with four cells and six cards.
    fn default() -> Self {
        let card = |name: &str, [up, down, right, left]: [AttackValue; 4]| CardConfig {
            name: String::from(name),
            up,
            down,
            right,
            left,
        };
        use AttackValue::*;
        Self {
            grid: vec![
                String::from("XCX"),
                String::from("CCX"),
                String::from("XCX"),
            ],
            cards: vec![
                card("c1", [Three, Five, Ace, Seven]),
                card("c2", [Two, Nine, Ace, Ace]),
                card("c3", [One, Ace, Nine, One]),
                card("c4", [Five, Five, Five, Five]),
                card("c5", [One, Four, One, Seven]),
                card("c6", [Ace, Six, Four, Eight]),
            ],
        }
    }
}

/// Everything needed to deal a new game, checked once up front.
#[derive(Clone, Debug)]
pub struct Setup {
    pub grid: Grid,
    pub cards: Vec<Card>,
    /// Applied to every game in this order.
    pub variants: Vec<ValueTransform>,
}

impl Setup {
    pub fn new(config: &SetupConfig, variants: Vec<ValueTransform>) -> anyhow::Result<Self> {
        let grid = config.parse_grid()?;
        let cards = config.cards();
        if cards.len() <= grid.num_playable_cells() {
            anyhow::bail!(
                "The setup has {} cards for {} cells, but needs more cards than cells",
                cards.len(),
                grid.num_playable_cells()
            );
        }
        Ok(Self {
            grid,
            cards,
            variants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_setup_is_playable() {
        let setup = Setup::new(&SetupConfig::default(), vec![]).unwrap();
        assert_eq!(setup.grid.width(), 3);
        assert_eq!(setup.grid.height(), 3);
        assert_eq!(setup.grid.num_playable_cells(), 4);
        assert_eq!(setup.cards.len(), 6);
        assert_eq!(setup.cards[0].to_string(), "c1 3 5 A 7");
    }

    #[test]
    fn parses_json() {
        let json = r#"{
            "grid": ["CC", "XC"],
            "cards": [
                { "name": "a", "up": "1", "down": "2", "right": "3", "left": "A" },
                { "name": "b", "up": "4", "down": "5", "right": "6", "left": "7" },
                { "name": "c", "up": "8", "down": "9", "right": "A", "left": "1" },
                { "name": "d", "up": "1", "down": "1", "right": "1", "left": "1" }
            ]
        }"#;
        let config: SetupConfig = serde_json::from_str(json).unwrap();
        let setup = Setup::new(&config, vec![ValueTransform::Reverse]).unwrap();
        assert_eq!(setup.grid.get(0, 1), Some(&Slot::Hole));
        assert_eq!(setup.grid.num_playable_cells(), 3);
        assert_eq!(setup.cards[0].to_string(), "a 1 2 3 A");
        assert_eq!(setup.variants, [ValueTransform::Reverse]);
    }

    #[test]
    fn rejects_bad_setups() {
        let mut config = SetupConfig::default();
        config.grid[1] = String::from("CCY");
        assert!(config.parse_grid().is_err());

        let mut config = SetupConfig::default();
        config.grid[1] = String::from("CC");
        assert!(config.parse_grid().is_err());

        let mut config = SetupConfig::default();
        config.cards.truncate(4);
        assert!(Setup::new(&config, vec![]).is_err());

        let json = r#"{ "grid": ["C"], "cards": [{ "name": "a", "up": "0", "down": "1", "right": "1", "left": "1" }] }"#;
        assert!(serde_json::from_str::<SetupConfig>(json).is_err());
    }
}
