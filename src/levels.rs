//! Bundled difficulty tiers.
//!
//! The catalogue is immutable: it is built from constant tables on first
//! access and shared for the rest of the process.
//!
//! ```
//! use u_puzzle::levels::{knapsack_level, tour_level, Difficulty};
//!
//! let easy = knapsack_level(Difficulty::Easy);
//! assert_eq!(easy.capacity(), 15);
//! assert_eq!(easy.items().len(), 4);
//! assert_eq!(tour_level(Difficulty::Hard).cities().len(), 6);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::models::{City, Item, KnapsackInstance, TourInstance};

/// A difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The tier unlocked after this one, if any.
    pub fn next(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// (name, value, weight); ids are the 1-based position.
type ItemRow = (&'static str, i64, i64);
/// (name, x, y); ids are the 1-based position.
type CityRow = (&'static str, f64, f64);

const KNAPSACK_TABLES: [(i64, &[ItemRow]); 3] = [
    (
        15,
        &[
            ("Ruby Ring", 100, 1),
            ("Gold Coin", 60, 2),
            ("Silver Chalice", 120, 4),
            ("Magic Scroll", 80, 3),
        ],
    ),
    (
        20,
        &[
            ("Diamond Sword", 200, 5),
            ("Golden Crown", 180, 4),
            ("Ancient Rune", 150, 3),
            ("Mystic Orb", 120, 2),
            ("Emerald Necklace", 160, 4),
            ("Crystal Wand", 90, 2),
        ],
    ),
    (
        25,
        &[
            ("Legendary Armor", 300, 8),
            ("Phoenix Feather", 250, 1),
            ("Dragon Scale", 220, 6),
            ("Elven Bow", 180, 4),
            ("Mithril Chain", 200, 5),
            ("Spell Tome", 160, 3),
            ("Holy Grail", 280, 7),
            ("Star Fragment", 150, 2),
        ],
    ),
];

const TOUR_TABLES: [&[CityRow]; 3] = [
    &[
        ("Startholm", 50.0, 50.0),
        ("Midgarde", 80.0, 30.0),
        ("Nordheim", 70.0, 80.0),
        ("Westport", 30.0, 70.0),
    ],
    &[
        ("Capital", 60.0, 40.0),
        ("Eastport", 90.0, 60.0),
        ("Northwatch", 50.0, 20.0),
        ("Southgate", 40.0, 90.0),
        ("Westwind", 20.0, 50.0),
    ],
    &[
        ("Dragonspire", 50.0, 50.0),
        ("Ironhold", 80.0, 30.0),
        ("Frostpeak", 60.0, 20.0),
        ("Goldenhaven", 90.0, 70.0),
        ("Shadowmere", 30.0, 80.0),
        ("Stormwind", 20.0, 40.0),
    ],
];

struct Catalogue {
    knapsack: Vec<KnapsackInstance>,
    tour: Vec<TourInstance>,
}

fn catalogue() -> &'static Catalogue {
    static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
    CATALOGUE.get_or_init(|| Catalogue {
        knapsack: KNAPSACK_TABLES
            .iter()
            .map(|(capacity, rows)| {
                let items = rows
                    .iter()
                    .enumerate()
                    .map(|(i, &(name, value, weight))| {
                        Item::new((i + 1).to_string(), name, value, weight)
                    })
                    .collect();
                KnapsackInstance::new(items, *capacity)
            })
            .collect(),
        tour: TOUR_TABLES
            .iter()
            .map(|rows| {
                let cities = rows
                    .iter()
                    .enumerate()
                    .map(|(i, &(name, x, y))| City::new((i + 1).to_string(), name, x, y))
                    .collect();
                TourInstance::new(cities)
            })
            .collect(),
    })
}

/// The bundled knapsack level for a tier.
pub fn knapsack_level(difficulty: Difficulty) -> &'static KnapsackInstance {
    &catalogue().knapsack[difficulty.index()]
}

/// The bundled tour level for a tier.
pub fn tour_level(difficulty: Difficulty) -> &'static TourInstance {
    &catalogue().tour[difficulty.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty(_))
        ));
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_progression() {
        assert_eq!(Difficulty::Easy.next(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::Medium.next(), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.next(), None);
    }

    #[test]
    fn test_level_sizes() {
        let sizes: Vec<(usize, usize)> = Difficulty::ALL
            .iter()
            .map(|&d| (knapsack_level(d).items().len(), tour_level(d).cities().len()))
            .collect();
        assert_eq!(sizes, vec![(4, 4), (6, 5), (8, 6)]);
    }

    #[test]
    fn test_levels_are_valid() {
        for d in Difficulty::ALL {
            assert!(knapsack_level(d).validate().is_ok(), "knapsack {d}");
            assert!(tour_level(d).validate().is_ok(), "tour {d}");
        }
    }

    #[test]
    fn test_easy_data() {
        let easy = knapsack_level(Difficulty::Easy);
        let weights: Vec<i64> = easy.items().iter().map(Item::weight).collect();
        let values: Vec<i64> = easy.items().iter().map(Item::value).collect();
        assert_eq!(weights, vec![1, 2, 4, 3]);
        assert_eq!(values, vec![100, 60, 120, 80]);

        let start = &tour_level(Difficulty::Easy).cities()[0];
        assert_eq!(start.name(), "Startholm");
        assert_eq!((start.x(), start.y()), (50.0, 50.0));
    }

    #[test]
    fn test_catalogue_shared() {
        assert!(std::ptr::eq(
            knapsack_level(Difficulty::Hard),
            knapsack_level(Difficulty::Hard)
        ));
    }
}
