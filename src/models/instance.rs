//! Problem instances and their validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{City, Item};
use crate::error::{GameError, Result};

/// A knapsack puzzle: a set of items and a weight limit.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::{Item, KnapsackInstance};
///
/// let inst = KnapsackInstance::new(vec![Item::new("1", "Ruby Ring", 100, 1)], 15);
/// assert_eq!(inst.capacity(), 15);
/// assert!(inst.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: i64,
}

impl KnapsackInstance {
    /// Creates a knapsack instance.
    pub fn new(items: Vec<Item>, capacity: i64) -> Self {
        Self { items, capacity }
    }

    /// Items available for packing.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Maximum total weight.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Checks that the instance can be solved.
    pub fn validate(&self) -> Result<()> {
        validate_knapsack(&self.items, self.capacity)
    }
}

/// A tour puzzle: a set of cities to visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourInstance {
    cities: Vec<City>,
}

impl TourInstance {
    /// Creates a tour instance.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Cities on the map, in level order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Looks up a city by id.
    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id() == id)
    }

    /// Checks that the instance can be solved.
    pub fn validate(&self) -> Result<()> {
        validate_tour(&self.cities)
    }
}

pub(crate) fn validate_knapsack(items: &[Item], capacity: i64) -> Result<()> {
    if capacity < 0 {
        return Err(reject(format!("negative capacity {capacity}")));
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.weight() < 0 {
            return Err(reject(format!(
                "item {} has negative weight {}",
                item.id(),
                item.weight()
            )));
        }
        if item.value() < 0 {
            return Err(reject(format!(
                "item {} has negative value {}",
                item.id(),
                item.value()
            )));
        }
        if !seen.insert(item.id()) {
            return Err(reject(format!("duplicate item id {}", item.id())));
        }
    }
    Ok(())
}

pub(crate) fn validate_tour(cities: &[City]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cities.len());
    for city in cities {
        if !city.is_finite() {
            return Err(reject(format!(
                "city {} has non-finite coordinates ({}, {})",
                city.id(),
                city.x(),
                city.y()
            )));
        }
        if !seen.insert(city.id()) {
            return Err(reject(format!("duplicate city id {}", city.id())));
        }
    }
    Ok(())
}

fn reject(reason: String) -> GameError {
    warn!(%reason, "rejected instance");
    GameError::InvalidInstance(reason)
}
