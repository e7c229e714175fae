//! Interactive knapsack round.

use serde::Serialize;
use tracing::debug;

use super::Submission;
use crate::error::{GameError, Result};
use crate::knapsack::{ratio_hint, KnapsackSolution};
use crate::models::{total_value, total_weight, Item, KnapsackInstance};
use crate::scoring::{GameKind, ScoreEngine};

/// What a [`KnapsackRound::toggle`] did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionChange {
    /// The item was packed. Packing past capacity is allowed but counts as
    /// a mistake.
    Added {
        /// The pack took the total weight past capacity.
        #[serde(rename = "overCapacity")]
        over_capacity: bool,
    },
    /// The item was taken back out.
    Removed,
}

/// A player's knapsack attempt on one level.
///
/// # Examples
///
/// ```
/// use u_puzzle::game::{KnapsackRound, SelectionChange};
/// use u_puzzle::levels::{knapsack_level, Difficulty};
///
/// let mut round = KnapsackRound::new(knapsack_level(Difficulty::Easy).clone());
/// for id in ["1", "2", "3", "4"] {
///     round.toggle(id).unwrap();
/// }
/// assert_eq!(round.current_value(), 360);
///
/// let result = round.submit().unwrap();
/// assert_eq!(result.report.score, 1000);
/// assert_eq!(result.reference.optimal_value, 360);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackRound {
    instance: KnapsackInstance,
    engine: ScoreEngine,
    selected: Vec<usize>,
    mistakes: u32,
    hints_used: u32,
}

impl KnapsackRound {
    /// Starts a round with the default scoring.
    pub fn new(instance: KnapsackInstance) -> Self {
        Self::with_engine(instance, ScoreEngine::default())
    }

    /// Starts a round scored by the given engine.
    pub fn with_engine(instance: KnapsackInstance, engine: ScoreEngine) -> Self {
        Self {
            instance,
            engine,
            selected: Vec::new(),
            mistakes: 0,
            hints_used: 0,
        }
    }

    /// The level being played.
    pub fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    /// Adds the item if absent, removes it if present.
    pub fn toggle(&mut self, item_id: &str) -> Result<SelectionChange> {
        let idx = self
            .instance
            .items()
            .iter()
            .position(|i| i.id() == item_id)
            .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;

        if let Some(pos) = self.selected.iter().position(|&s| s == idx) {
            self.selected.remove(pos);
            return Ok(SelectionChange::Removed);
        }

        let over_capacity = self
            .current_weight()
            .saturating_add(self.instance.items()[idx].weight())
            > self.instance.capacity();
        if over_capacity {
            self.mistakes += 1;
            debug!(item = item_id, mistakes = self.mistakes, "packed past capacity");
        }
        self.selected.push(idx);
        Ok(SelectionChange::Added { over_capacity })
    }

    /// Selected items, in the order they were packed.
    pub fn selected(&self) -> Vec<&Item> {
        self.selected
            .iter()
            .map(|&i| &self.instance.items()[i])
            .collect()
    }

    /// Returns `true` if the item is currently packed.
    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected
            .iter()
            .any(|&i| self.instance.items()[i].id() == item_id)
    }

    /// Total weight packed, saturating at `i64::MAX`.
    pub fn current_weight(&self) -> i64 {
        total_weight(self.selected())
    }

    /// Total value packed, saturating at `i64::MAX`.
    pub fn current_value(&self) -> i64 {
        total_value(self.selected())
    }

    /// Over-capacity packs so far.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Hints requested so far.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Uses a hint: the unpacked item with the best value per weight.
    ///
    /// The hint is counted even when nothing is left to suggest.
    pub fn hint(&mut self) -> Option<&Item> {
        self.hints_used += 1;
        let selected = &self.selected;
        let items = self.instance.items();
        ratio_hint(items, |item| {
            selected.iter().any(|&i| items[i].id() == item.id())
        })
    }

    /// Running score: full marks minus penalties so far.
    pub fn preview_score(&self) -> u32 {
        self.engine.preview(self.hints_used, self.mistakes)
    }

    /// Returns `true` once at least one item is packed.
    pub fn can_submit(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Clears the selection and both counters.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.mistakes = 0;
        self.hints_used = 0;
    }

    /// Scores the current selection against the exact optimum.
    pub fn submit(&self) -> Result<Submission<KnapsackSolution, Item>> {
        if !self.can_submit() {
            return Err(GameError::NotReady("no items selected".into()));
        }
        let reference = self.instance.solve()?;
        let report = self.engine.score(
            GameKind::Knapsack,
            self.current_value() as f64,
            reference.optimal_value as f64,
            self.hints_used,
            self.mistakes,
        );
        Ok(Submission {
            report,
            reference,
            user_solution: self.selected().into_iter().cloned().collect(),
        })
    }
}
