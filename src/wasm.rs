//! WebAssembly bindings for the browser front end.
//!
//! Values cross the boundary as plain JavaScript objects with the same
//! field names as the Rust types (`camelCase` for reports and solutions).
//!
//! ```javascript
//! import { solveKnapsack, score } from 'u-puzzle';
//!
//! const items = [{ id: '1', name: 'Ruby Ring', value: 100, weight: 1 }];
//! const { optimalValue } = solveKnapsack(items, 15);
//! const report = score('knapsack', 100, optimalValue, 0, 0);
//! ```

use wasm_bindgen::prelude::*;

use crate::error::GameError;
use crate::levels::{knapsack_level, tour_level, Difficulty};
use crate::models::{City, Item};
use crate::scoring::GameKind;

fn to_js(err: GameError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| to_js(GameError::InvalidInstance(e.to_string())))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

/// Solves a knapsack instance: `{ optimalValue, items }`.
#[wasm_bindgen(js_name = solveKnapsack)]
pub fn solve_knapsack(items: JsValue, capacity: f64) -> Result<JsValue, JsValue> {
    let items: Vec<Item> = decode(items)?;
    if !capacity.is_finite() || capacity.fract() != 0.0 {
        return Err(to_js(GameError::InvalidInstance(format!(
            "capacity {capacity} is not an integer"
        ))));
    }
    let solution = crate::knapsack::solve_knapsack(&items, capacity as i64).map_err(to_js)?;
    encode(&solution)
}

/// Solves a tour instance: `{ distance, order }`.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(cities: JsValue) -> Result<JsValue, JsValue> {
    let cities: Vec<City> = decode(cities)?;
    let solution = crate::tour::solve_tour(&cities).map_err(to_js)?;
    encode(&solution)
}

/// Scores a result with the default configuration.
///
/// `game` is `"knapsack"` or `"tour"` (`"tsp"` is accepted).
#[wasm_bindgen]
pub fn score(
    game: &str,
    user: f64,
    reference: f64,
    hints_used: u32,
    mistakes: u32,
) -> Result<JsValue, JsValue> {
    let kind: GameKind = game.parse().map_err(to_js)?;
    encode(&crate::scoring::score(kind, user, reference, hints_used, mistakes))
}

/// The bundled knapsack level: `{ items, capacity }`.
#[wasm_bindgen(js_name = knapsackLevel)]
pub fn knapsack_level_js(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty: Difficulty = difficulty.parse().map_err(to_js)?;
    encode(knapsack_level(difficulty))
}

/// The bundled tour level: `{ cities }`.
#[wasm_bindgen(js_name = tourLevel)]
pub fn tour_level_js(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty: Difficulty = difficulty.parse().map_err(to_js)?;
    encode(tour_level(difficulty))
}
