//! Static algorithm explanations shown with each result.

use serde::Serialize;

use super::GameKind;

/// Teaching text describing the reference algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Heading for the results panel.
    pub title: &'static str,
    /// Name of the reference algorithm.
    pub algorithm: &'static str,
    /// How the algorithm works, in order.
    pub steps: &'static [&'static str],
    /// Time and space bounds.
    pub complexity: &'static str,
    /// Advice for the next attempt.
    pub tips: &'static [&'static str],
}

const KNAPSACK: Explanation = Explanation {
    title: "Knapsack Algorithm Explanation",
    algorithm: "Dynamic Programming",
    steps: &[
        "Create a table where dp[i][w] represents the maximum value using first i items with weight limit w",
        "For each item, decide whether to include it or not based on maximum value",
        "If item weight ≤ current capacity, choose max of (include item, exclude item)",
        "Backtrack through table to find which items give optimal solution",
    ],
    complexity: "Time: O(n×W), Space: O(n×W) where n = items, W = capacity",
    tips: &[
        "Items with high value-to-weight ratio are often good choices",
        "Sometimes leaving space for multiple smaller valuable items is better",
        "Dynamic programming guarantees optimal solution unlike greedy approaches",
    ],
};

const TOUR: Explanation = Explanation {
    title: "Traveling Salesman Problem Explanation",
    algorithm: "Nearest Neighbor Heuristic",
    steps: &[
        "Start at any city (all starting points are equivalent for this heuristic)",
        "From current city, move to the nearest unvisited city",
        "Repeat until all cities are visited",
        "Return to the starting city to complete the tour",
    ],
    complexity: "Time: O(n²), Space: O(n) where n = number of cities",
    tips: &[
        "Nearest neighbor gives good results quickly but isn't always optimal",
        "For small instances, try different starting cities to compare results",
        "Exact algorithms like dynamic programming guarantee optimality but are slower",
        "Real-world TSP often uses more sophisticated heuristics and optimizations",
    ],
};

impl Explanation {
    /// The explanation for a game kind.
    pub fn for_game(kind: GameKind) -> &'static Explanation {
        match kind {
            GameKind::Knapsack => &KNAPSACK,
            GameKind::Tour => &TOUR,
        }
    }
}
