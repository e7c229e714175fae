//! Property tests for the solvers and the score engine.

use proptest::prelude::*;
use u_puzzle::knapsack::solve_knapsack;
use u_puzzle::models::{total_value, total_weight, City, Item};
use u_puzzle::scoring::{score, GameKind, ScoreEngine};
use u_puzzle::tour::{closed_length, solve_tour};

fn items_strategy(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0i64..=100, 0i64..=20), 0..=max_len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (value, weight))| Item::new(i.to_string(), format!("item {i}"), value, weight))
            .collect()
    })
}

fn cities_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=8).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(i.to_string(), format!("city {i}"), x, y))
            .collect()
    })
}

fn brute_force(items: &[Item], capacity: i64) -> i64 {
    (0u32..(1 << items.len()))
        .filter_map(|mask| {
            let subset: Vec<&Item> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u32 << *i) != 0)
                .map(|(_, item)| item)
                .collect();
            (total_weight(subset.iter().copied()) <= capacity)
                .then(|| total_value(subset.iter().copied()))
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn knapsack_matches_brute_force(items in items_strategy(12), capacity in 0i64..=60) {
        let sol = solve_knapsack(&items, capacity).unwrap();
        prop_assert!(sol.total_weight() <= capacity);
        prop_assert_eq!(total_value(&sol.items), sol.optimal_value);
        prop_assert_eq!(sol.optimal_value, brute_force(&items, capacity));
    }

    #[test]
    fn knapsack_zero_capacity_is_empty(
        rows in prop::collection::vec((0i64..=100, 1i64..=20), 0..=8)
    ) {
        let items: Vec<Item> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (v, w))| Item::new(i.to_string(), "x", v, w))
            .collect();
        let sol = solve_knapsack(&items, 0).unwrap();
        prop_assert_eq!(sol.optimal_value, 0);
        prop_assert!(sol.items.is_empty());
    }

    #[test]
    fn tour_is_permutation_with_consistent_length(cities in cities_strategy()) {
        let sol = solve_tour(&cities).unwrap();
        let mut got: Vec<&str> = sol.order.iter().map(City::id).collect();
        let mut want: Vec<&str> = cities.iter().map(City::id).collect();
        prop_assert_eq!(got[0], want[0]);
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
        prop_assert!((sol.distance - closed_length(&sol.order)).abs() < 1e-9);
    }

    #[test]
    fn tour_is_deterministic(cities in cities_strategy()) {
        let a = solve_tour(&cities).unwrap();
        let b = solve_tour(&cities).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn knapsack_score_strictly_increases(
        (optimal, user) in (1i64..=1000).prop_flat_map(|opt| (Just(opt), 0..opt))
    ) {
        let lower = score(GameKind::Knapsack, user as f64, optimal as f64, 0, 0);
        let higher = score(GameKind::Knapsack, (user + 1) as f64, optimal as f64, 0, 0);
        prop_assert!(higher.score > lower.score);
    }

    #[test]
    fn tour_efficiency_increases_as_distance_shrinks(
        reference in 1.0f64..500.0,
        shorter in 1.0f64..500.0,
        extra in 0.01f64..500.0,
    ) {
        let longer = shorter + extra;
        let near = ScoreEngine::efficiency(GameKind::Tour, shorter, reference);
        let far = ScoreEngine::efficiency(GameKind::Tour, longer, reference);
        prop_assert!(near > far);
        let near_score = score(GameKind::Tour, shorter, reference, 0, 0).score;
        let far_score = score(GameKind::Tour, longer, reference, 0, 0).score;
        prop_assert!(near_score >= far_score);
    }

    #[test]
    fn score_follows_penalty_formula(
        user in 1.0f64..2000.0,
        reference in 1.0f64..2000.0,
        hints in 0u32..50,
        mistakes in 0u32..50,
        tour in any::<bool>(),
    ) {
        let kind = if tour { GameKind::Tour } else { GameKind::Knapsack };
        let report = score(kind, user, reference, hints, mistakes);
        let base = (ScoreEngine::efficiency(kind, user, reference) * 1000.0).round() as i64;
        let expected = (base - 50 * i64::from(hints) - 25 * i64::from(mistakes)).max(0);
        prop_assert_eq!(i64::from(report.score), expected);
        prop_assert!(report.efficiency >= 0.0);
    }
}
