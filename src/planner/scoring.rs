use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CatalogItem, Preferences, Strategy};
use crate::planner::constants::{
    DISLIKED_FOOD_PENALTY, EXPECTED_ITEM_COUNT, LIKED_FOOD_BONUS, PROTEIN_FOCUS_SCALE,
    VARIETY_FACTOR_MAX, VARIETY_FACTOR_MIN,
};

/// Candidate item with its computed desirability score.
#[derive(Debug)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}

/// Pseudo-random factor in [0.8, 1.2) derived from (seed, item identity).
///
/// Identical seed and catalog always produce identical factors; there is no
/// global randomness anywhere in the engine.
fn variety_factor(seed: u64, item: &CatalogItem) -> f64 {
    let mut hasher = DefaultHasher::new();
    item.key().hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(seed ^ hasher.finish());
    rng.gen_range(VARIETY_FACTOR_MIN..VARIETY_FACTOR_MAX)
}

/// Score one candidate under the active strategy.
///
/// Base score is protein per calorie; the strategy multiplier reshapes it,
/// and liked/disliked matches shift it additively (possibly below zero).
pub fn score_item(item: &CatalogItem, prefs: &Preferences, strategy: Strategy, seed: u64) -> f64 {
    let mut score = item.nutrition.protein_per_calorie();

    match strategy {
        Strategy::Balanced => {}
        Strategy::ProteinFocus => {
            score *= 1.0 + item.nutrition.protein / PROTEIN_FOCUS_SCALE;
        }
        Strategy::Variety => {
            score *= variety_factor(seed, item);
        }
        Strategy::MacroFit => {
            let per_item_share = prefs.target_calories / EXPECTED_ITEM_COUNT;
            score *= 1.0 / (1.0 + (item.nutrition.calories - per_item_share).abs());
        }
    }

    let name = item.name.to_lowercase();
    if prefs.liked_foods.iter().any(|liked| name.contains(liked)) {
        score += LIKED_FOOD_BONUS;
    }
    if prefs
        .disliked_foods
        .iter()
        .any(|disliked| name.contains(disliked))
    {
        score -= DISLIKED_FOOD_PENALTY;
    }

    score
}

/// Score and sort candidates: descending score, ties broken by ascending
/// calories (smaller items first when equally desirable), then by name for
/// a total deterministic order.
pub fn rank_candidates<'a>(
    candidates: &[&'a CatalogItem],
    prefs: &Preferences,
    strategy: Strategy,
    seed: u64,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = candidates
        .iter()
        .map(|&item| ScoredItem {
            item,
            score: score_item(item, prefs, strategy, seed),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.item
                    .nutrition
                    .calories
                    .partial_cmp(&b.item.nutrition.calories)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.item.name.cmp(&b.item.name))
    });

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealPeriod, Nutrition};

    fn item(name: &str, calories: f64, protein: f64) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            dining_hall: "De Neve".to_string(),
            station: String::new(),
            meal_period: MealPeriod::Lunch,
            date: None,
            nutrition: Nutrition {
                calories,
                protein,
                ..Default::default()
            },
            vegetarian: false,
            vegan: false,
            allergens: Vec::new(),
            ingredients: Vec::new(),
            category: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_base_score_prefers_protein_density() {
        let prefs = Preferences::default();
        let lean = item("Chicken", 300.0, 40.0);
        let starch = item("Rice", 200.0, 4.0);

        let lean_score = score_item(&lean, &prefs, Strategy::Balanced, 0);
        let starch_score = score_item(&starch, &prefs, Strategy::Balanced, 0);
        assert!(lean_score > starch_score);
    }

    #[test]
    fn test_zero_calorie_item_scores_zero() {
        let prefs = Preferences::default();
        let water = item("Water", 0.0, 0.0);
        assert_eq!(score_item(&water, &prefs, Strategy::Balanced, 0), 0.0);
    }

    #[test]
    fn test_protein_focus_amplifies_high_protein() {
        let prefs = Preferences::default();
        let chicken = item("Chicken", 300.0, 40.0);

        let balanced = score_item(&chicken, &prefs, Strategy::Balanced, 0);
        let focused = score_item(&chicken, &prefs, Strategy::ProteinFocus, 0);
        // 1 + 40/50 = 1.8x
        assert!((focused / balanced - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_variety_factor_deterministic_per_seed() {
        let prefs = Preferences::default();
        let chicken = item("Chicken", 300.0, 40.0);

        let a = score_item(&chicken, &prefs, Strategy::Variety, 9);
        let b = score_item(&chicken, &prefs, Strategy::Variety, 9);
        assert_eq!(a, b);

        let base = score_item(&chicken, &prefs, Strategy::Balanced, 9);
        assert!(a >= base * VARIETY_FACTOR_MIN && a <= base * VARIETY_FACTOR_MAX);
    }

    #[test]
    fn test_macro_fit_prefers_target_share() {
        let prefs = Preferences {
            target_calories: 1200.0,
            ..Default::default()
        };
        // Share = 300; equal protein density, different sizes.
        let fitting = item("Fitting", 300.0, 30.0);
        let oversized = item("Oversized", 900.0, 90.0);

        let fit_score = score_item(&fitting, &prefs, Strategy::MacroFit, 0);
        let big_score = score_item(&oversized, &prefs, Strategy::MacroFit, 0);
        assert!(fit_score > big_score);
    }

    #[test]
    fn test_liked_and_disliked_adjustments() {
        let prefs = Preferences {
            liked_foods: vec!["chicken".to_string()],
            disliked_foods: vec!["liver".to_string()],
            ..Default::default()
        };
        let chicken = item("Grilled Chicken", 300.0, 40.0);
        let liver = item("Liver and Onions", 300.0, 40.0);
        let neutral = item("Tofu Bowl", 300.0, 40.0);

        let liked = score_item(&chicken, &prefs, Strategy::Balanced, 0);
        let disliked = score_item(&liver, &prefs, Strategy::Balanced, 0);
        let base = score_item(&neutral, &prefs, Strategy::Balanced, 0);

        assert!((liked - base - LIKED_FOOD_BONUS).abs() < 1e-9);
        assert!((base - disliked - DISLIKED_FOOD_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_disliked_score_can_go_negative() {
        let prefs = Preferences {
            disliked_foods: vec!["gruel".to_string()],
            ..Default::default()
        };
        let gruel = item("Gruel", 100.0, 1.0);
        assert!(score_item(&gruel, &prefs, Strategy::Balanced, 0) < 0.0);
    }

    #[test]
    fn test_rank_ties_break_by_calories_then_name() {
        let prefs = Preferences::default();
        // Identical protein density -> identical balanced scores.
        let small = item("Zucchini Bowl", 200.0, 20.0);
        let large = item("Avocado Bowl", 400.0, 40.0);
        let same_size = item("Bean Bowl", 200.0, 20.0);

        let candidates = vec![&large, &small, &same_size];
        let ranked = rank_candidates(&candidates, &prefs, Strategy::Balanced, 0);

        assert_eq!(ranked[0].item.name, "Bean Bowl");
        assert_eq!(ranked[1].item.name, "Zucchini Bowl");
        assert_eq!(ranked[2].item.name, "Avocado Bowl");
    }
}
