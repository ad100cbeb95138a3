use std::collections::HashMap;

use crate::models::{CatalogItem, NutritionTotals, Preferences, SelectedItem};
use crate::planner::constants::MAX_SELECTION_PASSES;
use crate::planner::scoring::ScoredItem;

/// What the greedy accumulation produced, successful or not.
#[derive(Debug)]
pub struct SelectionOutcome {
    pub selected: Vec<SelectedItem>,
    pub totals: NutritionTotals,
    pub targets_met: bool,
    pub warnings: Vec<String>,
}

fn targets_reached(totals: &NutritionTotals, prefs: &Preferences) -> bool {
    totals.calories >= prefs.target_calories && totals.protein >= prefs.min_protein
}

/// One more serving of `item` would break a sugar/fat ceiling.
fn breaks_ceiling(totals: &NutritionTotals, prefs: &Preferences, item: &CatalogItem) -> bool {
    if let Some(max_sugar) = prefs.max_sugar {
        if totals.sugar + item.nutrition.sugar > max_sugar {
            return true;
        }
    }
    if let Some(max_fat) = prefs.max_fat {
        if totals.fat + item.nutrition.fat > max_fat {
            return true;
        }
    }
    false
}

/// Greedily accumulate servings from the ranked candidates.
///
/// Each pass adds at most one serving per candidate, so a plan spreads
/// across items before repeating any; repeats fold into the existing entry
/// as extra servings. The sugar/fat ceilings are enforced before every
/// single addition. Selection stops the moment both targets hold, when a
/// full pass adds nothing, or at the pass bound.
pub fn select_items(ranked: &[ScoredItem<'_>], prefs: &Preferences) -> SelectionOutcome {
    let mut selected: Vec<SelectedItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let mut totals = NutritionTotals::default();
    let mut targets_met = false;

    'passes: for _ in 0..MAX_SELECTION_PASSES {
        let mut added = false;

        for candidate in ranked {
            let item = candidate.item;
            if breaks_ceiling(&totals, prefs, item) {
                continue;
            }

            totals.add(&item.nutrition);
            match index_by_key.get(&item.key()) {
                Some(&idx) => selected[idx].add_serving(item),
                None => {
                    index_by_key.insert(item.key(), selected.len());
                    selected.push(SelectedItem::new(item));
                }
            }
            added = true;

            if targets_reached(&totals, prefs) {
                targets_met = true;
                break 'passes;
            }
        }

        if !added {
            break;
        }
    }

    let mut warnings = Vec::new();
    if !targets_met {
        if totals.calories < prefs.target_calories {
            warnings.push(format!(
                "Could not reach calorie target with available items ({:.0} of {:.0} kcal)",
                totals.calories, prefs.target_calories
            ));
        }
        if totals.protein < prefs.min_protein {
            warnings.push(format!(
                "Could not reach minimum protein target with available items ({:.0} of {:.0} g)",
                totals.protein, prefs.min_protein
            ));
        }
    }

    SelectionOutcome {
        selected,
        totals,
        targets_met,
        warnings,
    }
}
