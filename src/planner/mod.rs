pub mod constants;
mod filter;
mod grouping;
mod normalize;
mod scoring;
mod selector;

pub use filter::filter_candidates;
pub use grouping::{diversity_warning, group_by_category};
pub use normalize::normalize;
pub use scoring::{rank_candidates, score_item, ScoredItem};
pub use selector::{select_items, SelectionOutcome};

use crate::error::Result;
use crate::models::{
    CatalogItem, GenerationResult, NutritionTotals, Preferences, Strategy, VariationInfo,
};

/// Soft-failure diagnostic when filtering leaves no candidates.
pub const NO_CANDIDATES_MESSAGE: &str =
    "No items match your dietary preferences. Try adjusting your filters.";

/// Generate a meal plan from a catalog under the given preferences.
///
/// Pure and synchronous: the caller owns both inputs, nothing is shared or
/// retained, and identical inputs (including the variation seed) reproduce
/// the result bit for bit. Malformed preferences are the only hard error;
/// an empty candidate set and unmet targets are reported in the result.
pub fn generate(prefs: &Preferences, catalog: &[CatalogItem]) -> Result<GenerationResult> {
    let prefs = normalize(prefs)?;
    let seed = prefs.variation_seed.unwrap_or_default();
    let strategy = Strategy::for_request(prefs.regeneration, seed);
    let variation = VariationInfo { strategy, seed };

    let candidates = filter_candidates(&prefs, catalog);
    if candidates.is_empty() {
        return Ok(GenerationResult {
            success: false,
            message: NO_CANDIDATES_MESSAGE.to_string(),
            selected_items: Vec::new(),
            items_by_category: Vec::new(),
            totals: NutritionTotals::default(),
            warnings: Vec::new(),
            variation,
        });
    }

    let ranked = rank_candidates(&candidates, &prefs, strategy, seed);
    let outcome = select_items(&ranked, &prefs);

    let items_by_category = group_by_category(&outcome.selected);
    let mut warnings = outcome.warnings;
    if let Some(warning) = diversity_warning(&outcome.selected, &candidates) {
        warnings.push(warning);
    }

    let message = if outcome.targets_met {
        "Meal plan generated successfully".to_string()
    } else {
        warnings
            .first()
            .cloned()
            .unwrap_or_else(|| "Meal plan targets not fully met".to_string())
    };

    Ok(GenerationResult {
        success: outcome.targets_met,
        message,
        selected_items: outcome.selected,
        items_by_category,
        totals: outcome.totals,
        warnings,
        variation,
    })
}
