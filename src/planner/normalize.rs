use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{PlanError, Result};
use crate::models::{Preferences, RegenerationType};

fn lower_set(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Stable hash of the request's identifying fields, so a repeated default
/// call reproduces the same seed without any caller-provided nonce.
fn request_fingerprint(prefs: &Preferences) -> u64 {
    let mut hasher = DefaultHasher::new();
    prefs.target_calories.to_bits().hash(&mut hasher);
    prefs.min_protein.to_bits().hash(&mut hasher);
    prefs
        .dining_hall
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .hash(&mut hasher);
    prefs.meal_time.map(|m| m.to_string()).hash(&mut hasher);
    prefs.date.map(|d| d.to_string()).hash(&mut hasher);
    hasher.finish()
}

/// Validate numeric ranges, lower all string sets to canonical form, and
/// resolve the variation seed.
///
/// Returns a cleaned copy; the input is never mutated.
pub fn normalize(prefs: &Preferences) -> Result<Preferences> {
    if !(prefs.target_calories > 0.0) {
        return Err(PlanError::Validation(format!(
            "targetCalories must be positive (got {})",
            prefs.target_calories
        )));
    }
    if !(prefs.min_protein >= 0.0) {
        return Err(PlanError::Validation(format!(
            "minProtein must be non-negative (got {})",
            prefs.min_protein
        )));
    }
    if let Some(max_sugar) = prefs.max_sugar {
        if !(max_sugar >= 0.0) {
            return Err(PlanError::Validation(format!(
                "maxSugar must be non-negative (got {})",
                max_sugar
            )));
        }
    }
    if let Some(max_fat) = prefs.max_fat {
        if !(max_fat >= 0.0) {
            return Err(PlanError::Validation(format!(
                "maxFat must be non-negative (got {})",
                max_fat
            )));
        }
    }

    let mut out = prefs.clone();
    out.allergens = lower_set(&prefs.allergens);
    out.allowed_tags = lower_set(&prefs.allowed_tags);
    out.disallowed_tags = lower_set(&prefs.disallowed_tags);
    out.liked_foods = lower_set(&prefs.liked_foods);
    out.disliked_foods = lower_set(&prefs.disliked_foods);
    out.dining_hall = prefs
        .dining_hall
        .as_deref()
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty());

    out.variation_seed = Some(match (prefs.variation_seed, prefs.regeneration) {
        (Some(seed), _) => seed,
        (None, RegenerationType::Regenerate) => splitmix64(prefs.nonce.unwrap_or(0)),
        (None, RegenerationType::Default) => request_fingerprint(prefs),
    });

    Ok(out)
}
