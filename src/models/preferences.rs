use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, MealPeriod};

/// Whether a request is a first generation or an explicit re-roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegenerationType {
    #[default]
    Default,
    Regenerate,
}

/// User constraints and preferences for one generation request.
///
/// Field names mirror the request contract of the original service
/// (camelCase on the wire). `planner::normalize` validates the numeric
/// ranges and lowers all string sets before the engine uses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub target_calories: f64,

    #[serde(default)]
    pub min_protein: f64,

    #[serde(default)]
    pub max_sugar: Option<f64>,

    #[serde(default)]
    pub max_fat: Option<f64>,

    #[serde(default)]
    pub vegetarian: bool,

    #[serde(default)]
    pub vegan: bool,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub excluded_categories: Vec<Category>,

    #[serde(default)]
    pub allowed_tags: Vec<String>,

    #[serde(default)]
    pub disallowed_tags: Vec<String>,

    #[serde(default)]
    pub liked_foods: Vec<String>,

    #[serde(default)]
    pub disliked_foods: Vec<String>,

    #[serde(default)]
    pub dining_hall: Option<String>,

    #[serde(default)]
    pub meal_time: Option<MealPeriod>,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default, rename = "regenerationType")]
    pub regeneration: RegenerationType,

    #[serde(default)]
    pub variation_seed: Option<u64>,

    /// Caller-supplied counter or timestamp, used only to derive a seed for
    /// `regenerate` requests that did not pin one. The engine never reads
    /// the clock itself.
    #[serde(default)]
    pub nonce: Option<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            target_calories: 2000.0,
            min_protein: 0.0,
            max_sugar: None,
            max_fat: None,
            vegetarian: false,
            vegan: false,
            allergens: Vec::new(),
            excluded_categories: Vec::new(),
            allowed_tags: Vec::new(),
            disallowed_tags: Vec::new(),
            liked_foods: Vec::new(),
            disliked_foods: Vec::new(),
            dining_hall: None,
            meal_time: None,
            date: None,
            regeneration: RegenerationType::Default,
            variation_seed: None,
            nonce: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"targetCalories": 1800}"#).unwrap();
        assert_eq!(prefs.target_calories, 1800.0);
        assert_eq!(prefs.min_protein, 0.0);
        assert!(prefs.allergens.is_empty());
        assert_eq!(prefs.regeneration, RegenerationType::Default);
        assert!(prefs.variation_seed.is_none());
    }

    #[test]
    fn test_regeneration_wire_names() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"targetCalories": 1800, "regenerationType": "regenerate", "variationSeed": 7}"#,
        )
        .unwrap();
        assert_eq!(prefs.regeneration, RegenerationType::Regenerate);
        assert_eq!(prefs.variation_seed, Some(7));
    }
}
