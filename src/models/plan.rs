use serde::{Deserialize, Serialize};

use crate::models::{CatalogItem, Category, Nutrition, RegenerationType};

/// Scoring policy used to make regenerated plans meaningfully different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Balanced,
    ProteinFocus,
    Variety,
    MacroFit,
}

impl Strategy {
    pub const CYCLE: [Strategy; 4] = [
        Strategy::Balanced,
        Strategy::ProteinFocus,
        Strategy::Variety,
        Strategy::MacroFit,
    ];

    /// Map a variation seed onto the strategy cycle.
    pub fn from_seed(seed: u64) -> Self {
        Self::CYCLE[(seed % Self::CYCLE.len() as u64) as usize]
    }

    /// Default requests always score balanced; regenerations cycle by seed.
    pub fn for_request(regeneration: RegenerationType, seed: u64) -> Self {
        match regeneration {
            RegenerationType::Default => Strategy::Balanced,
            RegenerationType::Regenerate => Strategy::from_seed(seed),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Balanced => "balanced",
            Strategy::ProteinFocus => "protein-focus",
            Strategy::Variety => "variety",
            Strategy::MacroFit => "macro-fit",
        };
        write!(f, "{}", name)
    }
}

/// Strategy and seed a result was produced with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationInfo {
    pub strategy: Strategy,
    pub seed: u64,
}

/// One selected catalog item with its serving multiplier.
///
/// Nutrient fields are aggregated over servings, matching the shape the
/// original service returned per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    pub name: String,
    pub dining_hall: String,
    pub station: String,
    pub category: Category,
    pub servings: u32,
    pub calories: f64,
    pub protein: f64,
    pub sugar: f64,
    pub fat: f64,
}

impl SelectedItem {
    /// A first serving of `item`.
    pub fn new(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            dining_hall: item.dining_hall.clone(),
            station: item.station.clone(),
            category: item.resolved_category(),
            servings: 1,
            calories: item.nutrition.calories,
            protein: item.nutrition.protein,
            sugar: item.nutrition.sugar,
            fat: item.nutrition.fat,
        }
    }

    /// Fold one more serving of the same item into this entry.
    pub fn add_serving(&mut self, item: &CatalogItem) {
        self.servings += 1;
        self.calories += item.nutrition.calories;
        self.protein += item.nutrition.protein;
        self.sugar += item.nutrition.sugar;
        self.fat += item.nutrition.fat;
    }
}

/// Running and final nutrient sums across the selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub sugar: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sodium: f64,
}

impl NutritionTotals {
    /// Accumulate one serving.
    pub fn add(&mut self, nutrition: &Nutrition) {
        self.calories += nutrition.calories;
        self.protein += nutrition.protein;
        self.sugar += nutrition.sugar;
        self.fat += nutrition.fat;
        self.carbs += nutrition.carbs;
        self.fiber += nutrition.fiber;
        self.sodium += nutrition.sodium;
    }
}

/// Items of one category, in selection order.
///
/// Grouping serializes as an ordered list so the display order survives
/// transport; a JSON object would lose it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<SelectedItem>,
}

/// The engine's complete output for one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub message: String,
    pub selected_items: Vec<SelectedItem>,
    pub items_by_category: Vec<CategoryGroup>,
    pub totals: NutritionTotals,
    pub warnings: Vec<String>,
    #[serde(rename = "variationInfo")]
    pub variation: VariationInfo,
}
