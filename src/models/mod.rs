mod item;
mod plan;
mod preferences;

pub use item::{CatalogItem, Category, MealPeriod, Nutrition};
pub use plan::{
    CategoryGroup, GenerationResult, NutritionTotals, SelectedItem, Strategy, VariationInfo,
};
pub use preferences::{Preferences, RegenerationType};
