use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat per-serving nutrient profile, in grams except calories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub sugar: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fiber: f64,

    #[serde(default)]
    pub sodium: f64,
}

impl Nutrition {
    /// Protein per calorie, guarding against zero-calorie items.
    #[inline]
    pub fn protein_per_calorie(&self) -> f64 {
        if self.calories > 0.0 {
            self.protein / self.calories
        } else {
            0.0
        }
    }

    /// Basic validation: all fields non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.protein >= 0.0
            && self.sugar >= 0.0
            && self.fat >= 0.0
            && self.carbs >= 0.0
            && self.fiber >= 0.0
            && self.sodium >= 0.0
    }
}

/// Meal period served at a dining hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MealPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealPeriod::Breakfast),
            "lunch" => Ok(MealPeriod::Lunch),
            "dinner" => Ok(MealPeriod::Dinner),
            other => Err(format!("unknown meal period: {}", other)),
        }
    }
}

/// Food category used for grouping and exclusion rules.
///
/// Unrecognized category strings are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    MainCourse,
    Side,
    Soup,
    Salad,
    Appetizer,
    Dessert,
    Beverage,
    Other(String),
}

impl Category {
    /// Position in the fixed display order; `Other` sorts after the named
    /// categories, alphabetically by name.
    pub fn display_rank(&self) -> (u8, String) {
        match self {
            Category::MainCourse => (0, String::new()),
            Category::Side => (1, String::new()),
            Category::Soup => (2, String::new()),
            Category::Salad => (3, String::new()),
            Category::Appetizer => (4, String::new()),
            Category::Dessert => (5, String::new()),
            Category::Beverage => (6, String::new()),
            Category::Other(name) => (7, name.to_lowercase()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "main course" | "main" | "entree" => Category::MainCourse,
            "side" => Category::Side,
            "soup" => Category::Soup,
            "salad" => Category::Salad,
            "appetizer" => Category::Appetizer,
            "dessert" => Category::Dessert,
            "beverage" => Category::Beverage,
            _ => Category::Other(s.trim().to_string()),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::MainCourse => "Main Course",
            Category::Side => "Side",
            Category::Soup => "Soup",
            Category::Salad => "Salad",
            Category::Appetizer => "Appetizer",
            Category::Dessert => "Dessert",
            Category::Beverage => "Beverage",
            Category::Other(name) => name,
        };
        write!(f, "{}", name)
    }
}

/// A menu item from a dining-hall catalog.
///
/// Items are immutable inputs to the planner; `catalog::enhance` fills in
/// category, allergens and dietary flags when the raw data lacks them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,

    pub dining_hall: String,

    #[serde(default)]
    pub station: String,

    pub meal_period: MealPeriod,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub nutrition: Nutrition,

    #[serde(default)]
    pub vegetarian: bool,

    #[serde(default)]
    pub vegan: bool,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Canonical selection identity: lowercase (name, dining hall).
    pub fn key(&self) -> String {
        format!(
            "{}|{}",
            self.name.to_lowercase(),
            self.dining_hall.to_lowercase()
        )
    }

    /// The stored category, or one detected from station/name keywords.
    pub fn resolved_category(&self) -> Category {
        self.category
            .clone()
            .unwrap_or_else(|| crate::catalog::detect_category(&self.name, &self.station))
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag_lower: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }

    /// Case-insensitive allergen membership.
    pub fn has_allergen(&self, allergen_lower: &str) -> bool {
        self.allergens
            .iter()
            .any(|a| a.to_lowercase() == allergen_lower)
    }
}
