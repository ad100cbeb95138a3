use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CampusMealPlanner — builds dining-hall meal plans from nutrition targets
/// and dietary constraints.
#[derive(Parser, Debug)]
#[command(name = "campus_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan from the catalog.
    Plan(PlanArgs),

    /// List catalog items, optionally filtered.
    Menu {
        /// Only items from this dining hall.
        #[arg(long)]
        hall: Option<String>,

        /// Only items for this meal: breakfast, lunch or dinner.
        #[arg(long)]
        meal: Option<String>,

        /// Only items dated YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Calorie target; omit to be prompted interactively.
    #[arg(long)]
    pub target_calories: Option<f64>,

    /// Minimum protein in grams.
    #[arg(long)]
    pub min_protein: Option<f64>,

    /// Hard ceiling on total sugar in grams.
    #[arg(long)]
    pub max_sugar: Option<f64>,

    /// Hard ceiling on total fat in grams.
    #[arg(long)]
    pub max_fat: Option<f64>,

    /// Vegetarian items only.
    #[arg(long)]
    pub vegetarian: bool,

    /// Vegan items only.
    #[arg(long)]
    pub vegan: bool,

    /// Only items from this dining hall.
    #[arg(long)]
    pub hall: Option<String>,

    /// Only items for this meal: breakfast, lunch or dinner.
    #[arg(long)]
    pub meal: Option<String>,

    /// Only items dated YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,

    /// Allergen to avoid; repeatable.
    #[arg(long = "allergen")]
    pub allergens: Vec<String>,

    /// Category to exclude; repeatable.
    #[arg(long = "exclude-category")]
    pub excluded_categories: Vec<String>,

    /// Restrict the plan to items carrying this tag; repeatable.
    #[arg(long = "allow-tag")]
    pub allowed_tags: Vec<String>,

    /// Drop items carrying this tag; repeatable.
    #[arg(long = "deny-tag")]
    pub disallowed_tags: Vec<String>,

    /// Favor items whose name contains this phrase; repeatable.
    #[arg(long = "like")]
    pub liked_foods: Vec<String>,

    /// Deprioritize items whose name contains this phrase; repeatable.
    #[arg(long = "dislike")]
    pub disliked_foods: Vec<String>,

    /// Re-roll: produce a materially different plan.
    #[arg(long)]
    pub regenerate: bool,

    /// Variation seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the plan to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
