use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use clap::Parser;

use campus_meal_planner_rs::catalog::load_catalog;
use campus_meal_planner_rs::cli::{Cli, Command, PlanArgs};
use campus_meal_planner_rs::error::{PlanError, Result};
use campus_meal_planner_rs::interface::{
    collect_preferences, display_catalog, display_result, write_plan_csv,
};
use campus_meal_planner_rs::models::{
    CatalogItem, Category, MealPeriod, Preferences, RegenerationType,
};
use campus_meal_planner_rs::planner::generate;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.catalog, args),
        Command::Menu { hall, meal, date } => cmd_menu(&cli.catalog, hall, meal, date),
    }
}

fn parse_meal(meal: Option<&str>) -> Result<Option<MealPeriod>> {
    meal.map(str::parse)
        .transpose()
        .map_err(PlanError::InvalidInput)
}

fn parse_date(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|d| {
        NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| PlanError::InvalidInput(format!("Invalid date: {} (want YYYY-MM-DD)", d)))
    })
    .transpose()
}

/// Generate a meal plan based on flags, or interactively when no calorie
/// target was given.
fn cmd_plan(catalog_path: &str, args: PlanArgs) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        eprintln!("Run catalog-prep on a scraped menu dump first.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    println!("Loaded {} menu items", catalog.len());

    if catalog.is_empty() {
        println!("The catalog is empty; nothing to plan from.");
        return Ok(());
    }

    let mut prefs = match args.target_calories {
        Some(target_calories) => Preferences {
            target_calories,
            min_protein: args.min_protein.unwrap_or(0.0),
            max_sugar: args.max_sugar,
            max_fat: args.max_fat,
            vegetarian: args.vegetarian,
            vegan: args.vegan,
            allergens: args.allergens.clone(),
            excluded_categories: args
                .excluded_categories
                .iter()
                .map(|c| Category::from(c.as_str()))
                .collect(),
            allowed_tags: args.allowed_tags.clone(),
            disallowed_tags: args.disallowed_tags.clone(),
            liked_foods: args.liked_foods.clone(),
            disliked_foods: args.disliked_foods.clone(),
            ..Default::default()
        },
        None => collect_preferences(&catalog)?,
    };

    // Location/time flags apply in both modes.
    if args.hall.is_some() {
        prefs.dining_hall = args.hall.clone();
    }
    if let Some(meal) = parse_meal(args.meal.as_deref())? {
        prefs.meal_time = Some(meal);
    }
    if let Some(date) = parse_date(args.date.as_deref())? {
        prefs.date = Some(date);
    }

    prefs.variation_seed = args.seed;
    if args.regenerate {
        prefs.regeneration = RegenerationType::Regenerate;
        if args.seed.is_none() {
            // The engine never reads the clock; hand it a nonce to vary on.
            prefs.nonce = Some(
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0),
            );
        }
    }

    let result = generate(&prefs, &catalog)?;
    display_result(&result);

    if let Some(export_path) = &args.export {
        write_plan_csv(export_path, &result)?;
        println!("Plan exported to {}", export_path.display());
    }

    Ok(())
}

/// List catalog items, optionally filtered by hall, meal and date.
fn cmd_menu(
    catalog_path: &str,
    hall: Option<String>,
    meal: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    let meal = parse_meal(meal.as_deref())?;
    let date = parse_date(date.as_deref())?;

    let items: Vec<&CatalogItem> = catalog
        .iter()
        .filter(|item| {
            hall.as_deref()
                .map(|h| item.dining_hall.eq_ignore_ascii_case(h))
                .unwrap_or(true)
                && meal.map(|m| item.meal_period == m).unwrap_or(true)
                && date.map(|d| item.date == Some(d)).unwrap_or(true)
        })
        .collect();

    let title = hall.as_deref().unwrap_or("All dining halls");
    display_catalog(&items, title);

    Ok(())
}
