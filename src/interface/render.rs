use crate::models::{CatalogItem, GenerationResult};

/// Display a generation result grouped by category.
pub fn display_result(result: &GenerationResult) {
    if result.selected_items.is_empty() {
        println!("{}", result.message);
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!(
        "Strategy: {} (seed {})",
        result.variation.strategy, result.variation.seed
    );
    println!();

    for group in &result.items_by_category {
        println!("--- {} ---", group.category);
        for item in &group.items {
            let servings = if item.servings > 1 {
                format!("{}x ", item.servings)
            } else {
                String::new()
            };
            println!(
                "  {}{} ({}, {}) - {:.0} cal, {:.0}g protein",
                servings, item.name, item.dining_hall, item.station, item.calories, item.protein
            );
        }
        println!();
    }

    println!("--- Summary ---");
    println!(
        "Totals: {:.0} cal, {:.0}g protein, {:.0}g sugar, {:.0}g fat",
        result.totals.calories, result.totals.protein, result.totals.sugar, result.totals.fat
    );

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("! {}", warning);
        }
    }

    println!();
    println!("{}", result.message);
}

/// Display a simple list of catalog items.
pub fn display_catalog(items: &[&CatalogItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!(
            "  {} [{}] ({}, {}, {}) - {:.0} cal, P:{:.0} S:{:.0} F:{:.0}",
            item.name,
            item.resolved_category(),
            item.dining_hall,
            item.station,
            item.meal_period,
            item.nutrition.calories,
            item.nutrition.protein,
            item.nutrition.sugar,
            item.nutrition.fat
        );
    }

    println!();
}
