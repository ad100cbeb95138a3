use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

use campus_meal_planner_rs::catalog::{load_catalog, save_catalog};
use campus_meal_planner_rs::error::Result;
use campus_meal_planner_rs::models::CatalogItem;

#[derive(Parser, Debug)]
#[command(name = "catalog-prep")]
#[command(about = "Enhance a raw scraped menu dump into a planner catalog")]
struct Args {
    /// Raw menu JSON produced by the scraper.
    input: PathBuf,

    /// Output catalog file.
    #[arg(long, default_value = "catalog.json")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // load_catalog enhances (calories, categories, allergens, dietary
    // flags) and deduplicates on the way in.
    let items = load_catalog(&args.input)?;
    println!("Loaded {} items from {}", items.len(), args.input.display());

    print_stats(&items);

    save_catalog(&args.output, &items)?;
    println!("Wrote catalog to {}", args.output.display());

    Ok(())
}

fn print_stats(items: &[CatalogItem]) {
    let mut by_hall: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut vegetarian = 0usize;
    let mut vegan = 0usize;

    for item in items {
        *by_hall.entry(item.dining_hall.clone()).or_default() += 1;
        *by_category
            .entry(item.resolved_category().to_string())
            .or_default() += 1;
        if item.vegetarian {
            vegetarian += 1;
        }
        if item.vegan {
            vegan += 1;
        }
    }

    println!();
    println!("Per dining hall:");
    for (hall, count) in &by_hall {
        println!("  {:<24} {}", hall, count);
    }

    println!();
    println!("Per category:");
    for (category, count) in &by_category {
        println!("  {:<24} {}", category, count);
    }

    println!();
    println!("Vegetarian: {}  Vegan: {}", vegetarian, vegan);
    println!();
}
