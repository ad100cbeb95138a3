use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{CatalogItem, MealPeriod, Preferences};

fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the calorie target.
fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Target calories for this plan")
        .default("2000".to_string())
        .interact_text()?;

    let target = parse_number(&input)?;
    if target <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Target calories must be positive".to_string(),
        ));
    }
    Ok(target)
}

/// Prompt for the protein floor.
fn prompt_min_protein() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Minimum protein in grams")
        .default("0".to_string())
        .interact_text()?;

    let min = parse_number(&input)?;
    if min < 0.0 {
        return Err(PlanError::InvalidInput(
            "Minimum protein cannot be negative".to_string(),
        ));
    }
    Ok(min)
}

/// Prompt for an optional ceiling; Enter skips it.
fn prompt_optional_limit(label: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (Enter to skip)", label))
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }

    let limit = parse_number(&input)?;
    if limit < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} cannot be negative",
            label
        )));
    }
    Ok(Some(limit))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Select a dining hall from those present in the catalog, or any.
fn prompt_dining_hall(catalog: &[CatalogItem]) -> Result<Option<String>> {
    let mut halls: Vec<String> = Vec::new();
    for item in catalog {
        if !halls.iter().any(|h| h.eq_ignore_ascii_case(&item.dining_hall)) {
            halls.push(item.dining_hall.clone());
        }
    }
    halls.sort();

    if halls.len() <= 1 {
        return Ok(None);
    }

    let mut options = vec!["Any dining hall".to_string()];
    options.extend(halls.iter().cloned());

    let selection = Select::new()
        .with_prompt("Which dining hall?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(halls[selection - 1].clone()))
    }
}

/// Select a meal period, or any.
fn prompt_meal_period() -> Result<Option<MealPeriod>> {
    let options = ["Any meal", "Breakfast", "Lunch", "Dinner"];
    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => Some(MealPeriod::Breakfast),
        2 => Some(MealPeriod::Lunch),
        3 => Some(MealPeriod::Dinner),
        _ => None,
    })
}

/// Collect free-form entries until an empty line.
fn prompt_string_list(prompt: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (or press Enter to finish)", prompt))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }
        values.push(input.to_string());
    }

    Ok(values)
}

/// Collect food phrases with fuzzy matching against catalog item names.
///
/// Exact matches are taken silently; close matches go through a
/// confirm/select flow; anything else is kept verbatim since preferences
/// are substring matches, not catalog lookups.
fn prompt_food_phrases(catalog: &[CatalogItem], prompt: &str) -> Result<Vec<String>> {
    let mut phrases = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (or press Enter to finish)", prompt))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let exact = catalog
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(input));
        if let Some(item) = exact {
            phrases.push(item.name.clone());
            println!("Added: {}", item.name);
            continue;
        }

        let mut candidates: Vec<(&CatalogItem, f64)> = catalog
            .iter()
            .map(|item| {
                (
                    item,
                    jaro_winkler(&item.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            phrases.push(input.to_string());
            println!("Added: {}", input);
            continue;
        }

        if candidates.len() == 1 {
            let item = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            if confirm {
                phrases.push(item.name.clone());
                println!("Added: {}", item.name);
            } else {
                phrases.push(input.to_string());
                println!("Added: {}", input);
            }
        } else {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(item, _)| item.name.clone())
                .collect();
            let keep_as_typed = options.len();
            options.push(format!("Keep '{}' as typed", input));

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            let chosen = if selection == keep_as_typed {
                input.to_string()
            } else {
                options[selection].clone()
            };
            println!("Added: {}", chosen);
            phrases.push(chosen);
        }
    }

    Ok(phrases)
}

/// Collect a full preference set interactively.
pub fn collect_preferences(catalog: &[CatalogItem]) -> Result<Preferences> {
    let target_calories = prompt_target_calories()?;
    let min_protein = prompt_min_protein()?;
    let max_sugar = prompt_optional_limit("Maximum sugar in grams")?;
    let max_fat = prompt_optional_limit("Maximum fat in grams")?;
    let vegetarian = prompt_yes_no("Vegetarian only?", false)?;
    let vegan = if vegetarian {
        prompt_yes_no("Vegan only?", false)?
    } else {
        false
    };
    let dining_hall = prompt_dining_hall(catalog)?;
    let meal_time = prompt_meal_period()?;
    let allergens = prompt_string_list("Enter an allergen to avoid")?;
    let liked_foods = prompt_food_phrases(catalog, "Enter a food you like")?;
    let disliked_foods = prompt_food_phrases(catalog, "Enter a food you dislike")?;

    Ok(Preferences {
        target_calories,
        min_protein,
        max_sugar,
        max_fat,
        vegetarian,
        vegan,
        allergens,
        dining_hall,
        meal_time,
        liked_foods,
        disliked_foods,
        ..Default::default()
    })
}
