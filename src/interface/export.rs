use std::path::Path;

use crate::error::Result;
use crate::models::GenerationResult;

/// Write a generated plan to a CSV file, one row per selected item in
/// display order, with a trailing totals row.
pub fn write_plan_csv(path: &Path, result: &GenerationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "category",
        "name",
        "dining_hall",
        "station",
        "servings",
        "calories",
        "protein",
        "sugar",
        "fat",
    ])?;

    for group in &result.items_by_category {
        for item in &group.items {
            wtr.write_record([
                group.category.to_string(),
                item.name.clone(),
                item.dining_hall.clone(),
                item.station.clone(),
                item.servings.to_string(),
                format!("{:.1}", item.calories),
                format!("{:.1}", item.protein),
                format!("{:.1}", item.sugar),
                format!("{:.1}", item.fat),
            ])?;
        }
    }

    wtr.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        result
            .selected_items
            .iter()
            .map(|i| i.servings)
            .sum::<u32>()
            .to_string(),
        format!("{:.1}", result.totals.calories),
        format!("{:.1}", result.totals.protein),
        format!("{:.1}", result.totals.sugar),
        format!("{:.1}", result.totals.fat),
    ])?;

    wtr.flush()?;
    Ok(())
}
