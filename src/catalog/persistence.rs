use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::enhance_items;
use crate::error::Result;
use crate::models::CatalogItem;

fn dedupe_key(item: &CatalogItem) -> String {
    format!(
        "{}|{}|{}",
        item.key(),
        item.meal_period,
        item.date.map(|d| d.to_string()).unwrap_or_default()
    )
}

/// Load raw items from a JSON file without enhancement.
pub fn load_raw_items<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Load a catalog from a JSON file, enhance it, drop rows with negative
/// nutrient values, and deduplicate by (name, hall, meal period, date)
/// with the last occurrence winning.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let items: Vec<CatalogItem> = enhance_items(load_raw_items(path)?)
        .into_iter()
        .filter(|item| item.nutrition.is_valid())
        .collect();

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<CatalogItem> = Vec::with_capacity(items.len());
    for item in items {
        match seen.entry(dedupe_key(&item)) {
            Entry::Occupied(entry) => deduped[*entry.get()] = item,
            Entry::Vacant(entry) => {
                entry.insert(deduped.len());
                deduped.push(item);
            }
        }
    }

    Ok(deduped)
}

/// Save a catalog to a pretty-printed JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[CatalogItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
