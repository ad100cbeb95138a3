use crate::models::{CatalogItem, Preferences};

/// Apply every hard exclusion rule, producing the feasible candidate set.
///
/// Expects normalized preferences (lowercased sets). An item failing any
/// rule is dropped, never scored. Running the filter on its own output
/// changes nothing.
pub fn filter_candidates<'a>(
    prefs: &Preferences,
    catalog: &'a [CatalogItem],
) -> Vec<&'a CatalogItem> {
    catalog
        .iter()
        .filter(|item| passes_all(prefs, item))
        .collect()
}

fn passes_all(prefs: &Preferences, item: &CatalogItem) -> bool {
    if let Some(hall) = &prefs.dining_hall {
        if item.dining_hall.to_lowercase() != *hall {
            return false;
        }
    }

    if let Some(meal) = prefs.meal_time {
        if item.meal_period != meal {
            return false;
        }
    }

    // Exact calendar-day match; undated items cannot satisfy a date filter.
    if let Some(date) = prefs.date {
        if item.date != Some(date) {
            return false;
        }
    }

    if prefs.vegetarian && !item.vegetarian {
        return false;
    }

    if prefs.vegan && !item.vegan {
        return false;
    }

    let category = item.resolved_category();
    if prefs.excluded_categories.contains(&category) {
        return false;
    }

    if prefs.allergens.iter().any(|a| item.has_allergen(a)) {
        return false;
    }

    if prefs.disallowed_tags.iter().any(|t| item.has_tag(t)) {
        return false;
    }

    // A non-empty allow-list is exclusive.
    if !prefs.allowed_tags.is_empty() && !prefs.allowed_tags.iter().any(|t| item.has_tag(t)) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MealPeriod, Nutrition};
    use crate::planner::normalize;

    fn item(name: &str, hall: &str) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            dining_hall: hall.to_string(),
            station: String::new(),
            meal_period: MealPeriod::Lunch,
            date: None,
            nutrition: Nutrition::default(),
            vegetarian: false,
            vegan: false,
            allergens: Vec::new(),
            ingredients: Vec::new(),
            category: Some(Category::MainCourse),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_dining_hall_filter_case_insensitive() {
        let catalog = vec![item("Burger", "De Neve"), item("Pasta", "Epicuria")];
        let prefs = normalize(&Preferences {
            dining_hall: Some("DE NEVE".to_string()),
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Burger");
    }

    #[test]
    fn test_allergen_filter() {
        let mut dairy = item("Mac and Cheese", "De Neve");
        dairy.allergens.push("Dairy".to_string());
        let catalog = vec![dairy, item("Rice", "De Neve")];

        let prefs = normalize(&Preferences {
            allergens: vec!["dairy".to_string()],
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Rice");
    }

    #[test]
    fn test_vegan_implies_stricter_than_vegetarian() {
        let mut veg = item("Mac and Cheese", "De Neve");
        veg.vegetarian = true;
        let mut vegan = item("Garden Bowl", "De Neve");
        vegan.vegetarian = true;
        vegan.vegan = true;
        let catalog = vec![veg, vegan];

        let prefs = normalize(&Preferences {
            vegan: true,
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Garden Bowl");
    }

    #[test]
    fn test_excluded_categories() {
        let mut dessert = item("Brownie", "De Neve");
        dessert.category = Some(Category::Dessert);
        let catalog = vec![dessert, item("Burger", "De Neve")];

        let prefs = normalize(&Preferences {
            excluded_categories: vec![Category::Dessert],
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Burger");
    }

    #[test]
    fn test_allow_list_is_exclusive_when_set() {
        let mut spicy = item("Spicy Tofu", "De Neve");
        spicy.tags.push("Spicy".to_string());
        let plain = item("Rice", "De Neve");
        let catalog = vec![spicy, plain];

        let prefs = normalize(&Preferences {
            allowed_tags: vec!["spicy".to_string()],
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Spicy Tofu");
    }

    #[test]
    fn test_disallowed_tags() {
        let mut fried = item("Fried Fish", "De Neve");
        fried.tags.push("fried".to_string());
        let catalog = vec![fried, item("Rice", "De Neve")];

        let prefs = normalize(&Preferences {
            disallowed_tags: vec!["Fried".to_string()],
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_date_filter_excludes_undated() {
        let mut dated = item("Burger", "De Neve");
        dated.date = "2026-04-12".parse().ok();
        let undated = item("Rice", "De Neve");
        let catalog = vec![dated, undated];

        let prefs = normalize(&Preferences {
            date: "2026-04-12".parse().ok(),
            ..Default::default()
        })
        .unwrap();

        let candidates = filter_candidates(&prefs, &catalog);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Burger");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut dairy = item("Mac and Cheese", "De Neve");
        dairy.allergens.push("dairy".to_string());
        let catalog = vec![dairy, item("Rice", "De Neve"), item("Burger", "Epicuria")];

        let prefs = normalize(&Preferences {
            allergens: vec!["dairy".to_string()],
            dining_hall: Some("de neve".to_string()),
            ..Default::default()
        })
        .unwrap();

        let once: Vec<CatalogItem> = filter_candidates(&prefs, &catalog)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_candidates(&prefs, &once);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.key(), b.key());
        }
    }
}
