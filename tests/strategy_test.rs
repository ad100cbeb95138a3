use campus_meal_planner_rs::models::{
    CatalogItem, Category, MealPeriod, Nutrition, Preferences, RegenerationType, Strategy,
};
use campus_meal_planner_rs::planner::generate;

fn item(name: &str, calories: f64, protein: f64) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        dining_hall: "Epicuria".to_string(),
        station: "Capri".to_string(),
        meal_period: MealPeriod::Dinner,
        date: None,
        nutrition: Nutrition {
            calories,
            protein,
            ..Default::default()
        },
        vegetarian: false,
        vegan: false,
        allergens: Vec::new(),
        ingredients: Vec::new(),
        category: Some(Category::MainCourse),
        tags: Vec::new(),
    }
}

fn catalog() -> Vec<CatalogItem> {
    vec![
        item("Chicken Parmesan", 450.0, 35.0),
        item("Margherita Pizza", 400.0, 18.0),
        item("Pasta Primavera", 350.0, 12.0),
        item("Lamb Souvlaki", 500.0, 40.0),
    ]
}

#[test]
fn test_default_request_uses_balanced() {
    let prefs = Preferences {
        target_calories: 900.0,
        ..Default::default()
    };
    let result = generate(&prefs, &catalog()).unwrap();
    assert_eq!(result.variation.strategy, Strategy::Balanced);
}

#[test]
fn test_regenerate_cycles_all_strategies() {
    let strategies: Vec<Strategy> = (0..4)
        .map(|seed| {
            let prefs = Preferences {
                target_calories: 900.0,
                regeneration: RegenerationType::Regenerate,
                variation_seed: Some(seed),
                ..Default::default()
            };
            generate(&prefs, &catalog()).unwrap().variation.strategy
        })
        .collect();

    assert_eq!(
        strategies,
        vec![
            Strategy::Balanced,
            Strategy::ProteinFocus,
            Strategy::Variety,
            Strategy::MacroFit,
        ]
    );
}

#[test]
fn test_variation_info_reports_seed_used() {
    let prefs = Preferences {
        target_calories: 900.0,
        regeneration: RegenerationType::Regenerate,
        variation_seed: Some(11),
        ..Default::default()
    };
    let result = generate(&prefs, &catalog()).unwrap();
    assert_eq!(result.variation.seed, 11);
}

#[test]
fn test_variety_strategy_is_reproducible() {
    let prefs = Preferences {
        target_calories: 1200.0,
        regeneration: RegenerationType::Regenerate,
        variation_seed: Some(2),
        ..Default::default()
    };
    let cat = catalog();

    let first = generate(&prefs, &cat).unwrap();
    let second = generate(&prefs, &cat).unwrap();

    assert_eq!(first.variation.strategy, Strategy::Variety);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_liked_food_is_selected_first() {
    // Equal protein density: only the liked-food bonus separates them.
    let cat = vec![item("Alpha Bowl", 400.0, 20.0), item("Beta Bowl", 400.0, 20.0)];
    let prefs = Preferences {
        target_calories: 400.0,
        liked_foods: vec!["beta".to_string()],
        ..Default::default()
    };

    let result = generate(&prefs, &cat).unwrap();
    assert_eq!(result.selected_items[0].name, "Beta Bowl");
}

#[test]
fn test_disliked_food_is_deprioritized_not_excluded() {
    let cat = vec![item("Alpha Bowl", 400.0, 20.0), item("Beta Bowl", 400.0, 20.0)];
    let prefs = Preferences {
        target_calories: 800.0,
        disliked_foods: vec!["alpha".to_string()],
        ..Default::default()
    };

    let result = generate(&prefs, &cat).unwrap();

    // Disliked item comes last but still participates once needed.
    assert_eq!(result.selected_items[0].name, "Beta Bowl");
    assert!(
        result
            .selected_items
            .iter()
            .any(|s| s.name == "Alpha Bowl")
    );
}

#[test]
fn test_protein_focus_prefers_protein_heavy_items() {
    let prefs = Preferences {
        target_calories: 500.0,
        regeneration: RegenerationType::Regenerate,
        variation_seed: Some(1),
        ..Default::default()
    };

    let result = generate(&prefs, &catalog()).unwrap();
    assert_eq!(result.variation.strategy, Strategy::ProteinFocus);
    // Souvlaki: best density (0.08) amplified by the highest protein mass.
    assert_eq!(result.selected_items[0].name, "Lamb Souvlaki");
}
