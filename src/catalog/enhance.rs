use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{CatalogItem, Category, Nutrition};

/// Station names mapped to the category they serve.
static STATION_CATEGORIES: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("freshly bowled", Category::MainCourse);
    m.insert("harvest", Category::Side);
    m.insert("simply grilled", Category::MainCourse);
    m.insert("soups", Category::Soup);
    m.insert("the hearth", Category::MainCourse);
    m.insert("the garden", Category::Side);
    m.insert("the oven", Category::MainCourse);
    m.insert("the wok", Category::MainCourse);
    m.insert("the deli", Category::Side);
    m.insert("the sweet spot", Category::Dessert);
    m.insert("beverage station", Category::Beverage);
    m.insert("the front burner", Category::MainCourse);
    m.insert("the grill", Category::MainCourse);
    m.insert("the pizzeria", Category::MainCourse);
    m.insert("harvest kitchen", Category::MainCourse);
    m.insert("seasonal sides", Category::Side);
    m.insert("field greens bar", Category::Salad);
    m.insert("market salads & fruit", Category::Salad);
    m.insert("the sweet stop", Category::Dessert);
    m.insert("frozen yogurt", Category::Dessert);
    m.insert("capri", Category::MainCourse);
    m.insert("psistaria", Category::MainCourse);
    m.insert("mezze", Category::Appetizer);
    m.insert("alimenti", Category::MainCourse);
    m.insert("dolce", Category::Dessert);
    m.insert("bakery", Category::Dessert);
    m.insert("pastries", Category::Dessert);
    m.insert("sweets", Category::Dessert);
    m.insert("pizza", Category::MainCourse);
    m.insert("grill", Category::MainCourse);
    m.insert("sandwiches", Category::MainCourse);
    m.insert("pasta", Category::MainCourse);
    m.insert("burgers", Category::MainCourse);
    m.insert("entrees", Category::MainCourse);
    m.insert("global kitchen", Category::MainCourse);
    m.insert("taqueria", Category::MainCourse);
    m.insert("mediterranean", Category::MainCourse);
    m.insert("salad bar", Category::Salad);
    m.insert("vegetables", Category::Side);
    m.insert("drinks", Category::Beverage);
    m.insert("beverages", Category::Beverage);
    m.insert("fruit", Category::Side);
    m.insert("cereal", Category::Side);
    m
});

/// Name keywords checked when the station gives no category.
/// Order matters: the first matching category wins.
static FOOD_TYPE_KEYWORDS: LazyLock<Vec<(Category, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        (
            Category::Dessert,
            vec![
                "cake", "cookie", "cupcake", "ice cream", "pudding", "pie", "sweet", "chocolate",
                "candy", "dessert",
            ],
        ),
        (
            Category::Soup,
            vec!["soup", "chowder", "broth", "bisque", "stew"],
        ),
        (Category::Salad, vec!["salad", "slaw", "greens"]),
        (
            Category::Beverage,
            vec![
                "juice", "soda", "coffee", "tea", "beverage", "smoothie", "latte", "lemonade",
            ],
        ),
        (
            Category::Side,
            vec!["fries", "chips", "rice", "vegetable", "potatoes", "beans", "side"],
        ),
        (
            Category::MainCourse,
            vec![
                "chicken", "beef", "pork", "fish", "tofu", "burger", "sandwich", "pizza", "pasta",
                "wrap", "taco", "burrito", "bowl",
            ],
        ),
    ]
});

/// Allergens detectable from ingredient text.
static ALLERGEN_KEYWORDS: LazyLock<Vec<(&'static str, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        ("peanut", vec!["peanut", "peanuts", "arachis"]),
        (
            "tree nut",
            vec![
                "almond", "hazelnut", "walnut", "cashew", "pistachio", "pecan", "macadamia",
            ],
        ),
        (
            "dairy",
            vec![
                "milk", "cheese", "butter", "cream", "yogurt", "lactose", "dairy", "whey", "casein",
            ],
        ),
        ("egg", vec!["egg", "eggs", "yolk", "albumen"]),
        ("soy", vec!["soy", "soybeans", "soya", "edamame", "tofu"]),
        ("wheat", vec!["wheat", "gluten", "flour", "pasta", "bread"]),
        (
            "fish",
            vec!["fish", "salmon", "tuna", "cod", "tilapia", "halibut", "anchovy"],
        ),
        (
            "shellfish",
            vec!["shellfish", "shrimp", "crab", "lobster", "clam", "mussel", "oyster"],
        ),
        ("sesame", vec!["sesame", "tahini"]),
    ]
});

const MEAT_KEYWORDS: &[&str] = &[
    "meat", "beef", "chicken", "pork", "lamb", "turkey", "duck", "veal", "bacon", "ham", "sausage",
    "salami", "pepperoni", "prosciutto", "steak", "burger", "meatball", "brisket", "ribs",
];

const FISH_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "tilapia", "halibut", "trout", "bass", "sardine", "anchovy",
    "mackerel", "swordfish", "catfish",
];

const SHELLFISH_KEYWORDS: &[&str] = &[
    "shellfish", "shrimp", "prawn", "crab", "lobster", "clam", "mussel", "oyster", "scallop",
    "squid", "octopus", "calamari",
];

const ANIMAL_BYPRODUCT_KEYWORDS: &[&str] = &[
    "gelatin", "lard", "tallow", "suet", "rennet", "bone broth", "animal stock",
    "worcestershire sauce",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "lactose", "dairy", "whey", "casein", "ghee",
    "custard", "ice cream", "buttermilk",
];

const EGG_KEYWORDS: &[&str] = &[
    "egg", "eggs", "yolk", "albumen", "mayonnaise", "meringue", "aioli", "quiche", "omelet",
];

const HONEY_KEYWORDS: &[&str] = &["honey", "honeycomb", "bee pollen"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Detect a category from the serving station, falling back to name
/// keywords and finally Main Course.
pub fn detect_category(name: &str, station: &str) -> Category {
    let station_lower = station.to_lowercase();
    if let Some(category) = STATION_CATEGORIES.get(station_lower.as_str()) {
        return category.clone();
    }

    // Station names like "Late Night De Neve Grill" still carry a keyword.
    // Longest key wins so "harvest kitchen" beats "harvest".
    if !station_lower.is_empty() {
        let mut matches: Vec<(&&str, &Category)> = STATION_CATEGORIES
            .iter()
            .filter(|(key, _)| station_lower.contains(*key))
            .collect();
        matches.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        if let Some((_, category)) = matches.first() {
            return (*category).clone();
        }
    }

    let name_lower = name.to_lowercase();
    for (category, keywords) in FOOD_TYPE_KEYWORDS.iter() {
        if contains_any(&name_lower, keywords) {
            return category.clone();
        }
    }

    Category::MainCourse
}

/// Detect allergens present in the ingredient text.
pub fn detect_allergens(ingredients: &[String]) -> Vec<String> {
    if ingredients.is_empty() {
        return Vec::new();
    }

    let text = ingredients.join(" ").to_lowercase();
    ALLERGEN_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(&text, keywords))
        .map(|(allergen, _)| allergen.to_string())
        .collect()
}

fn contains_meat(text: &str) -> bool {
    contains_any(text, MEAT_KEYWORDS)
        || contains_any(text, FISH_KEYWORDS)
        || contains_any(text, SHELLFISH_KEYWORDS)
        || contains_any(text, ANIMAL_BYPRODUCT_KEYWORDS)
}

fn contains_animal_products(text: &str) -> bool {
    contains_meat(text)
        || contains_any(text, DAIRY_KEYWORDS)
        || contains_any(text, EGG_KEYWORDS)
        || contains_any(text, HONEY_KEYWORDS)
}

/// Calories derived from macros when the source omits them.
pub fn derive_calories(nutrition: &Nutrition) -> f64 {
    nutrition.protein * 4.0 + nutrition.carbs * 4.0 + nutrition.fat * 9.0
}

/// Fill in calories, category, allergens and dietary flags for one raw item.
///
/// Explicit data always wins: stored categories, listed allergens and
/// already-set flags are kept, inference only adds.
pub fn enhance_item(mut item: CatalogItem) -> CatalogItem {
    if item.nutrition.calories <= 0.0 {
        item.nutrition.calories = derive_calories(&item.nutrition);
    }

    if item.category.is_none() {
        item.category = Some(detect_category(&item.name, &item.station));
    }

    for allergen in detect_allergens(&item.ingredients) {
        if !item.has_allergen(&allergen) {
            item.allergens.push(allergen);
        }
    }

    let tagged_vegetarian = item.has_tag("vegetarian") || item.has_tag("veg");
    let tagged_vegan = item.has_tag("vegan") || item.has_tag("plant-based");
    let tagged_meat = item.has_tag("meat") || item.has_tag("contains meat");

    item.vegetarian = item.vegetarian || tagged_vegetarian || tagged_vegan || item.vegan;
    item.vegan = item.vegan || tagged_vegan;

    if !item.ingredients.is_empty() {
        let text = item.ingredients.join(" ").to_lowercase();

        if !item.vegetarian && !tagged_meat && !contains_meat(&text) {
            item.vegetarian = true;
            if !contains_animal_products(&text) {
                item.vegan = true;
            }
        } else if item.vegetarian
            && !item.vegan
            && !contains_any(&text, DAIRY_KEYWORDS)
            && !contains_any(&text, EGG_KEYWORDS)
            && !contains_any(&text, HONEY_KEYWORDS)
        {
            item.vegan = true;
        }
    }

    item
}

/// Enhance a whole raw dump.
pub fn enhance_items(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.into_iter().map(enhance_item).collect()
}
