/// Flat score bonus when an item name matches a liked-food phrase.
pub const LIKED_FOOD_BONUS: f64 = 0.5;

/// Flat score penalty when an item name matches a disliked-food phrase.
/// Disliked items are deprioritized, never excluded.
pub const DISLIKED_FOOD_PENALTY: f64 = 0.5;

/// Protein divisor for the protein-focus multiplier (1 + protein/50).
pub const PROTEIN_FOCUS_SCALE: f64 = 50.0;

/// Range of the seeded per-item factor used by the variety strategy.
pub const VARIETY_FACTOR_MIN: f64 = 0.8;
pub const VARIETY_FACTOR_MAX: f64 = 1.2;

/// Items a plan is expected to contain; macro-fit favors items whose
/// calories sit near target_calories / EXPECTED_ITEM_COUNT.
pub const EXPECTED_ITEM_COUNT: f64 = 4.0;

/// Upper bound on selection passes over the ranked candidate list.
/// Guards against catalogs where no pass makes numeric progress.
pub const MAX_SELECTION_PASSES: usize = 100;
