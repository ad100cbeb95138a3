mod enhance;
mod persistence;

pub use enhance::{
    derive_calories, detect_allergens, detect_category, enhance_item, enhance_items,
};
pub use persistence::{load_catalog, load_raw_items, save_catalog};
