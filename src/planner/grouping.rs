use crate::models::{CatalogItem, Category, CategoryGroup, SelectedItem};

/// Bucket the selection by category in display order: the named categories
/// first (Main Course through Beverage), then any other categories
/// alphabetically. Items keep their selection order within a bucket.
pub fn group_by_category(selected: &[SelectedItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in selected {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category.clone(),
                items: vec![item.clone()],
            }),
        }
    }

    groups.sort_by_key(|g| g.category.display_rank());
    groups
}

/// Diversity check: a plan without any main course, drawn from a candidate
/// set that offered one, warrants a notice (not a target miss).
pub fn diversity_warning(
    selected: &[SelectedItem],
    candidates: &[&CatalogItem],
) -> Option<String> {
    let selected_main = selected
        .iter()
        .any(|s| s.category == Category::MainCourse);
    let offered_main = candidates
        .iter()
        .any(|c| c.resolved_category() == Category::MainCourse);

    if !selected_main && offered_main {
        Some("Plan contains no main course even though one was available".to_string())
    } else {
        None
    }
}
