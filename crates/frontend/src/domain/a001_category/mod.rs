pub mod api;

use contracts::domain::a001_category::aggregate::{Category, LEAF_LEVEL};

/// Built-in leaf categories used when the taxonomy fetch fails, so the
/// filter panel stays usable offline.
pub fn fallback_categories() -> Vec<Category> {
    [
        ("men_tshirt", "T-shirts"),
        ("men_shirt", "Shirts"),
        ("men_jeans", "Jeans"),
        ("women_dress", "Skirts"),
        ("women_dress2", "Dresses"),
        ("men_jacket", "Jackets"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
        level: LEAF_LEVEL,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_categories_are_leaves() {
        let categories = fallback_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| c.is_leaf()));
    }
}
