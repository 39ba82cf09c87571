use contracts::domain::a001_category::aggregate::CategoryKey;
use std::collections::BTreeSet;

/// Upper bound of the storefront price slider
pub const PRICE_MAX: u64 = 2_000_000;

/// Size labels offered by the storefront
pub const SIZES: [&str; 5] = ["S", "M", "L", "XL", "XXL"];

/// Color labels offered by the storefront
pub const COLORS: [&str; 6] = ["Black", "White", "Red", "Blue", "Yellow", "Pink"];

/// Sort options offered by the storefront catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::Popularity,
        SortOption::PriceLow,
        SortOption::PriceHigh,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SortOption::Popularity => "popularity",
            SortOption::PriceLow => "price_low",
            SortOption::PriceHigh => "price_high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Popularity => "Popularity",
            SortOption::PriceLow => "Price: low to high",
            SortOption::PriceHigh => "Price: high to low",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "price_low" => SortOption::PriceLow,
            "price_high" => SortOption::PriceHigh,
            _ => SortOption::Popularity,
        }
    }
}

/// User-selected storefront filters. Mutated only by the toggle/clear
/// operations below; insertion order within each set is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    /// Inclusive price bounds, kept within `0..=PRICE_MAX`
    pub price_range: (u64, u64),
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            sizes: BTreeSet::new(),
            colors: BTreeSet::new(),
            price_range: (0, PRICE_MAX),
        }
    }
}

impl FilterSelection {
    /// Toggle a category. The key is normalized to the category id at
    /// this boundary, so the checkbox list (full objects) and the
    /// removable tags (raw ids) address the same set entry.
    pub fn toggle_category(&mut self, key: impl Into<CategoryKey>) {
        let id = key.into().into_id();
        Self::toggle(&mut self.categories, id);
    }

    pub fn toggle_size(&mut self, size: &str) {
        Self::toggle(&mut self.sizes, size.to_string());
    }

    pub fn toggle_color(&mut self, color: &str) {
        Self::toggle(&mut self.colors, color.to_string());
    }

    fn toggle(set: &mut BTreeSet<String>, value: String) {
        if !set.remove(&value) {
            set.insert(value);
        }
    }

    pub fn set_price_range(&mut self, min: u64, max: u64) {
        let min = min.min(PRICE_MAX);
        let max = max.min(PRICE_MAX).max(min);
        self.price_range = (min, max);
    }

    /// Reset to the default selection: empty sets, full price range
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of selected filter values across all sets
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.sizes.len() + self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, LEAF_LEVEL};

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut selection = FilterSelection::default();
        let original = selection.clone();

        selection.toggle_size("M");
        assert!(selection.sizes.contains("M"));
        selection.toggle_size("M");
        assert_eq!(selection, original);

        selection.toggle_category("men_jeans");
        selection.toggle_category("men_jeans");
        assert_eq!(selection, original);
    }

    #[test]
    fn test_object_and_raw_id_toggle_the_same_entry() {
        let category = Category {
            id: "men_tshirt".to_string(),
            name: "T-shirts".to_string(),
            level: LEAF_LEVEL,
        };

        let mut selection = FilterSelection::default();
        selection.toggle_category(&category);
        assert!(selection.categories.contains("men_tshirt"));

        // Removing via the tag's raw id hits the same entry
        selection.toggle_category("men_tshirt");
        assert!(selection.categories.is_empty());
    }

    #[test]
    fn test_clear_restores_default_regardless_of_prior_state() {
        let mut selection = FilterSelection::default();
        selection.toggle_category("men_jacket");
        selection.toggle_size("XL");
        selection.toggle_color("Red");
        selection.set_price_range(100_000, 500_000);

        selection.clear();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn test_price_range_stays_in_bounds() {
        let mut selection = FilterSelection::default();
        selection.set_price_range(500_000, PRICE_MAX + 1);
        assert_eq!(selection.price_range, (500_000, PRICE_MAX));

        // An inverted range collapses to the lower bound
        selection.set_price_range(800_000, 100_000);
        assert_eq!(selection.price_range, (800_000, 800_000));
    }

    #[test]
    fn test_active_count() {
        let mut selection = FilterSelection::default();
        assert_eq!(selection.active_count(), 0);
        selection.toggle_category("men_shirt");
        selection.toggle_size("S");
        selection.toggle_size("M");
        assert_eq!(selection.active_count(), 3);
    }

    #[test]
    fn test_sort_option_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_value(option.value()), option);
        }
        assert_eq!(SortOption::from_value("rating"), SortOption::Popularity);
    }
}
