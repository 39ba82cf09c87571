use leptos::prelude::*;

/// Quantity-derived availability filter for the admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL_OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Active => "On sale",
            StatusFilter::Inactive => "Not selling",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    /// Active means stock remains; inactive means it ran out
    pub fn matches(&self, quantity: i64) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => quantity > 0,
            StatusFilter::Inactive => quantity == 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProductListState {
    // Filters
    pub search: String,
    /// "all" or a category id
    pub category: String,
    pub status: StatusFilter,

    // Sorting
    pub sort_field: String,
    pub sort_ascending: bool,

    // Server pagination
    /// 1-based page shown to the user
    pub current_page: usize,
    /// 0-based page index sent to the server
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,

    // Loading flag
    pub loading: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            status: StatusFilter::All,
            sort_field: "name".to_string(),
            sort_ascending: true,
            current_page: 1,
            page_number: 0,
            page_size: 10,
            total_pages: 0,
            loading: true,
        }
    }
}

impl ProductListState {
    /// Header click: flip direction on the active field, otherwise
    /// switch fields and reset to ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Keep the 1-based UI page and the 0-based server index in step
    pub fn set_page(&mut self, page: usize) {
        let page = page.max(1);
        self.current_page = page;
        self.page_number = page - 1;
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_flips_direction_on_same_field() {
        let mut state = ProductListState::default();
        state.toggle_sort("title");
        assert_eq!(state.sort_field, "title");
        assert!(state.sort_ascending);

        state.toggle_sort("title");
        assert!(!state.sort_ascending);
    }

    #[test]
    fn test_toggle_sort_resets_to_ascending_on_new_field() {
        let mut state = ProductListState::default();
        state.toggle_sort("title");
        state.toggle_sort("title");
        assert!(!state.sort_ascending);

        state.toggle_sort("quantity");
        assert_eq!(state.sort_field, "quantity");
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_set_page_keeps_both_counters_in_step() {
        let mut state = ProductListState::default();
        state.set_page(4);
        assert_eq!(state.current_page, 4);
        assert_eq!(state.page_number, 3);

        state.set_page(0);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_number, 0);
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(0));
        assert!(StatusFilter::All.matches(5));
        assert!(StatusFilter::Active.matches(3));
        assert!(!StatusFilter::Active.matches(0));
        assert!(StatusFilter::Inactive.matches(0));
        assert!(!StatusFilter::Inactive.matches(1));
    }

    #[test]
    fn test_status_filter_round_trip() {
        for option in StatusFilter::ALL_OPTIONS {
            assert_eq!(StatusFilter::from_value(option.value()), option);
        }
    }
}
