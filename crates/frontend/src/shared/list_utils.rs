//! Shared helpers for list views (search, sorting, UI bits)

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// Whether the item matches the search query (case-insensitive)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named field
pub trait Sortable {
    /// Compare two items by the given field. Unknown fields compare
    /// equal, which keeps the current order.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given field and direction
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep only the items matching the search query
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a table header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Debounce delay for the search input, in milliseconds
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the clear button state)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce
    let (input_value, set_input_value) = signal(value.get_untracked());

    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout) = pending.try_update_value(|p| p.take()).flatten() {
            timeout.cancel();
        }

        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        if let Some(timeout) = pending.try_update_value(|p| p.take()).flatten() {
            timeout.cancel();
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
