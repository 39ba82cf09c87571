pub mod state;

use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a001_category::fallback_categories;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::number_format::format_int;
use contracts::domain::a001_category::aggregate::{Category, CategoryKey};
use leptos::prelude::*;
use state::{FilterSelection, SortOption, COLORS, PRICE_MAX, SIZES};

/// Storefront filter panel: category/size/color toggles, a price range,
/// and a sort select. Every change notifies the caller with the updated
/// selection - the mutation always completes before the callback runs.
#[component]
#[allow(non_snake_case)]
pub fn ProductFilters(
    /// Notified with the updated selection and sort option after every change
    on_filter_change: Callback<(FilterSelection, SortOption)>,
) -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let selection = RwSignal::new(FilterSelection::default());
    let (sort_option, set_sort_option) = signal(SortOption::default());
    let is_expanded = RwSignal::new(false);

    // Load the taxonomy once at mount and keep leaf categories only.
    // A failure is non-fatal: substitute the built-in list, no retry.
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_categories().await {
            Ok(all) => {
                let leaves: Vec<Category> =
                    all.into_iter().filter(|c| c.is_leaf()).collect();
                set_categories.set(leaves);
            }
            Err(e) => {
                log::error!("Failed to fetch categories: {}", e);
                set_categories.set(fallback_categories());
            }
        }
    });

    // Mutate first, then notify with the value read back from the
    // signal, so the callback always observes the completed toggle.
    let notify = move || {
        on_filter_change.run((selection.get_untracked(), sort_option.get_untracked()));
    };

    let toggle_category = move |key: CategoryKey| {
        selection.update(move |s| s.toggle_category(key));
        notify();
    };

    let toggle_size = move |size: &'static str| {
        selection.update(move |s| s.toggle_size(size));
        notify();
    };

    let toggle_color = move |color: &'static str| {
        selection.update(move |s| s.toggle_color(color));
        notify();
    };

    let handle_sort_change = move |value: String| {
        set_sort_option.set(SortOption::from_value(&value));
        notify();
    };

    let clear_all = move || {
        selection.update(|s| s.clear());
        notify();
    };

    let active_count = Signal::derive(move || selection.with(|s| s.active_count()));

    // Tag labels resolve a category id back to its display name
    let category_label = move |id: &str| -> String {
        categories
            .read()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let sort_select = move || {
        view! {
            <label class="filter-sort">
                <span class="filter-sort__label">"Sort by:"</span>
                <select
                    class="filter-sort__select"
                    prop:value=move || sort_option.get().value()
                    on:change=move |ev| handle_sort_change(event_target_value(&ev))
                >
                    {SortOption::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.value()>{option.label()}</option>
                        })
                        .collect_view()}
                </select>
            </label>
        }
    };

    let filter_content = move || {
        view! {
            <div class="filter-sections">
                <div class="filter-section">
                    <h4 class="filter-section__title">"Categories"</h4>
                    <div class="filter-section__list">
                        {move || categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                // The checkbox holds the whole category;
                                // the key boundary reduces it to its id.
                                let toggled = category.clone();
                                let checked_id = category.id.clone();
                                view! {
                                    <label class="filter-checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selection
                                                .with(|s| s.categories.contains(&checked_id))
                                            on:change=move |_| toggle_category(
                                                (&toggled).into(),
                                            )
                                        />
                                        {category.name.clone()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="filter-section">
                    <h4 class="filter-section__title">"Sizes"</h4>
                    <div class="filter-section__chips">
                        {SIZES
                            .into_iter()
                            .map(|size| view! {
                                <button
                                    class=move || if selection
                                        .with(|s| s.sizes.contains(size))
                                    {
                                        "size-chip size-chip--selected"
                                    } else {
                                        "size-chip"
                                    }
                                    on:click=move |_| toggle_size(size)
                                >
                                    {size}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="filter-section">
                    <h4 class="filter-section__title">"Colors"</h4>
                    <div class="filter-section__list">
                        {COLORS
                            .into_iter()
                            .map(|color| view! {
                                <label class="filter-checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selection
                                            .with(|s| s.colors.contains(color))
                                        on:change=move |_| toggle_color(color)
                                    />
                                    {color}
                                </label>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="filter-section">
                    <h4 class="filter-section__title">"Price"</h4>
                    <div class="price-range">
                        <div class="price-range__track">
                            <div
                                class="price-range__fill"
                                style=move || {
                                    let (min, max) = selection.with(|s| s.price_range);
                                    format!(
                                        "left: {}%; right: {}%;",
                                        min * 100 / PRICE_MAX,
                                        100 - max * 100 / PRICE_MAX,
                                    )
                                }
                            ></div>
                        </div>
                        <div class="price-range__bounds">
                            <span>{move || {
                                let (min, _) = selection.with(|s| s.price_range);
                                format_int(min as i64)
                            }}</span>
                            <span>{move || {
                                let (_, max) = selection.with(|s| s.price_range);
                                format_int(max as i64)
                            }}</span>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    let filter_tags = move || {
        view! {
            {move || {
                if selection.with(|s| s.active_count() == 0) {
                    return ().into_any();
                }
                let current = selection.get();
                view! {
                    <div class="filter-tags">
                        <span class="filter-tags__label">"Selected:"</span>
                        {current
                            .categories
                            .iter()
                            .map(|id| {
                                let id = id.clone();
                                let remove_id = id.clone();
                                view! {
                                    <FilterTag
                                        label=category_label(&id)
                                        on_remove=Callback::new(move |_| toggle_category(
                                            CategoryKey::Id(remove_id.clone()),
                                        ))
                                    />
                                }
                            })
                            .collect_view()}
                        {SIZES
                            .into_iter()
                            .filter(|size| current.sizes.contains(*size))
                            .map(|size| view! {
                                <FilterTag
                                    label=format!("Size {}", size)
                                    on_remove=Callback::new(move |_| toggle_size(size))
                                />
                            })
                            .collect_view()}
                        {COLORS
                            .into_iter()
                            .filter(|color| current.colors.contains(*color))
                            .map(|color| view! {
                                <FilterTag
                                    label=color.to_string()
                                    on_remove=Callback::new(move |_| toggle_color(color))
                                />
                            })
                            .collect_view()}
                        <button
                            class="filter-tags__clear"
                            on:click=move |_| clear_all()
                        >
                            "Clear all"
                        </button>
                    </div>
                }
                .into_any()
            }}
        }
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            header_controls=sort_select
            filter_content=filter_content
            filter_tags=ViewFn::from(filter_tags)
        />
    }
}
