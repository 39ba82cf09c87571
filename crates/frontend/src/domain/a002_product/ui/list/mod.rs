pub mod state;

use crate::domain::a001_category::api::fetch_admin_categories;
use crate::domain::a002_product::api::{delete_product, fetch_products, ProductQuery};
use crate::shared::collate::compare_locale;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::number_format::format_int;
use crate::system::auth::storage::load_admin_session;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use state::{create_state, ProductListState, StatusFilter};
use std::cmp::Ordering;

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "sellingPrice" => self.selling_price.cmp(&other.selling_price),
            "quantity" => self.quantity.cmp(&other.quantity),
            "title" => compare_locale(&self.title, &other.title),
            "category" => {
                let a = self
                    .category
                    .as_ref()
                    .and_then(|c| c.category_id.clone())
                    .unwrap_or_default();
                let b = other
                    .category
                    .as_ref()
                    .and_then(|c| c.category_id.clone())
                    .unwrap_or_default();
                a.cmp(&b)
            }
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.title.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Client-side secondary sort and filter pass over the fetched page.
/// The server already pages and sorts; this re-applies the current sort
/// to the page and narrows it by title/category/status.
fn visible_products(
    mut products: Vec<Product>,
    sort_field: &str,
    sort_ascending: bool,
    search: &str,
    category: &str,
    status: StatusFilter,
) -> Vec<Product> {
    sort_list(&mut products, sort_field, sort_ascending);
    let mut products = filter_list(products, search);
    products.retain(|product| {
        let category_match = category == "all"
            || product
                .category
                .as_ref()
                .and_then(|c| c.id)
                .map(|id| id.to_string())
                .as_deref()
                == Some(category);
        category_match && status.matches(product.quantity)
    });
    products
}

/// Drop the deleted product from the loaded page without refetching
fn remove_product(products: &mut Vec<Product>, id: i64) {
    products.retain(|product| product.id != id);
}

#[component]
fn SortableHeader(
    label: &'static str,
    field: &'static str,
    state: RwSignal<ProductListState>,
) -> impl IntoView {
    view! {
        <th
            scope="col"
            class="product-table__header product-table__header--sortable"
            on:click=move |_| state.update(|s| s.toggle_sort(field))
        >
            <div class="product-table__header-inner">
                {label}
                <span class="product-table__sort-indicator">
                    {move || state.with(|s| {
                        get_sort_indicator(&s.sort_field, field, s.sort_ascending)
                    })}
                </span>
            </div>
        </th>
    }
}

/// Admin product listing: server-side paging with a client-side sort and
/// filter pass over the fetched page, plus delete with confirmation.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());

    // The session is read once here; API calls take the token explicitly
    let session = StoredValue::new(load_admin_session());

    // Request generation counter. A slow response that is no longer the
    // latest in-flight request is dropped instead of overwriting newer
    // data.
    let request_seq = StoredValue::new(0u64);

    let fetch = move || {
        let Some(session) = session.get_value() else {
            log::error!("No admin session; cannot fetch products");
            set_products.set(Vec::new());
            state.update(|s| s.loading = false);
            return;
        };

        let seq = request_seq
            .try_update_value(|s| {
                *s += 1;
                *s
            })
            .unwrap_or_default();

        let query = state.with_untracked(|s| ProductQuery {
            page: s.page_number,
            size: s.page_size,
            sort_field: s.sort_field.clone(),
            sort_ascending: s.sort_ascending,
            category: (s.category != "all").then(|| s.category.clone()),
            keyword: (!s.search.is_empty()).then(|| s.search.clone()),
        });
        state.update(|s| s.loading = true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_products(&query, &session.jwt).await;
            if request_seq.get_value() != seq {
                // Superseded by a newer request
                return;
            }
            match result {
                Ok(page) => {
                    set_products.set(page.content);
                    state.update(|s| {
                        s.total_pages = page.total_pages;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    log::error!("Failed to fetch products: {}", e);
                    set_products.set(Vec::new());
                    state.update(|s| s.loading = false);
                }
            }
        });
    };

    // Refetch whenever paging, search, category or sort inputs change.
    // The memo keeps loading/total_pages updates from re-triggering it.
    let fetch_inputs = Memo::new(move |_| {
        state.with(|s| {
            (
                s.page_number,
                s.page_size,
                s.search.clone(),
                s.category.clone(),
                s.sort_field.clone(),
                s.sort_ascending,
            )
        })
    });
    Effect::new(move |_| {
        fetch_inputs.track();
        fetch();
    });

    // Category dropdown data; a failure leaves only "all", logged
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_admin_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => log::error!("Failed to fetch categories: {}", e),
        }
    });

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this product? This cannot be undone.")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(session) = session.get_value() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match delete_product(id, &session.jwt).await {
                Ok(()) => set_products.update(|list| remove_product(list, id)),
                Err(e) => {
                    log::error!("Failed to delete product {}: {}", id, e);
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(
                            "Could not delete the product. Please try again later.",
                        );
                    }
                }
            }
        });
    };

    let visible = Memo::new(move |_| {
        let (sort_field, sort_ascending, search, category, status) = state.with(|s| {
            (
                s.sort_field.clone(),
                s.sort_ascending,
                s.search.clone(),
                s.category.clone(),
                s.status,
            )
        });
        visible_products(
            products.get(),
            &sort_field,
            sort_ascending,
            &search,
            &category,
            status,
        )
    });

    view! {
        <div class="admin-products">
            <div class="admin-products__header">
                <h1 class="admin-products__title">"Products"</h1>
                <a href="/admin/products/add" class="btn btn--primary">
                    {icon("plus")}
                    "Add product"
                </a>
            </div>

            <div class="admin-products__toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.search = value);
                    })
                    placeholder="Search products..."
                />
                <select
                    class="admin-products__select"
                    prop:value=move || state.with(|s| s.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.category = value);
                    }
                >
                    <option value="all">"All categories"</option>
                    {move || categories
                        .get()
                        .into_iter()
                        .map(|category| view! {
                            <option value=category.id.clone()>{category.name.clone()}</option>
                        })
                        .collect_view()}
                </select>
                <select
                    class="admin-products__select"
                    prop:value=move || state.with(|s| s.status.value())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.status = StatusFilter::from_value(&value));
                    }
                >
                    {StatusFilter::ALL_OPTIONS
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.value()>{option.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                if state.with(|s| s.loading) {
                    return view! {
                        <div class="loading-indicator">
                            <div class="loading-indicator__spinner"></div>
                            <div class="loading-indicator__text">"Loading..."</div>
                        </div>
                    }
                    .into_any();
                }

                let rows = visible.get();
                view! {
                    <table class="product-table">
                        <thead>
                            <tr>
                                <SortableHeader label="ID" field="id" state=state />
                                <SortableHeader label="Product" field="title" state=state />
                                <SortableHeader label="Category" field="category" state=state />
                                <SortableHeader label="Price" field="sellingPrice" state=state />
                                <SortableHeader label="Stock" field="quantity" state=state />
                                <SortableHeader label="Status" field="status" state=state />
                                <th scope="col" class="product-table__header product-table__header--actions">
                                    "Actions"
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="product-table__empty">
                                            "No products found"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|product| {
                                        let id = product.id;
                                        let category_name = product
                                            .category
                                            .as_ref()
                                            .and_then(|c| c.name.clone())
                                            .unwrap_or_else(|| "N/A".to_string());
                                        let active = product.is_active();
                                        view! {
                                            <tr class="product-table__row">
                                                <td>{id}</td>
                                                <td>{product.title.clone()}</td>
                                                <td>{category_name}</td>
                                                <td>{format_int(product.selling_price)}</td>
                                                <td>{product.quantity}</td>
                                                <td>
                                                    <span class=if active {
                                                        "status-badge status-badge--active"
                                                    } else {
                                                        "status-badge status-badge--inactive"
                                                    }>
                                                        {if active { "On sale" } else { "Not selling" }}
                                                    </span>
                                                </td>
                                                <td class="product-table__actions">
                                                    <a
                                                        href=format!("/product/{}", id)
                                                        target="_blank"
                                                        title="View"
                                                    >
                                                        {icon("eye")}
                                                    </a>
                                                    <a
                                                        href=format!("/admin/products/edit/{}", id)
                                                        title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </a>
                                                    <button
                                                        class="product-table__delete"
                                                        title="Delete"
                                                        on:click=move |_| handle_delete(id)
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::CategoryRef;

    fn fixture() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                title: "B".to_string(),
                selling_price: 10,
                quantity: 0,
                category: Some(CategoryRef {
                    id: Some(7),
                    category_id: Some("men_shirt".to_string()),
                    name: Some("Shirts".to_string()),
                }),
            },
            Product {
                id: 2,
                title: "A".to_string(),
                selling_price: 5,
                quantity: 3,
                category: Some(CategoryRef {
                    id: Some(8),
                    category_id: Some("men_tshirt".to_string()),
                    name: Some("T-shirts".to_string()),
                }),
            },
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let rows = visible_products(fixture(), "title", true, "", "all", StatusFilter::All);
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn test_sort_by_title_orders_diacritics_by_base_letter() {
        let mut products = fixture();
        products[0].title = "Quần jean".to_string();
        products[1].title = "Áo khoác".to_string();
        let rows = visible_products(products, "title", true, "", "all", StatusFilter::All);
        assert_eq!(rows[0].title, "Áo khoác");
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let rows =
            visible_products(fixture(), "sellingPrice", false, "", "all", StatusFilter::All);
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_sort_by_category_id() {
        let rows = visible_products(fixture(), "category", true, "", "all", StatusFilter::All);
        // "men_shirt" sorts before "men_tshirt"
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_unknown_sort_field_preserves_order() {
        let rows = visible_products(fixture(), "name", true, "", "all", StatusFilter::All);
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_status_filter() {
        let active = visible_products(fixture(), "id", true, "", "all", StatusFilter::Active);
        assert_eq!(ids(&active), vec![2]);

        let inactive =
            visible_products(fixture(), "id", true, "", "all", StatusFilter::Inactive);
        assert_eq!(ids(&inactive), vec![1]);

        let all = visible_products(fixture(), "id", true, "", "all", StatusFilter::All);
        assert_eq!(ids(&all), vec![1, 2]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = visible_products(fixture(), "id", true, "a", "all", StatusFilter::All);
        assert_eq!(ids(&rows), vec![2]);

        let none = visible_products(fixture(), "id", true, "zzz", "all", StatusFilter::All);
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_filter_matches_embedded_numeric_id() {
        let rows = visible_products(fixture(), "id", true, "", "7", StatusFilter::All);
        assert_eq!(ids(&rows), vec![1]);
    }

    #[test]
    fn test_predicates_are_anded() {
        // Title matches product 2, but status inactive only matches 1
        let rows = visible_products(fixture(), "id", true, "a", "all", StatusFilter::Inactive);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_remove_product_drops_exactly_one_id() {
        let mut products = fixture();
        remove_product(&mut products, 1);
        assert_eq!(ids(&products), vec![2]);

        // Unknown id leaves the list untouched, matching the
        // failed-delete path where this is never called
        remove_product(&mut products, 99);
        assert_eq!(ids(&products), vec![2]);
    }
}
