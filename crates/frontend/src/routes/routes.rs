use crate::domain::a002_product::ui::filters::state::{FilterSelection, SortOption};
use crate::domain::a002_product::ui::filters::ProductFilters;
use crate::domain::a002_product::ui::list::ProductList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Composition root for the storefront catalog. The filter callback is
/// where a product grid sources its query parameters from.
#[component]
fn CatalogPage() -> impl IntoView {
    let on_filter_change =
        Callback::new(|(selection, sort): (FilterSelection, SortOption)| {
            log::debug!(
                "catalog filter changed: {} active filter(s), sort={}",
                selection.active_count(),
                sort.value()
            );
        });

    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">"Catalog"</h1>
            <ProductFilters on_filter_change=on_filter_change />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=CatalogPage />
                <Route path=path!("/admin/products") view=ProductList />
            </Routes>
        </Router>
    }
}
