use crate::shared::icons::icon;
use leptos::prelude::*;

/// One entry in the windowed page-button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-based)
    Page(usize),
    /// A gap between the window and the first/last page
    Ellipsis,
}

/// Compute the bounded window of page buttons around `current`
/// (1-based): always the first and last page, the current page ± 2,
/// and an ellipsis for any gap.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for i in 1..=total {
        let near_current = i + 2 >= current && i <= current + 2;
        if i == 1 || i == total || near_current {
            items.push(PageItem::Page(i));
        } else if i + 3 == current || i == current + 3 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

/// PaginationControls component - windowed page buttons with
/// previous/next controls disabled at the boundaries
///
/// Hidden entirely while there is at most one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based, as shown to the user)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the new 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        {move || {
            let total = total_pages.get();
            if total <= 1 {
                return ().into_any();
            }
            let current = current_page.get();

            view! {
                <div class="pagination-controls">
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            if current > 1 {
                                on_page_change.run(current - 1);
                            }
                        }
                        disabled=current == 1
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {page_window(current, total)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => view! {
                                <button
                                    class=if page == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! {
                                <span class="pagination-ellipsis">"..."</span>
                            }
                            .into_any(),
                        })
                        .collect_view()}
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            if current < total {
                                on_page_change.run(current + 1);
                            }
                        }
                        disabled=current == total
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            }
            .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_window_at_the_start() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_at_the_end() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_with_few_pages() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_window_with_no_pages() {
        assert!(page_window(1, 0).is_empty());
    }
}
