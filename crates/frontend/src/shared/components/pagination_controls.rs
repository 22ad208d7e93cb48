use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Showing X–Y of Z" line.
pub fn showing_text(from: usize, to: usize, total: usize) -> String {
    if total == 0 {
        "No results".to_string()
    } else {
        format!("Showing {}–{} of {}", from, to, total)
    }
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// 1-based position of the first row on the page, 0 when empty
    #[prop(into)]
    showing_from: Signal<usize>,

    #[prop(into)]
    showing_to: Signal<usize>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-showing">
                {move || showing_text(showing_from.get(), showing_to.get(), total_count.get())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_text() {
        assert_eq!(showing_text(9, 16, 20), "Showing 9–16 of 20");
        assert_eq!(showing_text(0, 0, 0), "No results");
    }
}
