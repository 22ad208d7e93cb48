//! Header cell that switches the list to its sort key.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Stock"
//!     sort_key="stock"
//!     ascending=false
//!     current_key=Signal::derive(move || controls.with(|c| c.filter.sort.key()))
//!     on_sort=Callback::new(move |key| set_sort(key))
//! />
//! ```

use crate::shared::list_utils::sort_indicator;
use leptos::prelude::*;
use thaw::*;

/// Every sort key has a fixed direction, so a click only selects the key.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    sort_key: &'static str,

    /// Direction this key sorts in
    ascending: bool,

    #[prop(into)]
    current_key: Signal<&'static str>,

    on_sort: Callback<&'static str>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let is_current = move || current_key.get() == sort_key;

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                class:table__sortable-header--active=is_current
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class="table__sort-indicator">
                    {move || sort_indicator(is_current(), ascending)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
