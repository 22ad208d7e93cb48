//! Collapsible filter bar shared by the list pages.
//!
//! The header row always shows the active-filter count, the pagination
//! controls and a clear button; the form fields fold away underneath.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Drives the count badge and the visibility of the clear button.
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ViewFn,
    #[prop(into)] filter_content: ViewFn,
    /// Chips for the filters currently applied.
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let has_filters = move || active_filters_count.get() > 0;

    view! {
        <div class="filter-panel" class:filter-panel--active=has_filters>
            <div class="filter-panel-header">
                <button
                    class="filter-panel-header__left button button--ghost"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|open| *open = !*open)
                >
                    {move || icon(if is_expanded.get() { "chevron-up" } else { "chevron-down" })}
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=has_filters>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </button>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
                <Show when=has_filters>
                    <button class="button button--ghost" on:click=move |_| on_clear.run(())>
                        {icon("x")}
                        " Clear filters"
                    </button>
                </Show>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.clone().map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </Show>
        </div>
    }
}

/// Removable chip naming one applied filter.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |event| {
                    event.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}
