//! Header bar: navigation toggle, product name and the current section.

use super::global_context::AppGlobalContext;
use super::sidebar::section_label;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let pathname = use_location().pathname;
    let nav_open = move || ctx.nav_open.get();

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_nav()
                aria-expanded=move || nav_open().to_string()
                title=move || if nav_open() { "Hide navigation" } else { "Show navigation" }
            >
                {move || icon(if nav_open() { "panel-left-close" } else { "panel-left-open" })}
            </button>
            <span class="top-header__title">"E-commerce Admin"</span>
            {move || section_label(&pathname.get()).map(|label| view! {
                <span class="top-header__section">{label}</span>
            })}
        </header>
    }
}
