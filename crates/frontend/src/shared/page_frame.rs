//! Root element of every routed page.
//!
//! The element carries `id="{entity}--{category}"` (for example
//! `"a002_product--list"`) and a `data-page-category` attribute holding one
//! of the `PAGE_CAT_*` constants, so pages can be located and styled by kind.

use super::page_standard::page_class;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = page_class(category);
    view! {
        <section id=page_id class=class data-page-category=category>
            {children()}
        </section>
    }
}
