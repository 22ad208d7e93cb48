//! Dialog overlay used by the detail views and the product/inventory forms.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Centered dialog. Clicking the backdrop, the close button or pressing
/// Escape all run `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());
    let label = title.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <section
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=|event: ev::MouseEvent| event.stop_propagation()
            >
                <header class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </section>
        </div>
    }
}
