//! Page load status plus the spinner / full-page error shown for it.

use crate::shared::http::ApiError;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// Every failure reads the same to the user.
pub fn request_failed(err: &ApiError) -> String {
    format!("Request failed: {}", err)
}

/// Settle a page load. A superseded load leaves the status alone because a
/// newer one is already running.
pub fn finish_load<T>(
    status: RwSignal<LoadStatus>,
    what: &str,
    result: Result<T, ApiError>,
    on_ok: impl FnOnce(T),
) {
    match result {
        Ok(value) => {
            on_ok(value);
            status.set(LoadStatus::Ready);
        }
        Err(e) if e.is_superseded() => {
            log::debug!("{} load superseded", what);
        }
        Err(e) => {
            log::error!("failed to load {}: {}", what, e);
            status.set(LoadStatus::Failed(request_failed(&e)));
        }
    }
}

/// Spinner while loading, full-page error with "Retry" on failure, and
/// `children` once the data is in.
#[component]
pub fn LoadGate(
    #[prop(into)] status: Signal<LoadStatus>,
    on_retry: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || match status.get() {
        LoadStatus::Loading => view! {
            <div class="load-state load-state--loading">
                <Spinner />
            </div>
        }
        .into_any(),
        LoadStatus::Failed(message) => view! {
            <div class="load-state load-state--error">
                {icon("alert")}
                <h2>"Something went wrong"</h2>
                <p>{message}</p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                    {icon("refresh")}
                    " Retry"
                </Button>
            </div>
        }
        .into_any(),
        LoadStatus::Ready => children().into_any(),
    }
}
