use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::query_cache::QueryClient;
use leptos::prelude::*;

/// Root component. Provides the app-wide contexts every page expects
/// (navigation and notice state, the query cache) before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(QueryClient::new());

    view! { <AppRoutes /> }
}
