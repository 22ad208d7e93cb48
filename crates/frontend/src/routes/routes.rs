use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_inventory::ui::list::InventoryList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Every route is mounted below this prefix.
pub const BASE_PATH: &str = "/ecommerce-dashboard";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="not-found">
                {icon("alert")}
                <h1>"404: page not found"</h1>
                <A href="/">"Back to the dashboard"</A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router base=BASE_PATH>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/inventory") view=InventoryList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/categories") view=CategoryList />
                </Routes>
            </Shell>
        </Router>
    }
}
