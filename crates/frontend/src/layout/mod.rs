pub mod global_context;
pub mod notice;
pub mod sidebar;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use notice::NoticeBar;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Page chrome shared by every route: header on top, collapsible navigation
/// on the left, the routed page in the remaining space and the notice bar
/// floating above it all.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:hidden=move || !ctx.nav_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main app-content">{children()}</main>
            </div>
            <NoticeBar />
        </div>
    }
}
