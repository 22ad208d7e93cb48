use crate::dashboards::d400_overview::api;
use crate::shared::components::charts::{BarChart, ChartCard, ChartPoint, DonutChart, LineChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::load_state::{finish_load, LoadGate, LoadStatus};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::query_cache::use_query_client;
use contracts::dashboards::d400_overview::OverviewSummary;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn money(value: f64) -> String {
    format_value(value, ValueFormat::Money)
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_query_client();
    let summary = RwSignal::new(None::<OverviewSummary>);
    let status = RwSignal::new(LoadStatus::Loading);

    let load = move || {
        status.set(LoadStatus::Loading);
        spawn_local(async move {
            let result = api::load_summary(client).await;
            finish_load(status, "overview", result, |s| summary.set(Some(s)));
        });
    };
    load();

    let indicators = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|s| s.indicators()).unwrap_or_default())
    });
    let revenue = Signal::derive(move || {
        summary.with(|s| {
            s.iter()
                .flat_map(|s| s.revenue_trend.iter())
                .map(|p| ChartPoint::new(p.label.clone(), p.value))
                .collect::<Vec<_>>()
        })
    });
    let orders = Signal::derive(move || {
        summary.with(|s| {
            s.iter()
                .flat_map(|s| s.orders_by_month.iter())
                .map(|p| ChartPoint::new(p.label.clone(), p.value))
                .collect::<Vec<_>>()
        })
    });
    let categories = Signal::derive(move || {
        summary.with(|s| {
            s.iter()
                .flat_map(|s| s.top_categories.iter())
                .map(|c| ChartPoint::new(c.name.clone(), c.quantity as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" icon_name="dashboard" subtitle="Store performance at a glance" />

            <div class="page__content">
                <LoadGate status=status on_retry=Callback::new(move |_| load())>
                    <StatGrid indicators=indicators />

                    <div class="chart-grid">
                        <ChartCard title="Revenue trend" is_empty=Signal::derive(move || revenue.with(Vec::is_empty))>
                            <LineChart data=revenue format=money />
                        </ChartCard>
                        <ChartCard title="Orders by month" is_empty=Signal::derive(move || orders.with(Vec::is_empty))>
                            <BarChart data=orders />
                        </ChartCard>
                        <ChartCard title="Top categories by quantity sold" is_empty=Signal::derive(move || categories.with(Vec::is_empty))>
                            <DonutChart data=categories />
                        </ChartCard>
                    </div>
                </LoadGate>
            </div>
        </PageFrame>
    }
}
