//! Inline SVG charts. Layout math lives in [`geometry`]; the components only
//! turn it into markup.

pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;

use leptos::prelude::*;

/// One labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Titled card every chart sits in, with an empty-state message.
#[component]
pub fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into)] is_empty: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <div class="chart-card__body">
                {move || if is_empty.get() {
                    view! { <div class="chart-card__empty">"No data"</div> }.into_any()
                } else {
                    children().into_any()
                }}
            </div>
        </div>
    }
}
