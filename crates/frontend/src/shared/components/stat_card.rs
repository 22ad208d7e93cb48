use crate::shared::icons::icon;
use contracts::shared::indicators::{Indicator, IndicatorStatus};
use leptos::prelude::*;

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(indicator: Indicator) -> impl IntoView {
    let value = indicator.display_value();

    view! {
        <div class=status_class(indicator.status)>
            <div class="stat-card__icon">
                {icon(&indicator.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{indicator.label}</div>
                <div class="stat-card__value">{value}</div>
                {indicator.subtitle.map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}

/// Row of stat cards at the top of a page.
#[component]
pub fn StatGrid(#[prop(into)] indicators: Signal<Vec<Indicator>>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {move || indicators
                .get()
                .into_iter()
                .map(|indicator| view! { <StatCard indicator=indicator /> })
                .collect_view()}
        </div>
    }
}
