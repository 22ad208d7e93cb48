use super::geometry::{donut_slices, ring_path};
use super::{color, ChartPoint};
use leptos::prelude::*;

const SIZE: f64 = 220.0;
const OUTER: f64 = 100.0;
const INNER: f64 = 62.0;

/// Donut chart with a legend showing each slice's share.
#[component]
pub fn DonutChart(#[prop(into)] data: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let center = SIZE / 2.0;

    move || {
        let points: Vec<ChartPoint> = data.get().into_iter().filter(|p| p.value > 0.0).collect();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let slices = donut_slices(&values);

        let arcs = slices.iter().enumerate().zip(&points).map(|((i, slice), point)| {
            let tooltip = format!("{}: {:.0}%", point.label, slice.share * 100.0);
            view! {
                <path d=ring_path(center, center, OUTER, INNER, slice) fill=color(i)>
                    <title>{tooltip}</title>
                </path>
            }
        }).collect_view();

        let legend = slices.iter().enumerate().zip(&points).map(|((i, slice), point)| {
            let swatch = format!("background: {};", color(i));
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch></span>
                    <span class="chart-legend__label">{point.label.clone()}</span>
                    <span class="chart-legend__value">{format!("{:.0}%", slice.share * 100.0)}</span>
                </li>
            }
        }).collect_view();

        view! {
            <div class="chart chart--donut">
                <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) width=SIZE height=SIZE>
                    {arcs}
                </svg>
                <ul class="chart-legend">{legend}</ul>
            </div>
        }
    }
}
