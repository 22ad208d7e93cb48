use super::geometry::{bar_layout, compact_number, nice_max, slot_centers, Frame};
use super::{color, ChartPoint};
use leptos::prelude::*;

const FRAME: Frame = Frame::new(560.0, 260.0);
const Y_TICKS: usize = 4;

/// Vertical bar chart. Hovering a bar shows its exact value as a tooltip.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    /// Formats values in tooltips
    #[prop(optional)]
    format: Option<fn(f64) -> String>,
    /// One color per bar instead of a single series color
    #[prop(optional)]
    multicolor: bool,
) -> impl IntoView {
    let format = format.unwrap_or(compact_number);

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", FRAME.width, FRAME.height) preserveAspectRatio="xMidYMid meet">
            {move || {
                let points = data.get();
                let values: Vec<f64> = points.iter().map(|p| p.value).collect();
                let max = nice_max(values.iter().cloned().fold(0.0, f64::max));
                let bars = bar_layout(&values, &FRAME, max, 0.25);
                let centers = slot_centers(points.len(), &FRAME);

                let grid = FRAME.ticks(max, Y_TICKS).into_iter().map(|(value, y)| view! {
                    <g class="chart__grid">
                        <line x1=FRAME.left x2=FRAME.width y1=y y2=y />
                        <text x=FRAME.left - 6.0 y=y + 4.0 text-anchor="end">{compact_number(value)}</text>
                    </g>
                }).collect_view();

                let body = points.into_iter().zip(bars).zip(centers).enumerate().map(|(i, ((point, bar), cx))| {
                    let fill = if multicolor { color(i) } else { color(0) };
                    let tooltip = format!("{}: {}", point.label, format(point.value));
                    view! {
                        <g class="chart__bar">
                            <rect x=bar.x y=bar.y width=bar.width height=bar.height fill=fill rx="2">
                                <title>{tooltip}</title>
                            </rect>
                            <text class="chart__label" x=cx y=FRAME.height - 10.0 text-anchor="middle">{point.label}</text>
                        </g>
                    }
                }).collect_view();

                view! { {grid} {body} }
            }}
        </svg>
    }
}
