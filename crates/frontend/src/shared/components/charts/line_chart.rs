use super::geometry::{compact_number, line_points, nice_max, polyline, Frame};
use super::{color, ChartPoint};
use leptos::prelude::*;

const FRAME: Frame = Frame::new(560.0, 260.0);
const Y_TICKS: usize = 4;

/// Line chart with one marker per point.
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(optional)]
    format: Option<fn(f64) -> String>,
    /// Palette index of the series color
    #[prop(optional)]
    series: usize,
) -> impl IntoView {
    let format = format.unwrap_or(compact_number);
    let stroke = color(series);

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {} {}", FRAME.width, FRAME.height) preserveAspectRatio="xMidYMid meet">
            {move || {
                let points = data.get();
                let values: Vec<f64> = points.iter().map(|p| p.value).collect();
                let max = nice_max(values.iter().cloned().fold(0.0, f64::max));
                let coords = line_points(&values, &FRAME, max);

                let grid = FRAME.ticks(max, Y_TICKS).into_iter().map(|(value, y)| view! {
                    <g class="chart__grid">
                        <line x1=FRAME.left x2=FRAME.width y1=y y2=y />
                        <text x=FRAME.left - 6.0 y=y + 4.0 text-anchor="end">{compact_number(value)}</text>
                    </g>
                }).collect_view();

                let path = polyline(&coords);
                let markers = points.into_iter().zip(coords).map(|(point, (x, y))| {
                    let tooltip = format!("{}: {}", point.label, format(point.value));
                    view! {
                        <g class="chart__point">
                            <circle cx=x cy=y r="4" fill=stroke>
                                <title>{tooltip}</title>
                            </circle>
                            <text class="chart__label" x=x y=FRAME.height - 10.0 text-anchor="middle">{point.label}</text>
                        </g>
                    }
                }).collect_view();

                view! {
                    {grid}
                    <polyline points=path fill="none" stroke=stroke stroke-width="2" />
                    {markers}
                }
            }}
        </svg>
    }
}
