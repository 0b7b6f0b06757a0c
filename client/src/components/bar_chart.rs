//! Two-bar SVG chart for one metric: current vs optimized usage.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;
use model::Bar;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 200.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
/// Share of each bar's slot left empty on either side.
const SLOT_PADDING: f64 = 0.2;

/// Placement of one bar inside the plot area (origin top-left).
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Lay out `bars` in a `width` x `height` plot, scaled to the largest value.
/// Zero, negative and non-finite values get zero-height bars.
pub fn bar_geometry(bars: &[Bar], width: f64, height: f64) -> Vec<BarRect> {
    if bars.is_empty() {
        return Vec::new();
    }
    let max = bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    #[allow(clippy::cast_precision_loss)]
    let slot = width / bars.len() as f64;

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let value = if bar.value.is_finite() { bar.value.max(0.0) } else { 0.0 };
            let bar_height = if max > 0.0 { value / max * height } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let x = slot * i as f64 + slot * SLOT_PADDING;
            BarRect {
                x,
                y: height - bar_height,
                width: slot * (1.0 - 2.0 * SLOT_PADDING),
                height: bar_height,
                label: bar.label,
                value: bar.value,
                color: bar.color,
            }
        })
        .collect()
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.2}") }
}

#[component]
pub fn BarChart(chart: model::BarChart) -> impl IntoView {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_width = WIDTH - MARGIN_LEFT;
    let rects = bar_geometry(&chart.bars, plot_width, plot_height);

    view! {
        <figure class="bar-chart">
            <figcaption class="bar-chart__title">{chart.title}</figcaption>
            <svg
                class="bar-chart__svg"
                viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                role="img"
                aria-label=chart.title
            >
                <g transform=format!("translate({MARGIN_LEFT},{MARGIN_TOP})")>
                    <line class="bar-chart__axis" x1="0" y1=plot_height x2=plot_width y2=plot_height/>
                    <line class="bar-chart__axis" x1="0" y1="0" x2="0" y2=plot_height/>
                    {rects
                        .into_iter()
                        .map(|r| {
                            let center = r.x + r.width / 2.0;
                            view! {
                                <rect x=r.x y=r.y width=r.width height=r.height fill=r.color/>
                                <text class="bar-chart__value" x=center y={r.y - 4.0} text-anchor="middle">
                                    {format_value(r.value)}
                                </text>
                                <text class="bar-chart__label" x=center y={plot_height + 18.0} text-anchor="middle">
                                    {r.label}
                                </text>
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
            <p class="bar-chart__recommendation">{chart.recommendation}</p>
        </figure>
    }
}
