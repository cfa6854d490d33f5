//! Small SVG charts for the dashboard.

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::dashboard::{SentimentSlice, TrendPoint};
use crate::sentiment::SentimentLabel;

const PIE_SIZE: f64 = 200.0;
const PIE_RADIUS: f64 = 80.0;

const CHART_WIDTH: f64 = 400.0;
const CHART_HEIGHT: f64 = 200.0;
const CHART_PAD: f64 = 24.0;
/// Trend values are percentages.
const TREND_MAX: f64 = 100.0;

/// SVG path data for each pie slice, clockwise from twelve o'clock.
///
/// A slice covering the whole pie is drawn as two half arcs; zero-sized
/// slices produce an empty path.
pub fn pie_paths(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<String> {
	let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
	let mut angle = -PI / 2.0;
	values
		.iter()
		.map(|&v| {
			if total <= 0.0 || v <= 0.0 {
				return String::new();
			}
			let sweep = v / total * 2.0 * PI;
			let (start, end) = (angle, angle + sweep);
			angle = end;

			if sweep >= 2.0 * PI - 1e-9 {
				return format!(
					"M {x0:.2} {y0:.2} A {r} {r} 0 1 1 {x1:.2} {y1:.2} A {r} {r} 0 1 1 {x0:.2} {y0:.2} Z",
					x0 = cx,
					y0 = cy - r,
					x1 = cx,
					y1 = cy + r,
				);
			}
			let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
			let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
			let large = if sweep > PI { 1 } else { 0 };
			format!("M {cx} {cy} L {x0:.2} {y0:.2} A {r} {r} 0 {large} 1 {x1:.2} {y1:.2} Z")
		})
		.collect()
}

/// Plot coordinates for a series, spread evenly across the chart width.
pub fn series_points(values: &[f64], width: f64, height: f64, max: f64) -> Vec<(f64, f64)> {
	let n = values.len();
	values
		.iter()
		.enumerate()
		.map(|(i, &v)| {
			let x = if n > 1 {
				i as f64 * width / (n - 1) as f64
			} else {
				width / 2.0
			};
			let y = height - (v / max).clamp(0.0, 1.0) * height;
			(x, y)
		})
		.collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
	points
		.iter()
		.map(|(x, y)| format!("{:.1},{:.1}", x + CHART_PAD, y + CHART_PAD))
		.collect::<Vec<_>>()
		.join(" ")
}

#[component]
pub fn SentimentPie(slices: Vec<SentimentSlice>) -> impl IntoView {
	let values: Vec<f64> = slices.iter().map(|s| s.value as f64).collect();
	let paths = pie_paths(&values, PIE_SIZE / 2.0, PIE_SIZE / 2.0, PIE_RADIUS);
	let wedges = slices
		.iter()
		.zip(paths)
		.map(|(slice, d)| view! { <path d=d fill=slice.label.color() class="pie-slice" /> })
		.collect_view();
	let legend = slices
		.iter()
		.map(|slice| {
			view! {
				<div class="legend-row">
					<span class="legend-dot" style:background-color=slice.label.color()></span>
					<span>{slice.name()}</span>
					<span class="legend-value">{slice.value}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<svg class="pie-chart" viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}")>
			{wedges}
		</svg>
		<div class="chart-legend">{legend}</div>
	}
}

#[component]
pub fn TrendChart(#[prop(into)] points: Signal<Vec<TrendPoint>>) -> impl IntoView {
	let inner_w = CHART_WIDTH - 2.0 * CHART_PAD;
	let inner_h = CHART_HEIGHT - 2.0 * CHART_PAD;

	let series = move |label: SentimentLabel, stroke_width: f64| {
		move || {
			let values: Vec<f64> = points.with(|pts| {
				pts.iter()
					.map(|p| match label {
						SentimentLabel::Positive => p.positive,
						SentimentLabel::Neutral => p.neutral,
						SentimentLabel::Negative => p.negative,
					})
					.collect()
			});
			let coords = series_points(&values, inner_w, inner_h, TREND_MAX);
			let dot_radius = stroke_width * 2.0;
			let dots = coords
				.iter()
				.map(|(x, y)| {
					let (cx, cy) = (x + CHART_PAD, y + CHART_PAD);
					view! { <circle cx=cx cy=cy r=dot_radius fill=label.color() /> }
				})
				.collect_view();
			view! {
				<polyline
					points=polyline(&coords)
					fill="none"
					stroke=label.color()
					stroke-width=stroke_width
				/>
				{dots}
			}
		}
	};

	let labels = move || {
		points.with(|pts| {
			let weeks: Vec<String> = pts.iter().map(|p| p.week.clone()).collect();
			let zeros = vec![0.0; weeks.len()];
			series_points(&zeros, inner_w, inner_h, TREND_MAX)
				.into_iter()
				.zip(weeks)
				.map(|((x, _), week)| {
					let (lx, ly) = (x + CHART_PAD, CHART_HEIGHT - 4.0);
					view! {
						<text x=lx y=ly text-anchor="middle" class="axis-label">
							{week}
						</text>
					}
				})
				.collect_view()
		})
	};

	view! {
		<svg class="trend-chart" viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")>
			{series(SentimentLabel::Positive, 3.0)}
			{series(SentimentLabel::Negative, 3.0)}
			{series(SentimentLabel::Neutral, 2.0)}
			{labels}
		</svg>
	}
}
