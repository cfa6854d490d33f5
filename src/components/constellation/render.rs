use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ConstellationState, star_size};

const GRID_STEP: f64 = 40.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	draw_background(state, ctx);
	draw_edges(state, ctx);
	draw_stars(state, ctx);
}

fn draw_background(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let gradient = ctx.create_linear_gradient(0.0, 0.0, state.width, state.height);
	let _ = gradient.add_color_stop(0.0, "#0f172a");
	let _ = gradient.add_color_stop(0.5, "#1e3a8a");
	let _ = gradient.add_color_stop(1.0, "#581c87");
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.03)");
	ctx.set_line_width(0.5);
	ctx.begin_path();
	let mut x = 0.0;
	while x <= state.width {
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
		x += GRID_STEP;
	}
	let mut y = 0.0;
	while y <= state.height {
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
		y += GRID_STEP;
	}
	ctx.stroke();
}

fn draw_edges(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for edge in &state.edges {
		let (x1, y1) = state.project(edge.from);
		let (x2, y2) = state.project(edge.to);
		let (alpha, width) = state.edge_style(edge);

		ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_stars(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);

	for (idx, node) in state.nodes.iter().enumerate() {
		let (x, y) = state.project(idx);
		let color = node.sentiment.color();
		let hovered = state.is_hovered(idx);
		let scale = if hovered { 1.0 + 0.3 * t } else { 1.0 };
		let radius = star_size(node.frequency) / 2.0 * scale;

		// each star breathes on its own phase
		let pulse = 0.5 + 0.5 * (state.time * 2.0 + idx as f64 * 0.7).sin();
		let glow_radius = radius * (2.0 + 0.4 * pulse);
		if let Ok(glow) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
			let _ = glow.add_color_stop(0.0, &format!("{color}66"));
			let _ = glow.add_color_stop(0.7, &format!("{color}00"));
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&glow);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();

		if hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		let label_alpha = if hovered { 0.7 + 0.3 * t } else { 0.7 };
		ctx.set_text_align("center");
		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", label_alpha));
		ctx.set_font("13px sans-serif");
		let _ = ctx.fill_text(&node.text, x, y + radius + 16.0);
		ctx.set_fill_style_str(&format!("rgba(203, 213, 225, {})", label_alpha * 0.8));
		ctx.set_font("10px sans-serif");
		let _ = ctx.fill_text(
			&format!("{} mentions", node.frequency),
			x,
			y + radius + 29.0,
		);
	}
}
