use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::OrbitGraphState;
use crate::config::{ANCHOR_CORE_RADIUS, PATH_PALETTE, PLANET_SIZE, SATELLITE_SIZE};
use crate::pathfinding::{NodeId, NodeKind, Point};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Control point bowing the segment `a -> b` to its left; longer segments
/// bow proportionally further.
fn curve_control(a: Point, b: Point) -> Point {
	let (mx, my) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len = (dx * dx + dy * dy).sqrt();
	if len <= 0.0 {
		return Point::new(mx, my);
	}
	let (px, py) = (-dy / len, dx / len);
	let bow = len * (0.3 + (len / 800.0) * 0.2);
	Point::new(mx + px * bow, my + py * bow)
}

fn circle(ctx: &CanvasRenderingContext2d, at: Point, radius: f64, fill: &str) {
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(fill);
	ctx.fill();
}

pub fn render(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#080814");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_anchor(state, ctx);
	draw_edges(state, ctx);
	draw_paths(state, ctx);
	draw_bodies(state, ctx);
	draw_selection(state, ctx);
	draw_status(state, ctx);
}

fn draw_anchor(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	let at = state.scene.anchor.position;
	circle(ctx, at, 130.0, "rgb(20, 20, 40)");
	circle(ctx, at, 100.0, "rgb(10, 10, 20)");
	circle(ctx, at, ANCHOR_CORE_RADIUS, "black");
}

fn draw_edges(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	let graph = &state.graph;
	ctx.set_stroke_style_str("rgb(60, 80, 220)");
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for (a, b, _) in graph.edges() {
		let (p1, p2) = (graph.position(a), graph.position(b));
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
	}
	ctx.stroke();
}

fn draw_paths(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (14.0, 6.0);
	ctx.set_line_width(4.0);
	ctx.set_line_cap("round");
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(-(state.flow_time * 30.0) % (dash + gap));

	for path in &state.paths {
		if path.nodes.len() < 2 {
			continue;
		}
		// Paths follow the bodies, so positions come from this frame's graph.
		let points: Vec<Point> = path.nodes.iter().map(|&n| state.graph.position(n)).collect();
		ctx.set_stroke_style_str(PATH_PALETTE[path.color_index % PATH_PALETTE.len()]);
		ctx.begin_path();
		ctx.move_to(points[0].x, points[0].y);
		for hop in points.windows(2) {
			let c = curve_control(hop[0], hop[1]);
			ctx.quadratic_curve_to(c.x, c.y, hop[1].x, hop[1].y);
		}
		ctx.stroke();
	}

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_line_cap("butt");
}

fn draw_bodies(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	let scene = &state.scene;

	ctx.set_stroke_style_str("rgb(200, 200, 200)");
	ctx.set_line_width(2.0);
	for sat in &scene.satellites {
		let mut trail = sat.trail.iter();
		if let Some(first) = trail.next() {
			ctx.begin_path();
			ctx.move_to(first.x, first.y);
			for p in trail {
				ctx.line_to(p.x, p.y);
			}
			ctx.stroke();
		}
		circle(ctx, sat.position, SATELLITE_SIZE, "white");
	}

	for planet in &scene.planets {
		circle(ctx, planet.position, PLANET_SIZE + 3.0, "rgb(255, 255, 150)");
		circle(ctx, planet.position, PLANET_SIZE, "rgb(255, 255, 100)");
	}

	for stray in &scene.strays {
		circle(ctx, stray.position, stray.size, "white");
	}
}

fn node_radius(state: &OrbitGraphState, node: NodeId) -> f64 {
	match state.graph.layout().kind_of(node) {
		Some(NodeKind::Orbiting(_)) => PLANET_SIZE,
		Some(NodeKind::SubOrbiting(_)) => SATELLITE_SIZE,
		Some(NodeKind::Anchor) | None => ANCHOR_CORE_RADIUS,
	}
}

fn draw_selection(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	if let Some(node) = state.hover.node {
		let t = ease_out_cubic(state.hover.highlight_t);
		if t > 0.01 {
			let at = state.graph.position(node);
			ctx.begin_path();
			let _ = ctx.arc(at.x, at.y, node_radius(state, node) + 4.0 + 2.0 * t, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	}

	if let Some(node) = state.pending_pick() {
		let at = state.graph.position(node);
		let pulse = 0.5 + 0.5 * (state.flow_time * 4.0).sin();
		let glow_radius = node_radius(state, node) * 2.5;
		if let Ok(gradient) = ctx.create_radial_gradient(at.x, at.y, 0.0, at.x, at.y, glow_radius) {
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 200, 100, {})", 0.25 + 0.25 * pulse));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 200, 100, 0)");
			ctx.begin_path();
			let _ = ctx.arc(at.x, at.y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}
}

fn draw_status(state: &OrbitGraphState, ctx: &CanvasRenderingContext2d) {
	let pending = state.selector.pending();
	if pending == 0 {
		return;
	}
	ctx.set_font("22px sans-serif");
	ctx.set_fill_style_str("rgb(255, 200, 100)");
	let _ = ctx.fill_text(&format!("Selected: {pending}/2"), 20.0, state.height - 30.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn control_point_bows_left_of_travel() {
		let c = curve_control(Point::new(0.0, 0.0), Point::new(400.0, 0.0));
		assert!((c.x - 200.0).abs() < 1e-9);
		// 400 * (0.3 + 0.5 * 0.2) = 160
		assert!((c.y - 160.0).abs() < 1e-9);
	}

	#[test]
	fn degenerate_segment_uses_midpoint() {
		let p = Point::new(3.0, 4.0);
		assert_eq!(curve_control(p, p), p);
	}
}
