use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::GraphViewState;
use super::types::EdgeKind;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap, arrow_size) = (8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);
	let nodes = &state.graph.nodes;

	for (src, tgt, edge) in state.graph.edge_indices() {
		let (from, to) = (&nodes[src], &nodes[tgt]);
		let is_highlighted = state.is_highlighted(src) && state.is_highlighted(tgt);

		// t=0: every edge at base alpha; t=1: highlighted edges up, the rest dimmed
		let base_width = edge.size * 0.5 / k;
		let (alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, base_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, base_width * (1.0 - 0.3 * t))
		};
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(edge.color);
		ctx.set_fill_style_str(edge.color);
		ctx.set_line_width(width);

		if src == tgt {
			// self pair: small loop above the node
			let r = from.radius();
			ctx.begin_path();
			let _ = ctx.arc(from.x, from.y - r * 1.6, r * 0.8, 0.0, 2.0 * PI);
			ctx.stroke();
			continue;
		}

		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = dx.hypot(dy);
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		if edge.kind == EdgeKind::Communicating {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(from.x + ux * from.radius(), from.y + uy * from.radius());
		ctx.line_to(
			to.x - ux * (to.radius() + arrow_size),
			to.y - uy * (to.radius() + arrow_size),
		);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		let (tip_x, tip_y) = (to.x - ux * to.radius(), to.y - uy * to.radius());
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	let font = format!("{}px sans-serif", 11.0 / k.max(0.5));

	// dimmed nodes first so highlighted ones draw on top
	for (idx, node) in state.graph.nodes.iter().enumerate() {
		if has_highlight && state.is_highlighted(idx) {
			continue;
		}
		let (alpha, radius) = if has_highlight {
			(1.0 - 0.7 * t, node.radius() * (1.0 - 0.15 * t))
		} else {
			(1.0, node.radius())
		};
		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		if !node.label.is_empty() {
			ctx.set_global_alpha(alpha * 0.8);
			ctx.set_fill_style_str(&state.label_color);
			ctx.set_font(&font);
			let _ = ctx.fill_text(&node.label, node.x + radius + 3.0, node.y + 3.0);
		}
	}
	ctx.set_global_alpha(1.0);

	if !has_highlight {
		return;
	}

	for (idx, node) in state.graph.nodes.iter().enumerate() {
		if !state.is_highlighted(idx) {
			continue;
		}
		let base = node.radius();
		let radius = if state.is_hovered(idx) {
			base * (1.0 + 0.35 * t)
		} else {
			base * (1.0 + 0.2 * t)
		};

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		if state.is_hovered(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		if !node.label.is_empty() {
			ctx.set_fill_style_str(&state.label_color);
			ctx.set_font(&font);
			let _ = ctx.fill_text(&node.label, node.x + radius + 3.0, node.y + 3.0);
		}
	}
}
