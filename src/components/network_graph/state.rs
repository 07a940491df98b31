use std::collections::HashSet;

use super::job::BackgroundLayout;
use super::types::TopologyGraph;

/// Extra pick tolerance around a node, in world units.
pub const HIT_MARGIN: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Everything the canvas needs for one mounted topology.
pub struct GraphViewState {
	pub graph: TopologyGraph,
	pub background: Option<BackgroundLayout>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	pub label_color: String,
}

impl GraphViewState {
	pub fn new(
		graph: TopologyGraph,
		background: Option<BackgroundLayout>,
		width: f64,
		height: f64,
		label_color: String,
	) -> Self {
		Self {
			graph,
			background,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
			label_color,
		}
	}

	pub fn layout_running(&self) -> bool {
		self.background.as_ref().is_some_and(BackgroundLayout::is_running)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.graph
			.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(_, node)| (node.x - gx).hypot(node.y - gy) < node.radius() + HIT_MARGIN)
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the old highlight around so it can fade out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			self.hover.neighbors = self.graph.neighbors(idx);
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn begin_drag(&mut self, idx: usize, sx: f64, sy: f64) {
		let Some(node) = self.graph.nodes.get(idx) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: sx,
			start_y: sy,
			node_start_x: node.x,
			node_start_y: node.y,
		};
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) else {
			return;
		};
		let nx = self.drag.node_start_x + (sx - self.drag.start_x) / self.transform.k;
		let ny = self.drag.node_start_y + (sy - self.drag.start_y) / self.transform.k;
		if let Some(node) = self.graph.nodes.get_mut(idx) {
			node.x = nx;
			node.y = ny;
		}
		if let Some(layout) = self.background.as_mut() {
			layout.place(idx, nx, ny, true);
		}
	}

	/// Releases the pointer; a dragged node stays where it was dropped.
	pub fn release(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Zooms around a screen point.
	pub fn zoom(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		if let Some(layout) = self.background.as_mut() {
			layout.step(&mut self.graph);
		}
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::{LayoutSettings, build_topology, circular};
	use crate::models::{AclMatrix, ExternalClient, Host, Node};

	fn view() -> GraphViewState {
		let hosts = vec![Host {
			id: "h1".into(),
			name: "one".into(),
			..Default::default()
		}];
		let nodes = vec![
			Node {
				id: "n1".into(),
				host_id: "h1".into(),
				is_ingress_gateway: true,
				..Default::default()
			},
			Node {
				id: "n2".into(),
				host_id: "h1".into(),
				..Default::default()
			},
		];
		let clients = vec![ExternalClient {
			client_id: "c1".into(),
			ingress_gateway_id: "n1".into(),
			..Default::default()
		}];
		let mut graph = build_topology(&nodes, &hosts, &AclMatrix::new(), &clients);
		circular(&mut graph, &LayoutSettings::default());
		GraphViewState::new(graph, None, 800.0, 600.0, "#fff".into())
	}

	#[test]
	fn picks_node_under_cursor() {
		let state = view();
		let node = &state.graph.nodes[0];
		let (sx, sy) = (node.x + 400.0, node.y + 300.0);
		assert_eq!(state.node_at_position(sx, sy), Some(0));
		assert_eq!(state.node_at_position(400.0, 300.0), None);
	}

	#[test]
	fn hover_highlights_neighbours_then_fades() {
		let mut state = view();
		let client = state.graph.index_of("c1").unwrap();
		let gateway = state.graph.index_of("n1").unwrap();
		let other = state.graph.index_of("n2").unwrap();

		state.set_hover(Some(client));
		assert!(state.is_hovered(client));
		assert!(state.is_highlighted(gateway));
		assert!(!state.is_highlighted(other));

		state.set_hover(None);
		assert!(state.has_active_highlight());
		for _ in 0..600 {
			state.tick(0.016);
		}
		assert!(!state.has_active_highlight());
	}

	#[test]
	fn dragging_moves_node_by_scaled_delta() {
		let mut state = view();
		state.transform.k = 2.0;
		let (x0, y0) = (state.graph.nodes[1].x, state.graph.nodes[1].y);
		state.begin_drag(1, 100.0, 100.0);
		state.drag_to(120.0, 90.0);
		assert!((state.graph.nodes[1].x - (x0 + 10.0)).abs() < 1e-9);
		assert!((state.graph.nodes[1].y - (y0 - 5.0)).abs() < 1e-9);
		state.release();
		assert!(!state.drag.active);
	}

	#[test]
	fn zoom_keeps_point_under_cursor() {
		let mut state = view();
		let before = state.screen_to_graph(500.0, 200.0);
		state.zoom(500.0, 200.0, true);
		let after = state.screen_to_graph(500.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}
}
