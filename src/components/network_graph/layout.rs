use std::f64::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::job::{BackgroundLayout, LayoutRunner};
use super::types::TopologyGraph;

/// How node positions are computed once the graph is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStrategy {
	#[default]
	Circular,
	/// Physics simulation advanced frame by frame until it settles or is stopped.
	ForceBackground,
	/// Physics simulation run for a fixed number of iterations before display.
	ForceBatch,
}

impl LayoutStrategy {
	pub const ALL: [LayoutStrategy; 3] = [Self::Circular, Self::ForceBackground, Self::ForceBatch];

	pub fn key(self) -> &'static str {
		match self {
			Self::Circular => "circular",
			Self::ForceBackground => "force",
			Self::ForceBatch => "force-batch",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Circular => "Circular",
			Self::ForceBackground => "Force directed (live)",
			Self::ForceBatch => "Force directed (batch)",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.key() == key)
	}
}

/// Physics parameters for the live simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceSettings {
	pub charge: f32,
	pub spring: f32,
	pub max_force: f32,
	pub node_speed: f32,
	pub damping: f32,
	/// Pull towards the origin, applied after every tick.
	pub gravity: f32,
	pub dt: f32,
	/// Hard cap on ticks before the job stops on its own.
	pub max_ticks: u32,
	/// Mean per-node displacement below which a tick counts as calm.
	pub settle_threshold: f32,
	/// Consecutive calm ticks that end the job.
	pub settle_ticks: u32,
}

impl Default for ForceSettings {
	fn default() -> Self {
		Self {
			charge: 150.0,
			spring: 0.05,
			max_force: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
			gravity: 0.6,
			dt: 0.016,
			max_ticks: 3_000,
			settle_threshold: 0.05,
			settle_ticks: 60,
		}
	}
}

impl ForceSettings {
	fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.charge,
			force_spring: self.spring,
			force_max: self.max_force,
			node_speed: self.node_speed,
			damping_factor: self.damping,
		}
	}
}

/// Parameters for the bounded, synchronous simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSettings {
	pub iterations: u32,
	pub gravity: f32,
	/// Multiplies the repulsion between nodes.
	pub scaling: f32,
	/// Divides node speed; larger graphs move more carefully.
	pub slow_down: f32,
}

impl BatchSettings {
	/// Settings scaled to the graph's order.
	pub fn infer(order: usize) -> Self {
		Self {
			iterations: 600,
			gravity: 1.0,
			scaling: if order > 100 { 1.0 } else { 10.0 },
			slow_down: 1.0 + (order.max(1) as f32).ln(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSettings {
	/// Smallest radius used by the circular layout.
	pub min_radius: f64,
	/// Arc length reserved per node on the circle.
	pub spacing: f64,
	pub force: ForceSettings,
	/// `None` infers batch settings from the graph size.
	pub batch: Option<BatchSettings>,
}

impl Default for LayoutSettings {
	fn default() -> Self {
		Self {
			min_radius: 120.0,
			spacing: 60.0,
			force: ForceSettings::default(),
			batch: None,
		}
	}
}

/// Places every node on a circle centred on the origin, in graph order.
pub fn circular(graph: &mut TopologyGraph, settings: &LayoutSettings) {
	let n = graph.nodes.len();
	if n == 0 {
		return;
	}
	let radius = settings.min_radius.max(n as f64 * settings.spacing / TAU);
	let step = TAU / n as f64;
	for (i, node) in graph.nodes.iter_mut().enumerate() {
		let angle = i as f64 * step;
		node.x = radius * angle.cos();
		node.y = radius * angle.sin();
	}
}

/// `force_graph` simulation seeded from a topology's current positions.
pub struct ForceLayout {
	sim: ForceGraph<usize, ()>,
	handles: Vec<DefaultNodeIdx>,
	gravity: f32,
}

impl ForceLayout {
	pub fn new(graph: &TopologyGraph, parameters: SimulationParameters, gravity: f32) -> Self {
		let mut sim = ForceGraph::new(parameters);
		let handles = graph
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				sim.add_node(NodeData {
					x: node.x as f32,
					y: node.y as f32,
					mass: node.size as f32,
					is_anchor: false,
					user_data: i,
				})
			})
			.collect::<Vec<_>>();
		for (a, b) in graph.springs() {
			sim.add_edge(handles[a], handles[b], EdgeData::default());
		}
		Self {
			sim,
			handles,
			gravity,
		}
	}

	pub fn from_settings(graph: &TopologyGraph, settings: &ForceSettings) -> Self {
		Self::new(graph, settings.parameters(), settings.gravity)
	}

	/// Advances one tick and returns the mean distance a node moved.
	pub fn tick(&mut self, dt: f32) -> f32 {
		let before = self.positions();
		self.sim.update(dt);

		let pull = (self.gravity * dt).min(1.0);
		if pull > 0.0 {
			self.sim.visit_nodes_mut(|node| {
				if !node.data.is_anchor {
					node.data.x -= node.data.x * pull;
					node.data.y -= node.data.y * pull;
				}
			});
		}

		let after = self.positions();
		if after.is_empty() {
			return 0.0;
		}
		let moved: f32 = before
			.iter()
			.zip(&after)
			.map(|((x0, y0), (x1, y1))| ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt())
			.sum();
		moved / after.len() as f32
	}

	/// Copies simulated positions into the topology.
	pub fn write_positions(&self, graph: &mut TopologyGraph) {
		self.sim.visit_nodes(|node| {
			if let Some(target) = graph.nodes.get_mut(node.data.user_data) {
				target.x = node.x() as f64;
				target.y = node.y() as f64;
			}
		});
	}

	/// Moves a node and optionally pins it in place.
	pub fn place(&mut self, index: usize, x: f64, y: f64, anchor: bool) {
		let Some(&handle) = self.handles.get(index) else {
			return;
		};
		self.sim.visit_nodes_mut(|node| {
			if node.index() == handle {
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.is_anchor = anchor;
			}
		});
	}

	fn positions(&self) -> Vec<(f32, f32)> {
		let mut out = vec![(0.0, 0.0); self.handles.len()];
		self.sim.visit_nodes(|node| {
			if let Some(slot) = out.get_mut(node.data.user_data) {
				*slot = (node.x(), node.y());
			}
		});
		out
	}
}

/// Runs the bounded simulation to completion and stores the result.
pub fn run_batch(graph: &mut TopologyGraph, settings: &BatchSettings) {
	let base = ForceSettings::default();
	let parameters = SimulationParameters {
		force_charge: base.charge * settings.scaling,
		force_spring: base.spring,
		force_max: base.max_force,
		node_speed: base.node_speed / settings.slow_down.max(1.0),
		damping_factor: base.damping,
	};
	let mut layout = ForceLayout::new(graph, parameters, settings.gravity);
	for _ in 0..settings.iterations {
		layout.tick(base.dt);
	}
	layout.write_positions(graph);
	debug!(
		"batch layout finished after {} iterations on {} nodes",
		settings.iterations,
		graph.node_count()
	);
}

/// Lays out a freshly built graph.
///
/// The circular placement always runs first so there is a usable picture
/// even if the live simulation is stopped straight away. Any job the runner
/// still owns is stopped before anything else happens.
pub fn apply_layout(
	graph: &mut TopologyGraph,
	strategy: LayoutStrategy,
	settings: &LayoutSettings,
	runner: &LayoutRunner,
) -> Option<BackgroundLayout> {
	runner.stop();
	circular(graph, settings);
	match strategy {
		LayoutStrategy::Circular => None,
		LayoutStrategy::ForceBatch => {
			let batch = settings
				.batch
				.clone()
				.unwrap_or_else(|| BatchSettings::infer(graph.node_count()));
			run_batch(graph, &batch);
			None
		}
		LayoutStrategy::ForceBackground => Some(BackgroundLayout::new(
			graph,
			settings.force.clone(),
			runner.start(),
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::build_topology;
	use crate::models::{AclMatrix, Host, Node};

	fn sample(n: usize) -> TopologyGraph {
		let hosts = (0..n)
			.map(|i| Host {
				id: format!("h{i}"),
				name: format!("host {i}"),
				..Default::default()
			})
			.collect::<Vec<_>>();
		let nodes = (0..n)
			.map(|i| Node {
				id: format!("n{i}"),
				host_id: format!("h{i}"),
				..Default::default()
			})
			.collect::<Vec<_>>();
		build_topology(&nodes, &hosts, &AclMatrix::new(), &[])
	}

	#[test]
	fn circular_is_deterministic_and_on_the_circle() {
		let settings = LayoutSettings::default();
		let mut a = sample(5);
		let mut b = sample(5);
		circular(&mut a, &settings);
		circular(&mut b, &settings);
		assert_eq!(a, b);

		let r0 = a.nodes[0].x.hypot(a.nodes[0].y);
		for node in &a.nodes {
			assert!((node.x.hypot(node.y) - r0).abs() < 1e-9);
		}
		assert!((a.nodes[0].x - r0).abs() < 1e-9);
	}

	#[test]
	fn circular_radius_grows_with_node_count() {
		let settings = LayoutSettings::default();
		let mut big = sample(40);
		circular(&mut big, &settings);
		let r = big.nodes[0].x.hypot(big.nodes[0].y);
		assert!((r - 40.0 * settings.spacing / TAU).abs() < 1e-9);
	}

	#[test]
	fn batch_layout_keeps_positions_finite() {
		let mut graph = sample(6);
		circular(&mut graph, &LayoutSettings::default());
		let settings = BatchSettings {
			iterations: 50,
			..BatchSettings::infer(graph.node_count())
		};
		run_batch(&mut graph, &settings);
		assert_eq!(graph.node_count(), 6);
		assert!(graph.nodes.iter().all(|n| n.x.is_finite() && n.y.is_finite()));
	}

	#[test]
	fn inferred_batch_settings_depend_on_order() {
		assert_eq!(BatchSettings::infer(10).scaling, 10.0);
		assert_eq!(BatchSettings::infer(500).scaling, 1.0);
		assert_eq!(BatchSettings::infer(1).slow_down, 1.0);
	}

	#[test]
	fn strategy_keys_round_trip() {
		for strategy in LayoutStrategy::ALL {
			assert_eq!(LayoutStrategy::from_key(strategy.key()), Some(strategy));
		}
		assert_eq!(LayoutStrategy::from_key("spiral"), None);
	}

	#[test]
	fn only_the_live_strategy_starts_a_job() {
		let runner = LayoutRunner::default();
		let settings = LayoutSettings::default();

		let mut graph = sample(3);
		assert!(apply_layout(&mut graph, LayoutStrategy::Circular, &settings, &runner).is_none());
		assert!(!runner.is_running());

		let live = apply_layout(&mut graph, LayoutStrategy::ForceBackground, &settings, &runner);
		assert!(live.as_ref().is_some_and(|l| l.is_running()));
		assert!(runner.is_running());

		let none = apply_layout(&mut graph, LayoutStrategy::ForceBatch, &settings, &runner);
		assert!(none.is_none());
		assert!(!runner.is_running());
		assert!(live.is_some_and(|l| !l.is_running()));
	}
}
