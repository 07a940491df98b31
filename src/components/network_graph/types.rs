use std::collections::{BTreeSet, HashMap, HashSet};

pub const HOST_COLOR: &str = "#6E44CB";
pub const HOST_EDGE_COLOR: &str = "#888";
pub const DISCONNECTED_EDGE_COLOR: &str = "#F00";
pub const CLIENT_COLOR: &str = "#6B81CA";
pub const CLIENT_EDGE_COLOR: &str = "#6B81CA";
pub const EGRESS_COLOR: &str = "#D4B106";
pub const EGRESS_RANGE_COLOR: &str = "#52712E";
pub const EGRESS_RANGE_EDGE_COLOR: &str = "#52712E";

pub const HOST_NODE_SIZE: f64 = 15.0;
pub const EGRESS_NODE_SIZE: f64 = 20.0;
pub const EGRESS_RANGE_SIZE: f64 = 20.0;
pub const CLIENT_NODE_SIZE: f64 = 10.0;
pub const HOST_EDGE_SIZE: f64 = 3.0;
pub const CLIENT_EDGE_SIZE: f64 = 1.0;
pub const EGRESS_RANGE_EDGE_SIZE: f64 = 5.0;

/// Prefix of the synthetic node that carries an egress gateway's ranges.
pub const EGRESS_RANGE_PREFIX: &str = "egress-range-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Host,
	EgressGateway,
	EgressRange,
	Client,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	/// Mesh pair allowed in both directions.
	Communicating,
	/// Mesh pair missing a grant in at least one direction.
	Disconnected,
	ClientIngress,
	EgressRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub label: String,
	pub color: &'static str,
	pub kind: NodeKind,
}

impl GraphNode {
	/// On-screen radius in world units.
	pub fn radius(&self) -> f64 {
		self.size * 0.5
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
	pub color: &'static str,
	pub size: f64,
	pub kind: EdgeKind,
}

impl GraphEdge {
	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Renderable topology: labelled, coloured, sized nodes and directed edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopologyGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	index: HashMap<String, usize>,
}

impl TopologyGraph {
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.index_of(id).map(|i| &self.nodes[i])
	}

	pub(super) fn add_node(&mut self, node: GraphNode) {
		if self.index.contains_key(&node.id) {
			log::warn!("duplicate graph node id {}, keeping the first", node.id);
		} else {
			self.index.insert(node.id.clone(), self.nodes.len());
		}
		self.nodes.push(node);
	}

	pub(super) fn add_edge(&mut self, edge: GraphEdge) {
		self.edges.push(edge);
	}

	/// Edges with both endpoints resolved to node indices.
	pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize, &GraphEdge)> + '_ {
		self.edges.iter().filter_map(|edge| {
			Some((
				self.index_of(&edge.source)?,
				self.index_of(&edge.target)?,
				edge,
			))
		})
	}

	/// Distinct undirected pairs joined by at least one edge, self loops dropped.
	pub fn springs(&self) -> Vec<(usize, usize)> {
		self.edge_indices()
			.filter(|(a, b, _)| a != b)
			.map(|(a, b, _)| (a.min(b), a.max(b)))
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}

	pub fn neighbors(&self, idx: usize) -> HashSet<usize> {
		self.edge_indices()
			.filter_map(|(a, b, _)| match (a == idx, b == idx) {
				(true, false) => Some(b),
				(false, true) => Some(a),
				_ => None,
			})
			.collect()
	}
}
