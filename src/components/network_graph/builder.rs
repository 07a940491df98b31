use std::collections::HashMap;

use log::{debug, warn};

use super::types::*;
use crate::models::{AclMatrix, ExternalClient, Host, Node, can_communicate};

/// Builds the topology graph for one network.
///
/// Nodes and clients are sorted by id first so identical input always yields
/// the same node and edge order. Positions are left at the origin; a layout
/// assigns them afterwards.
pub fn build_topology(
	nodes: &[Node],
	hosts: &[Host],
	acl: &AclMatrix,
	clients: &[ExternalClient],
) -> TopologyGraph {
	let mut nodes: Vec<&Node> = nodes.iter().collect();
	nodes.sort_by(|a, b| a.id.cmp(&b.id));
	let mut clients: Vec<&ExternalClient> = clients.iter().collect();
	clients.sort_by(|a, b| a.client_id.cmp(&b.client_id));

	let hosts_by_id: HashMap<&str, &Host> = hosts.iter().map(|h| (h.id.as_str(), h)).collect();
	let null_host = Host::null();

	let mut graph = TopologyGraph::default();
	add_nodes(&mut graph, &nodes, &hosts_by_id, &null_host, &clients);
	add_edges(&mut graph, &nodes, acl, &clients);

	debug!(
		"built topology: {} nodes, {} edges",
		graph.node_count(),
		graph.edge_count()
	);
	graph
}

fn add_nodes(
	graph: &mut TopologyGraph,
	nodes: &[&Node],
	hosts_by_id: &HashMap<&str, &Host>,
	null_host: &Host,
	clients: &[&ExternalClient],
) {
	for node in nodes {
		let host = hosts_by_id.get(node.host_id.as_str()).copied().unwrap_or_else(|| {
			warn!("node {} references unknown host {}", node.id, node.host_id);
			null_host
		});
		let (size, color, kind) = if node.is_egress_gateway {
			(EGRESS_NODE_SIZE, EGRESS_COLOR, NodeKind::EgressGateway)
		} else {
			(HOST_NODE_SIZE, HOST_COLOR, NodeKind::Host)
		};
		graph.add_node(GraphNode {
			id: node.id.clone(),
			x: 0.0,
			y: 0.0,
			size,
			label: host.name.clone(),
			color,
			kind,
		});

		if node.is_egress_gateway {
			graph.add_node(GraphNode {
				id: egress_range_id(&node.id),
				x: 0.0,
				y: 0.0,
				size: EGRESS_RANGE_SIZE,
				label: node.egress_gateway_ranges.join(","),
				color: EGRESS_RANGE_COLOR,
				kind: NodeKind::EgressRange,
			});
		}
	}

	for client in clients {
		graph.add_node(GraphNode {
			id: client.client_id.clone(),
			x: 0.0,
			y: 0.0,
			size: CLIENT_NODE_SIZE,
			label: client.client_id.clone(),
			color: CLIENT_COLOR,
			kind: NodeKind::Client,
		});
	}
}

fn add_edges(
	graph: &mut TopologyGraph,
	nodes: &[&Node],
	acl: &AclMatrix,
	clients: &[&ExternalClient],
) {
	for a in nodes {
		for b in nodes {
			let (color, kind) = if can_communicate(a, b, acl) {
				(HOST_EDGE_COLOR, EdgeKind::Communicating)
			} else {
				(DISCONNECTED_EDGE_COLOR, EdgeKind::Disconnected)
			};
			graph.add_edge(GraphEdge {
				source: a.id.clone(),
				target: b.id.clone(),
				color,
				size: HOST_EDGE_SIZE,
				kind,
			});
		}
	}

	for client in clients {
		if !nodes.iter().any(|n| n.id == client.ingress_gateway_id) {
			warn!(
				"client {} points at missing ingress gateway {}",
				client.client_id, client.ingress_gateway_id
			);
			continue;
		}
		graph.add_edge(GraphEdge {
			source: client.client_id.clone(),
			target: client.ingress_gateway_id.clone(),
			color: CLIENT_EDGE_COLOR,
			size: CLIENT_EDGE_SIZE,
			kind: EdgeKind::ClientIngress,
		});
	}

	for node in nodes.iter().filter(|n| n.is_egress_gateway) {
		graph.add_edge(GraphEdge {
			source: node.id.clone(),
			target: egress_range_id(&node.id),
			color: EGRESS_RANGE_EDGE_COLOR,
			size: EGRESS_RANGE_EDGE_SIZE,
			kind: EdgeKind::EgressRange,
		});
	}
}

pub fn egress_range_id(node_id: &str) -> String {
	format!("{EGRESS_RANGE_PREFIX}{node_id}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::AclLevel;

	fn host(id: &str, name: &str) -> Host {
		Host {
			id: id.into(),
			name: name.into(),
			..Default::default()
		}
	}

	fn node(id: &str, host_id: &str) -> Node {
		Node {
			id: id.into(),
			host_id: host_id.into(),
			network: "net-1".into(),
			..Default::default()
		}
	}

	fn egress(id: &str, host_id: &str, ranges: &[&str]) -> Node {
		Node {
			is_egress_gateway: true,
			egress_gateway_ranges: ranges.iter().map(|r| r.to_string()).collect(),
			..node(id, host_id)
		}
	}

	fn client(id: &str, gateway: &str) -> ExternalClient {
		ExternalClient {
			client_id: id.into(),
			ingress_gateway_id: gateway.into(),
			network: "net-1".into(),
			..Default::default()
		}
	}

	#[test]
	fn counts_follow_node_egress_and_client_totals() {
		let hosts = vec![host("h1", "one"), host("h2", "two"), host("h3", "three")];
		let nodes = vec![
			egress("n1", "h1", &["10.0.0.0/8"]),
			node("n2", "h2"),
			egress("n3", "h3", &["192.168.0.0/16", "fd00::/8"]),
		];
		let clients = vec![client("c1", "n2"), client("c2", "n2")];
		let graph = build_topology(&nodes, &hosts, &AclMatrix::new(), &clients);

		let (n, e, c) = (3, 2, 2);
		assert_eq!(graph.node_count(), n + e + c);
		assert_eq!(graph.edge_count(), n * n + c + e);
	}

	#[test]
	fn edge_colour_needs_both_directions() {
		let hosts = vec![host("h1", "one"), host("h2", "two")];
		let nodes = vec![node("n1", "h1"), node("n2", "h2")];
		let mut acl = AclMatrix::new();
		acl.set("n1", "n2", AclLevel::Allowed);

		let graph = build_topology(&nodes, &hosts, &acl, &[]);
		assert!(graph.edges.iter().all(|e| e.kind == EdgeKind::Disconnected));

		acl.set("n2", "n1", AclLevel::Allowed);
		let graph = build_topology(&nodes, &hosts, &acl, &[]);
		let between = graph
			.edges
			.iter()
			.filter(|e| !e.is_self_loop())
			.collect::<Vec<_>>();
		assert_eq!(between.len(), 2);
		assert!(between.iter().all(|e| e.color == HOST_EDGE_COLOR));
	}

	#[test]
	fn dangling_host_gets_placeholder_label() {
		let nodes = vec![node("n1", "missing")];
		let graph = build_topology(&nodes, &[], &AclMatrix::new(), &[]);
		assert_eq!(graph.nodes[0].label, crate::models::NULL_HOST_NAME);
	}

	#[test]
	fn unsorted_input_builds_identically() {
		let hosts = vec![host("h1", "one"), host("h2", "two")];
		let a = vec![node("n2", "h2"), egress("n1", "h1", &["10.0.0.0/8"])];
		let b = vec![egress("n1", "h1", &["10.0.0.0/8"]), node("n2", "h2")];
		let ca = vec![client("z", "n2"), client("a", "n2")];
		let cb = vec![client("a", "n2"), client("z", "n2")];

		let first = build_topology(&a, &hosts, &AclMatrix::new(), &ca);
		let second = build_topology(&b, &hosts, &AclMatrix::new(), &cb);
		assert_eq!(first, second);
		assert_eq!(first.nodes[0].id, "n1");
		assert_eq!(first.nodes[1].id, "egress-range-n1");
	}

	#[test]
	fn client_with_missing_gateway_has_no_edge() {
		let hosts = vec![host("h1", "one")];
		let nodes = vec![node("n1", "h1")];
		let graph = build_topology(&nodes, &hosts, &AclMatrix::new(), &[client("c1", "gone")]);
		assert!(graph.contains("c1"));
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn springs_are_deduplicated_pairs() {
		let hosts = vec![host("h1", "one"), host("h2", "two")];
		let nodes = vec![egress("n1", "h1", &["10.0.0.0/8"]), node("n2", "h2")];
		let graph = build_topology(&nodes, &hosts, &AclMatrix::new(), &[]);
		let n1 = graph.index_of("n1").unwrap();
		let n2 = graph.index_of("n2").unwrap();
		let range = graph.index_of("egress-range-n1").unwrap();

		let springs = graph.springs();
		assert_eq!(springs.len(), 2);
		assert!(springs.contains(&(n1.min(n2), n1.max(n2))));
		assert!(springs.contains(&(n1.min(range), n1.max(range))));
		assert_eq!(graph.neighbors(n1).len(), 2);
	}
}
