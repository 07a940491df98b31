use mesh_dashboard::components::network_graph::{
	EdgeKind, LayoutRunner, LayoutSettings, LayoutStrategy, NodeKind, apply_layout,
	build_topology, egress_range_id,
};
use mesh_dashboard::models::{AclLevel, AclMatrix, ExternalClient, Host, Node};

fn hosts() -> Vec<Host> {
	vec![
		Host {
			id: "host-1".into(),
			name: "gateway".into(),
			..Default::default()
		},
		Host {
			id: "host-2".into(),
			name: "laptop".into(),
			..Default::default()
		},
	]
}

fn nodes() -> Vec<Node> {
	vec![
		Node {
			id: "node-2".into(),
			host_id: "host-2".into(),
			is_ingress_gateway: true,
			..Default::default()
		},
		Node {
			id: "node-1".into(),
			host_id: "host-1".into(),
			is_egress_gateway: true,
			egress_gateway_ranges: vec!["10.0.0.0/8".into()],
			..Default::default()
		},
	]
}

fn acl() -> AclMatrix {
	let mut acl = AclMatrix::new();
	acl.set_pair("node-1", "node-2", AclLevel::Allowed);
	acl
}

fn clients() -> Vec<ExternalClient> {
	vec![ExternalClient {
		client_id: "phone".into(),
		ingress_gateway_id: "node-2".into(),
		..Default::default()
	}]
}

fn kind_of(graph: &mesh_dashboard::components::network_graph::TopologyGraph, s: &str, t: &str) -> EdgeKind {
	graph
		.edges
		.iter()
		.find(|e| e.source == s && e.target == t)
		.map(|e| e.kind)
		.unwrap_or_else(|| panic!("missing edge {s} -> {t}"))
}

#[test]
fn two_node_network_with_egress_and_client() {
	let graph = build_topology(&nodes(), &hosts(), &acl(), &clients());

	assert_eq!(graph.node_count(), 4);
	assert_eq!(graph.edge_count(), 6);

	let range = egress_range_id("node-1");
	assert_eq!(graph.node(&range).map(|n| n.kind), Some(NodeKind::EgressRange));
	assert_eq!(graph.node(&range).map(|n| n.label.as_str()), Some("10.0.0.0/8"));
	assert_eq!(graph.node("node-1").map(|n| n.kind), Some(NodeKind::EgressGateway));
	assert_eq!(graph.node("node-2").map(|n| n.label.as_str()), Some("laptop"));

	assert_eq!(kind_of(&graph, "node-1", "node-1"), EdgeKind::Disconnected);
	assert_eq!(kind_of(&graph, "node-1", "node-2"), EdgeKind::Communicating);
	assert_eq!(kind_of(&graph, "node-2", "node-1"), EdgeKind::Communicating);
	assert_eq!(kind_of(&graph, "node-2", "node-2"), EdgeKind::Disconnected);
	assert_eq!(kind_of(&graph, "phone", "node-2"), EdgeKind::ClientIngress);
	assert_eq!(kind_of(&graph, "node-1", &range), EdgeKind::EgressRange);
}

#[test]
fn one_sided_grant_is_not_communicating() {
	let mut acl = AclMatrix::new();
	acl.set("node-1", "node-2", AclLevel::Allowed);
	let graph = build_topology(&nodes(), &hosts(), &acl, &[]);
	assert_eq!(kind_of(&graph, "node-1", "node-2"), EdgeKind::Disconnected);
	assert_eq!(kind_of(&graph, "node-2", "node-1"), EdgeKind::Disconnected);
}

#[test]
fn counts_follow_n_squared_plus_gateways_plus_clients() {
	for n in 0..6usize {
		let nodes: Vec<Node> = (0..n)
			.map(|i| Node {
				id: format!("n{i}"),
				host_id: format!("h{i}"),
				is_egress_gateway: i % 2 == 0,
				is_ingress_gateway: true,
				..Default::default()
			})
			.collect();
		let egress = nodes.iter().filter(|n| n.is_egress_gateway).count();
		let clients: Vec<ExternalClient> = (0..n)
			.map(|i| ExternalClient {
				client_id: format!("c{i}"),
				ingress_gateway_id: format!("n{i}"),
				..Default::default()
			})
			.collect();

		let graph = build_topology(&nodes, &[], &AclMatrix::new(), &clients);
		assert_eq!(graph.node_count(), n + egress + n);
		assert_eq!(graph.edge_count(), n * n + n + egress);
	}
}

#[test]
fn rebuilding_stops_the_live_layout() {
	let runner = LayoutRunner::default();
	let settings = LayoutSettings::default();

	let mut first = build_topology(&nodes(), &hosts(), &acl(), &clients());
	let live = apply_layout(&mut first, LayoutStrategy::ForceBackground, &settings, &runner)
		.expect("background strategy returns a live layout");
	assert!(live.is_running());

	let mut second = build_topology(&nodes(), &hosts(), &acl(), &clients());
	let circular = apply_layout(&mut second, LayoutStrategy::Circular, &settings, &runner);
	assert!(circular.is_none());
	assert!(!live.is_running());
	assert!(!runner.is_running());
}
