//! Shared application state, injected through leptos context.
//!
//! Each collection lives in its own signal; derived views are computed on
//! demand from plain functions so they can be tested without a runtime.

use std::collections::HashMap;

use leptos::prelude::*;
use log::info;

use crate::models::{
	DnsEntry, EnrollmentKey, ExtendedNode, ExternalClient, Host, Network, Node, ServerConfig,
	ServerStatus, User,
};
use crate::services::ApiClient;
use crate::services::auth::{self, Session};

pub mod actions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Dark,
	Light,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}
}

/// One routed range behind an egress gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalRoute {
	pub node_id: String,
	pub range: String,
}

#[derive(Clone, Copy)]
pub struct Store {
	pub hosts: RwSignal<Vec<Host>>,
	pub nodes: RwSignal<Vec<Node>>,
	pub networks: RwSignal<Vec<Network>>,
	pub clients: RwSignal<Vec<ExternalClient>>,
	pub dns: RwSignal<Vec<DnsEntry>>,
	pub keys: RwSignal<Vec<EnrollmentKey>>,
	pub users: RwSignal<Vec<User>>,
	pub server_config: RwSignal<Option<ServerConfig>>,
	pub server_status: RwSignal<Option<ServerStatus>>,
	pub theme: RwSignal<Theme>,
	pub session: RwSignal<Option<Session>>,
}

impl Store {
	pub fn new(session: Option<Session>) -> Self {
		Self {
			hosts: RwSignal::new(Vec::new()),
			nodes: RwSignal::new(Vec::new()),
			networks: RwSignal::new(Vec::new()),
			clients: RwSignal::new(Vec::new()),
			dns: RwSignal::new(Vec::new()),
			keys: RwSignal::new(Vec::new()),
			users: RwSignal::new(Vec::new()),
			server_config: RwSignal::new(None),
			server_status: RwSignal::new(None),
			theme: RwSignal::new(Theme::default()),
			session: RwSignal::new(session),
		}
	}

	/// API client carrying the current session token.
	pub fn api(&self, base_url: &str) -> ApiClient {
		ApiClient::new(base_url).with_token(self.session.get_untracked().map(|s| s.token))
	}

	pub fn is_logged_in(&self) -> bool {
		self.session.with(Option::is_some)
	}

	pub fn username(&self) -> String {
		self.session
			.with(|s| s.as_ref().map(|s| s.username.clone()))
			.unwrap_or_default()
	}

	pub fn login(&self, session: Session) {
		auth::save_session(&session);
		info!("signed in as {}", session.username);
		self.session.set(Some(session));
	}

	pub fn logout(&self) {
		auth::clear_session();
		self.session.set(None);
	}

	pub fn set_server_status(&self, status: ServerStatus) {
		self.server_status.set(Some(status));
	}

	pub fn is_healthy(&self) -> bool {
		self.server_status.with(|s| is_healthy(s.as_ref()))
	}

	pub fn is_ee(&self) -> bool {
		self.server_config.with(|c| c.as_ref().is_some_and(|c| c.is_ee))
	}

	pub fn network(&self, netid: &str) -> Option<Network> {
		self.networks.with(|n| n.iter().find(|n| n.netid == netid).cloned())
	}

	pub fn network_nodes(&self, netid: &str) -> Vec<Node> {
		self.nodes.with(|n| network_nodes(n, netid))
	}

	pub fn network_clients(&self, netid: &str) -> Vec<ExternalClient> {
		self.clients.with(|c| c.iter().filter(|c| c.network == netid).cloned().collect())
	}

	pub fn network_dns(&self, netid: &str) -> Vec<DnsEntry> {
		self.dns.with(|d| d.iter().filter(|d| d.network == netid).cloned().collect())
	}

	pub fn extended_nodes(&self, netid: &str) -> Vec<ExtendedNode> {
		let nodes = self.network_nodes(netid);
		self.hosts.with(|h| extended_nodes(&nodes, h))
	}

	pub fn host_map(&self) -> HashMap<String, Host> {
		self.hosts.with(|h| host_map(h))
	}
}

pub fn provide_store(session: Option<Session>) -> Store {
	let store = Store::new(session);
	provide_context(store);
	store
}

pub fn use_store() -> Store {
	expect_context::<Store>()
}

/// No status reported yet counts as healthy.
pub fn is_healthy(status: Option<&ServerStatus>) -> bool {
	status.is_none_or(ServerStatus::is_healthy)
}

pub fn network_nodes(nodes: &[Node], netid: &str) -> Vec<Node> {
	nodes.iter().filter(|n| n.network == netid).cloned().collect()
}

pub fn host_map(hosts: &[Host]) -> HashMap<String, Host> {
	hosts.iter().map(|h| (h.id.clone(), h.clone())).collect()
}

/// Nodes paired with their host; a missing host becomes the placeholder.
pub fn extended_nodes(nodes: &[Node], hosts: &[Host]) -> Vec<ExtendedNode> {
	let hosts = host_map(hosts);
	nodes
		.iter()
		.map(|node| ExtendedNode {
			node: node.clone(),
			host: hosts.get(&node.host_id).cloned().unwrap_or_else(Host::null),
		})
		.collect()
}

pub fn ingress_gateways(nodes: &[ExtendedNode]) -> Vec<ExtendedNode> {
	nodes.iter().filter(|n| n.node.is_ingress_gateway).cloned().collect()
}

pub fn egress_gateways(nodes: &[ExtendedNode]) -> Vec<ExtendedNode> {
	nodes.iter().filter(|n| n.node.is_egress_gateway).cloned().collect()
}

/// Ranges of every egress gateway, optionally limited to one gateway.
pub fn external_routes(nodes: &[Node], gateway: Option<&str>) -> Vec<ExternalRoute> {
	nodes
		.iter()
		.filter(|n| n.is_egress_gateway)
		.filter(|n| gateway.is_none_or(|g| g == n.id))
		.flat_map(|n| {
			n.egress_gateway_ranges.iter().map(|range| ExternalRoute {
				node_id: n.id.clone(),
				range: range.clone(),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::NULL_HOST_NAME;

	fn nodes() -> Vec<Node> {
		vec![
			Node {
				id: "a".into(),
				host_id: "h1".into(),
				network: "home".into(),
				is_ingress_gateway: true,
				..Default::default()
			},
			Node {
				id: "b".into(),
				host_id: "gone".into(),
				network: "home".into(),
				is_egress_gateway: true,
				egress_gateway_ranges: vec!["10.9.0.0/24".into(), "10.8.0.0/24".into()],
				..Default::default()
			},
			Node {
				id: "c".into(),
				host_id: "h1".into(),
				network: "work".into(),
				is_egress_gateway: true,
				egress_gateway_ranges: vec!["172.16.0.0/12".into()],
				..Default::default()
			},
		]
	}

	fn hosts() -> Vec<Host> {
		vec![Host {
			id: "h1".into(),
			name: "laptop".into(),
			..Default::default()
		}]
	}

	#[test]
	fn filters_by_network() {
		let ids: Vec<_> = network_nodes(&nodes(), "home").into_iter().map(|n| n.id).collect();
		assert_eq!(ids, vec!["a", "b"]);
		assert!(network_nodes(&nodes(), "nope").is_empty());
	}

	#[test]
	fn extended_nodes_use_placeholder_host() {
		let ext = extended_nodes(&network_nodes(&nodes(), "home"), &hosts());
		assert_eq!(ext[0].name(), "laptop");
		assert_eq!(ext[1].name(), NULL_HOST_NAME);
		assert_eq!(ingress_gateways(&ext).len(), 1);
		assert_eq!(egress_gateways(&ext)[0].node.id, "b");
	}

	#[test]
	fn external_routes_by_gateway() {
		let all = external_routes(&nodes(), None);
		assert_eq!(all.len(), 3);
		let only_b = external_routes(&nodes(), Some("b"));
		assert_eq!(
			only_b,
			vec![
				ExternalRoute {
					node_id: "b".into(),
					range: "10.9.0.0/24".into()
				},
				ExternalRoute {
					node_id: "b".into(),
					range: "10.8.0.0/24".into()
				},
			]
		);
	}

	#[test]
	fn health_needs_all_three_flags() {
		assert!(is_healthy(None));
		let mut status = ServerStatus {
			db_connected: true,
			broker_connected: true,
			healthy_network: true,
			..Default::default()
		};
		assert!(is_healthy(Some(&status)));
		status.broker_connected = false;
		assert!(!is_healthy(Some(&status)));
	}

	#[test]
	fn theme_toggles() {
		assert_eq!(Theme::default().toggled(), Theme::Light);
		assert_eq!(Theme::Light.toggled().as_str(), "dark");
	}
}
