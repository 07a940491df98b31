use serde::{Deserialize, Serialize};

use super::Host;
use super::codec::null_as_default;

const WARNING_AFTER_SECS: i64 = 5 * 60;
const ERROR_AFTER_SECS: i64 = 30 * 60;

/// A host's membership in one network.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
	pub id: String,
	#[serde(rename = "hostid")]
	pub host_id: String,
	pub network: String,
	pub address: String,
	pub address6: String,
	#[serde(rename = "isegressgateway")]
	pub is_egress_gateway: bool,
	#[serde(rename = "egressgatewayranges", deserialize_with = "null_as_default")]
	pub egress_gateway_ranges: Vec<String>,
	#[serde(rename = "egressgatewaynatenabled")]
	pub egress_nat_enabled: bool,
	#[serde(rename = "isingressgateway")]
	pub is_ingress_gateway: bool,
	#[serde(rename = "ingressdns")]
	pub ingress_dns: String,
	#[serde(rename = "lastcheckin")]
	pub last_checkin: i64,
	pub connected: bool,
	#[serde(rename = "pendingdelete")]
	pub pending_delete: bool,
	#[serde(rename = "relayedby")]
	pub relayed_by: String,
}

/// Health derived from how recently a node checked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
	Healthy,
	Warning,
	Error,
	Unknown,
}

impl Connectivity {
	pub fn label(self) -> &'static str {
		match self {
			Self::Healthy => "Healthy",
			Self::Warning => "Unstable",
			Self::Error => "Error",
			Self::Unknown => "Unknown",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			Self::Healthy => "badge badge-success",
			Self::Warning => "badge badge-warning",
			Self::Error => "badge badge-error",
			Self::Unknown => "badge badge-processing",
		}
	}
}

impl Node {
	pub fn connectivity(&self, now: i64) -> Connectivity {
		if self.last_checkin <= 0 {
			return Connectivity::Unknown;
		}
		match now - self.last_checkin {
			d if d > ERROR_AFTER_SECS => Connectivity::Error,
			d if d > WARNING_AFTER_SECS => Connectivity::Warning,
			_ => Connectivity::Healthy,
		}
	}

	/// Both addresses, comma separated, skipping empty families.
	pub fn addresses(&self) -> String {
		[self.address.as_str(), self.address6.as_str()]
			.into_iter()
			.filter(|a| !a.is_empty())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// A node joined with the details of the host that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedNode {
	pub node: Node,
	pub host: Host,
}

impl ExtendedNode {
	pub fn name(&self) -> &str {
		&self.host.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_null_ranges_and_missing_fields() {
		let node: Node = serde_json::from_str(
			r#"{"id":"node-1","hostid":"host-1","isegressgateway":true,"egressgatewayranges":null}"#,
		)
		.unwrap();
		assert!(node.is_egress_gateway);
		assert!(node.egress_gateway_ranges.is_empty());
		assert_eq!(node.network, "");
	}

	#[test]
	fn connectivity_follows_checkin_age() {
		let mut node = Node::default();
		assert_eq!(node.connectivity(1_000), Connectivity::Unknown);
		node.last_checkin = 10_000;
		assert_eq!(node.connectivity(10_060), Connectivity::Healthy);
		assert_eq!(node.connectivity(10_000 + 6 * 60), Connectivity::Warning);
		assert_eq!(node.connectivity(10_000 + 31 * 60), Connectivity::Error);
	}

	#[test]
	fn addresses_skip_empty_family() {
		let node = Node {
			address: "10.1.0.2/32".into(),
			..Default::default()
		};
		assert_eq!(node.addresses(), "10.1.0.2/32");
	}
}
