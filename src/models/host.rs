use serde::{Deserialize, Serialize};

/// Label shown for nodes whose owning host is unknown.
pub const NULL_HOST_NAME: &str = "Unknown host";

/// A machine running the mesh agent. One host may own nodes in many networks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
	pub id: String,
	pub name: String,
	pub os: String,
	pub version: String,
	#[serde(rename = "endpointip")]
	pub endpoint_ip: String,
	#[serde(rename = "publickey")]
	pub public_key: String,
	#[serde(rename = "listenport")]
	pub listen_port: u16,
	pub mtu: u32,
	#[serde(rename = "macaddress")]
	pub mac_address: String,
	#[serde(rename = "isdefault")]
	pub is_default: bool,
	pub nat_type: String,
}

impl Host {
	/// Placeholder substituted for dangling `hostid` references.
	pub fn null() -> Self {
		Self {
			name: NULL_HOST_NAME.to_string(),
			..Default::default()
		}
	}
}
