use serde::{Deserialize, Serialize};

use super::codec::yes_no;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
	pub netid: String,
	#[serde(rename = "addressrange")]
	pub address_range: String,
	#[serde(rename = "addressrange6")]
	pub address_range6: String,
	#[serde(rename = "isipv4", with = "yes_no")]
	pub is_ipv4: bool,
	#[serde(rename = "isipv6", with = "yes_no")]
	pub is_ipv6: bool,
	#[serde(rename = "defaultacl", with = "yes_no")]
	pub default_acl: bool,
	#[serde(rename = "defaultlistenport")]
	pub default_listen_port: u16,
	#[serde(rename = "defaultmtu")]
	pub default_mtu: u32,
	#[serde(rename = "defaultkeepalive")]
	pub default_keepalive: u32,
	#[serde(rename = "defaultinterface")]
	pub default_interface: String,
	#[serde(rename = "nodeslastmodified")]
	pub nodes_last_modified: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_bool_and_yes_no_flags() {
		let net: Network = serde_json::from_str(
			r#"{"netid":"net-1","isipv4":"yes","isipv6":false,"defaultacl":"no"}"#,
		)
		.unwrap();
		assert!(net.is_ipv4);
		assert!(!net.is_ipv6);
		assert!(!net.default_acl);

		let json = serde_json::to_value(&net).unwrap();
		assert_eq!(json["isipv4"], "yes");
		assert_eq!(json["defaultacl"], "no");
	}
}
