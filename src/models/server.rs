use serde::{Deserialize, Serialize};

use super::codec::yes_no;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	#[serde(rename = "IsEE", with = "yes_no")]
	pub is_ee: bool,
	#[serde(rename = "Version")]
	pub version: String,
	#[serde(rename = "Server")]
	pub server: String,
	#[serde(rename = "APIHost")]
	pub api_host: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
	pub db_connected: bool,
	pub broker_connected: bool,
	#[serde(rename = "healthyNetwork")]
	pub healthy_network: bool,
	pub license_error: String,
	pub is_pro: bool,
}

impl ServerStatus {
	pub fn is_healthy(&self) -> bool {
		self.db_connected && self.broker_connected && self.healthy_network
	}
}
