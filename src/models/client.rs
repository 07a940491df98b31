use serde::{Deserialize, Serialize};

/// A device outside the mesh that reaches it through an ingress gateway.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalClient {
	#[serde(rename = "clientid")]
	pub client_id: String,
	pub network: String,
	#[serde(rename = "ingressgatewayid")]
	pub ingress_gateway_id: String,
	#[serde(rename = "ingressgatewayendpoint")]
	pub ingress_gateway_endpoint: String,
	pub address: String,
	pub address6: String,
	#[serde(rename = "publickey")]
	pub public_key: String,
	pub enabled: bool,
}

impl ExternalClient {
	pub fn allowed_ips(&self) -> String {
		[self.address.as_str(), self.address6.as_str()]
			.into_iter()
			.filter(|a| !a.is_empty())
			.collect::<Vec<_>>()
			.join(", ")
	}
}
