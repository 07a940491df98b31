use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsEntry {
	pub name: String,
	pub network: String,
	pub address: String,
	pub address6: String,
}

impl DnsEntry {
	/// `name.network`, as resolvers inside the mesh see it.
	pub fn fqdn(&self) -> String {
		format!("{}.{}", self.name, self.network)
	}
}
