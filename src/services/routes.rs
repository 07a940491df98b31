//! Path prefixes of the management API.

pub const NETWORKS: &str = "/api/networks";
pub const NODES: &str = "/api/nodes";
pub const EXTERNAL_CLIENTS: &str = "/api/extclients";
pub const DNS: &str = "/api/dns";
pub const HOSTS: &str = "/api/hosts";
pub const ENROLLMENT_KEYS: &str = "/api/v1/enrollment-keys";
pub const USERS: &str = "/api/users";
pub const USERS_ADMIN: &str = "/api/users/adm";
pub const USER_GROUPS: &str = "/api/usergroups";
pub const SERVER_CONFIG: &str = "/api/server/getconfig";
pub const SERVER_STATUS: &str = "/api/server/status";
pub const LOGIN: &str = "/api/users/adm/authenticate";

pub fn network(netid: &str) -> String {
	format!("{NETWORKS}/{netid}")
}

pub fn network_acls(netid: &str) -> String {
	format!("{NETWORKS}/{netid}/acls")
}

pub fn node(netid: &str, node_id: &str) -> String {
	format!("{NODES}/{netid}/{node_id}")
}

/// `action` is one of `creategateway`, `deletegateway`, `createingress`, `deleteingress`.
pub fn node_action(netid: &str, node_id: &str, action: &str) -> String {
	format!("{NODES}/{netid}/{node_id}/{action}")
}

pub fn external_client(netid: &str, id: &str) -> String {
	format!("{EXTERNAL_CLIENTS}/{netid}/{id}")
}

pub fn network_dns(netid: &str) -> String {
	format!("{DNS}/{netid}")
}

pub fn dns_entry(netid: &str, name: &str) -> String {
	format!("{DNS}/{netid}/{name}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_nested_paths() {
		assert_eq!(network_acls("home"), "/api/networks/home/acls");
		assert_eq!(
			node_action("home", "n1", "creategateway"),
			"/api/nodes/home/n1/creategateway"
		);
		assert_eq!(dns_entry("home", "nas"), "/api/dns/home/nas");
	}
}
