use super::{FormError, is_valid_cidr};
use crate::models::Network;

const MAX_NETID_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkForm {
	pub netid: String,
	pub is_ipv4: bool,
	pub address_range: String,
	pub is_ipv6: bool,
	pub address_range6: String,
	pub default_acl: bool,
}

impl Default for NetworkForm {
	fn default() -> Self {
		Self {
			netid: String::new(),
			is_ipv4: true,
			address_range: String::new(),
			is_ipv6: false,
			address_range6: String::new(),
			default_acl: true,
		}
	}
}

impl NetworkForm {
	/// Prefills the form for editing an existing network.
	pub fn from_network(network: &Network) -> Self {
		Self {
			netid: network.netid.clone(),
			is_ipv4: network.is_ipv4,
			address_range: network.address_range.clone(),
			is_ipv6: network.is_ipv6,
			address_range6: network.address_range6.clone(),
			default_acl: network.default_acl,
		}
	}

	pub fn validate(&self) -> Result<Network, FormError> {
		let netid = self.netid.trim();
		if !is_valid_netid(netid) {
			return Err(FormError::InvalidNetworkId);
		}
		if !self.is_ipv4 && !self.is_ipv6 {
			return Err(FormError::NoAddressFamily);
		}
		let range4 = checked_range(self.is_ipv4, &self.address_range)?;
		let range6 = checked_range(self.is_ipv6, &self.address_range6)?;
		Ok(Network {
			netid: netid.to_string(),
			address_range: range4,
			address_range6: range6,
			is_ipv4: self.is_ipv4,
			is_ipv6: self.is_ipv6,
			default_acl: self.default_acl,
			..Default::default()
		})
	}
}

pub fn is_valid_netid(netid: &str) -> bool {
	(1..=MAX_NETID_LEN).contains(&netid.len())
		&& netid
			.bytes()
			.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn checked_range(enabled: bool, raw: &str) -> Result<String, FormError> {
	if !enabled {
		return Ok(String::new());
	}
	let range = raw.trim();
	if is_valid_cidr(range) {
		Ok(range.to_string())
	} else {
		Err(FormError::InvalidCidr(range.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form() -> NetworkForm {
		NetworkForm {
			netid: "home-lab".into(),
			address_range: "10.101.0.0/16".into(),
			..Default::default()
		}
	}

	#[test]
	fn netid_rules() {
		assert!(is_valid_netid("home-lab-2"));
		assert!(!is_valid_netid(""));
		assert!(!is_valid_netid("Home"));
		assert!(!is_valid_netid("home_lab"));
		assert!(!is_valid_netid(&"a".repeat(33)));
		assert!(is_valid_netid(&"a".repeat(32)));
	}

	#[test]
	fn needs_an_address_family() {
		let mut f = form();
		f.is_ipv4 = false;
		assert_eq!(f.validate(), Err(FormError::NoAddressFamily));
	}

	#[test]
	fn only_enabled_ranges_are_checked() {
		let mut f = form();
		f.address_range6 = "garbage".into();
		let net = f.validate().unwrap();
		assert_eq!(net.address_range, "10.101.0.0/16");
		assert_eq!(net.address_range6, "");
		assert!(net.default_acl);

		f.is_ipv6 = true;
		assert_eq!(f.validate(), Err(FormError::InvalidCidr("garbage".into())));
		f.address_range6 = "fd00:101::/64".into();
		assert!(f.validate().unwrap().is_ipv6);
	}

	#[test]
	fn edit_round_trips_fields() {
		let net = form().validate().unwrap();
		assert_eq!(NetworkForm::from_network(&net), form());
	}
}
