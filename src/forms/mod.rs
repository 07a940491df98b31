//! Form state and the validation that runs before anything is sent.
//!
//! Every form turns into the request body its service expects, or the first
//! rule it breaks.

use std::net::IpAddr;

use ipnetwork::IpNetwork;

mod client;
mod dns;
mod egress;
mod enrollment_key;
mod network;
mod user;

pub use client::ClientForm;
pub use dns::DnsForm;
pub use egress::EgressForm;
pub use enrollment_key::EnrollmentKeyForm;
pub use network::NetworkForm;
pub use user::{MIN_PASSWORD_LEN, UserForm};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("{0} is required")]
	Missing(&'static str),
	#[error("{0} is not a valid CIDR range")]
	InvalidCidr(String),
	#[error("add at least one range")]
	NoRanges,
	#[error("uses must be at least 1")]
	UsesBelowOne,
	#[error("choose an expiration time")]
	MissingExpiration,
	#[error("{0} is not a valid date and time")]
	InvalidExpiration(String),
	#[error("password must be at least {0} characters")]
	PasswordTooShort(usize),
	#[error("passwords do not match")]
	PasswordMismatch,
	#[error("network name must be 1 to 32 lowercase letters, digits or dashes")]
	InvalidNetworkId,
	#[error("enable IPv4 or IPv6")]
	NoAddressFamily,
	#[error("{0} is not a valid IP address")]
	InvalidAddress(String),
}

/// IPv4 or IPv6 range in `address/prefix` form.
pub fn is_valid_cidr(value: &str) -> bool {
	value.contains('/') && value.parse::<IpNetwork>().is_ok()
}

pub fn is_valid_ip(value: &str) -> bool {
	value.parse::<IpAddr>().is_ok()
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
	match value.trim() {
		"" => Err(FormError::Missing(field)),
		v => Ok(v.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cidr_accepts_both_families() {
		assert!(is_valid_cidr("10.0.0.0/24"));
		assert!(is_valid_cidr("fd00::/64"));
		assert!(!is_valid_cidr("10.0.0.0"));
		assert!(!is_valid_cidr("10.0.0.0/33"));
		assert!(!is_valid_cidr("not-a-range/8"));
	}

	#[test]
	fn ip_accepts_both_families() {
		assert!(is_valid_ip("10.0.0.7"));
		assert!(is_valid_ip("fd00::7"));
		assert!(!is_valid_ip("10.0.0.0/24"));
	}

	#[test]
	fn required_trims() {
		assert_eq!(required("  a ", "name"), Ok("a".into()));
		assert_eq!(required("   ", "name"), Err(FormError::Missing("name")));
	}
}
