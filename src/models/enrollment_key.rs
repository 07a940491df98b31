use serde::{Deserialize, Serialize};

use super::codec::{null_as_default, unix_time};

/// Token a host presents to join one or more networks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentKey {
	pub value: String,
	#[serde(deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	pub token: String,
	#[serde(deserialize_with = "null_as_default")]
	pub networks: Vec<String>,
	#[serde(with = "unix_time")]
	pub expiration: i64,
	pub uses_remaining: u32,
	pub unlimited: bool,
	#[serde(rename = "type")]
	pub kind: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentKeyKind {
	Unlimited,
	Uses,
	TimeBound,
}

impl EnrollmentKey {
	pub fn kind(&self) -> EnrollmentKeyKind {
		if self.unlimited {
			EnrollmentKeyKind::Unlimited
		} else if self.expiration > 0 {
			EnrollmentKeyKind::TimeBound
		} else {
			EnrollmentKeyKind::Uses
		}
	}

	pub fn is_valid(&self, now: i64) -> bool {
		match self.kind() {
			EnrollmentKeyKind::Unlimited => true,
			EnrollmentKeyKind::Uses => self.uses_remaining > 0,
			EnrollmentKeyKind::TimeBound => self.expiration > now,
		}
	}
}

impl EnrollmentKeyKind {
	pub fn label(self) -> &'static str {
		match self {
			Self::Unlimited => "Unlimited",
			Self::Uses => "Limited number of uses",
			Self::TimeBound => "Time bound",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expiration_accepts_rfc3339_and_zero_time() {
		let key: EnrollmentKey = serde_json::from_str(
			r#"{"value":"k1","tags":["ci"],"expiration":"2030-01-01T00:00:00Z","unlimited":false}"#,
		)
		.unwrap();
		assert_eq!(key.expiration, 1_893_456_000);
		assert_eq!(key.kind(), EnrollmentKeyKind::TimeBound);
		assert!(key.is_valid(1_700_000_000));
		assert!(!key.is_valid(1_900_000_000));

		let key: EnrollmentKey = serde_json::from_str(
			r#"{"value":"k2","expiration":"0001-01-01T00:00:00Z","uses_remaining":0,"networks":null}"#,
		)
		.unwrap();
		assert_eq!(key.expiration, 0);
		assert_eq!(key.kind(), EnrollmentKeyKind::Uses);
		assert!(!key.is_valid(0));
	}
}
