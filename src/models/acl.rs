use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Node;

/// Grant level stored for one direction between two nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum AclLevel {
	#[default]
	Unset,
	Denied,
	Allowed,
}

impl From<u8> for AclLevel {
	fn from(value: u8) -> Self {
		match value {
			1 => Self::Denied,
			2 => Self::Allowed,
			_ => Self::Unset,
		}
	}
}

impl From<AclLevel> for u8 {
	fn from(level: AclLevel) -> Self {
		match level {
			AclLevel::Unset => 0,
			AclLevel::Denied => 1,
			AclLevel::Allowed => 2,
		}
	}
}

/// Sparse `node -> node -> level` map as served by `/api/networks/{id}/acls`.
///
/// The two directions of a pair are stored independently and may disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AclMatrix(HashMap<String, HashMap<String, AclLevel>>);

impl AclMatrix {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.0.values().all(HashMap::is_empty)
	}

	/// Level granted from `from` towards `to`; missing entries are `Unset`.
	pub fn level(&self, from: &str, to: &str) -> AclLevel {
		self.0
			.get(from)
			.and_then(|row| row.get(to))
			.copied()
			.unwrap_or_default()
	}

	pub fn set(&mut self, from: &str, to: &str, level: AclLevel) {
		self.0
			.entry(from.to_string())
			.or_default()
			.insert(to.to_string(), level);
	}

	/// Writes both directions of a pair.
	pub fn set_pair(&mut self, a: &str, b: &str, level: AclLevel) {
		self.set(a, b, level);
		self.set(b, a, level);
	}

	/// True only when both directions are `Allowed`.
	pub fn can_communicate(&self, a: &str, b: &str) -> bool {
		self.level(a, b) == AclLevel::Allowed && self.level(b, a) == AclLevel::Allowed
	}
}

/// Whether two mesh nodes are shown as communicating.
///
/// A one-directional grant counts as no communication.
pub fn can_communicate(a: &Node, b: &Node, matrix: &AclMatrix) -> bool {
	matrix.can_communicate(&a.id, &b.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str) -> Node {
		Node {
			id: id.into(),
			..Default::default()
		}
	}

	#[test]
	fn empty_matrix_grants_nothing() {
		let acl = AclMatrix::new();
		assert!(acl.is_empty());
		for a in ["node-1", "node-2"] {
			for b in ["node-1", "node-2"] {
				assert!(!can_communicate(&node(a), &node(b), &acl));
			}
		}
	}

	#[test]
	fn requires_allowed_in_both_directions() {
		let mut acl = AclMatrix::new();
		acl.set("node-1", "node-2", AclLevel::Allowed);
		assert!(!acl.can_communicate("node-1", "node-2"));
		assert!(!acl.can_communicate("node-2", "node-1"));

		acl.set("node-2", "node-1", AclLevel::Denied);
		assert!(!acl.can_communicate("node-1", "node-2"));

		acl.set("node-2", "node-1", AclLevel::Allowed);
		assert!(acl.can_communicate("node-1", "node-2"));
		assert!(acl.can_communicate("node-2", "node-1"));
		assert!(!acl.can_communicate("node-1", "node-1"));
	}

	#[test]
	fn decodes_backend_levels() {
		let acl: AclMatrix =
			serde_json::from_str(r#"{"node-1":{"node-2":2,"node-3":1},"node-2":{"node-1":2}}"#)
				.unwrap();
		assert_eq!(acl.level("node-1", "node-3"), AclLevel::Denied);
		assert_eq!(acl.level("node-3", "node-1"), AclLevel::Unset);
		assert!(acl.can_communicate("node-2", "node-1"));

		let json = serde_json::to_value(&acl).unwrap();
		assert_eq!(json["node-1"]["node-2"], 2);
	}

	#[test]
	fn set_pair_writes_both_directions() {
		let mut acl = AclMatrix::new();
		acl.set_pair("a", "b", AclLevel::Allowed);
		assert!(acl.can_communicate("a", "b"));
		acl.set_pair("b", "a", AclLevel::Denied);
		assert_eq!(acl.level("a", "b"), AclLevel::Denied);
	}
}
