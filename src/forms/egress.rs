use super::{FormError, is_valid_cidr, required};
use crate::services::dtos::CreateEgressNodeDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EgressForm {
	pub node_id: String,
	pub nat_enabled: bool,
	pub ranges: Vec<String>,
}

impl EgressForm {
	/// Node to turn into a gateway, and the request body.
	pub fn validate(&self) -> Result<(String, CreateEgressNodeDto), FormError> {
		let node_id = required(&self.node_id, "gateway")?;
		let ranges: Vec<String> = self
			.ranges
			.iter()
			.map(|r| r.trim())
			.filter(|r| !r.is_empty())
			.map(str::to_string)
			.collect();
		if ranges.is_empty() {
			return Err(FormError::NoRanges);
		}
		if let Some(bad) = ranges.iter().find(|r| !is_valid_cidr(r)) {
			return Err(FormError::InvalidCidr(bad.clone()));
		}
		Ok((
			node_id,
			CreateEgressNodeDto {
				ranges,
				natenabled: self.nat_enabled,
			},
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form(ranges: &[&str]) -> EgressForm {
		EgressForm {
			node_id: "n1".into(),
			nat_enabled: true,
			ranges: ranges.iter().map(|r| r.to_string()).collect(),
		}
	}

	#[test]
	fn needs_a_range() {
		assert_eq!(form(&[]).validate(), Err(FormError::NoRanges));
		assert_eq!(form(&["  "]).validate(), Err(FormError::NoRanges));
	}

	#[test]
	fn rejects_bad_ranges() {
		assert_eq!(
			form(&["10.0.0.0/24", "192.168.1.1"]).validate(),
			Err(FormError::InvalidCidr("192.168.1.1".into()))
		);
	}

	#[test]
	fn builds_request() {
		let (node, dto) = form(&[" 10.0.0.0/24 ", "fd00::/64"]).validate().unwrap();
		assert_eq!(node, "n1");
		assert_eq!(dto.ranges, vec!["10.0.0.0/24", "fd00::/64"]);
		assert!(dto.natenabled);
	}

	#[test]
	fn needs_a_gateway() {
		let mut f = form(&["10.0.0.0/24"]);
		f.node_id.clear();
		assert_eq!(f.validate(), Err(FormError::Missing("gateway")));
	}
}
