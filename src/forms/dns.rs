use super::{FormError, is_valid_ip, required};
use crate::services::dtos::CreateDnsDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DnsForm {
	pub name: String,
	pub address: String,
}

impl DnsForm {
	pub fn validate(&self, network: &str) -> Result<CreateDnsDto, FormError> {
		let name = required(&self.name, "name")?;
		let address = self.address.trim();
		if !is_valid_ip(address) {
			return Err(FormError::InvalidAddress(address.to_string()));
		}
		Ok(CreateDnsDto {
			name,
			network: network.to_string(),
			address: address.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validates_name_and_address() {
		let mut f = DnsForm::default();
		assert_eq!(f.validate("home"), Err(FormError::Missing("name")));
		f.name = "nas".into();
		f.address = "10.0.0.300".into();
		assert_eq!(
			f.validate("home"),
			Err(FormError::InvalidAddress("10.0.0.300".into()))
		);
		f.address = "10.0.0.3".into();
		let dto = f.validate("home").unwrap();
		assert_eq!((dto.name.as_str(), dto.network.as_str()), ("nas", "home"));
	}
}
