use super::{FormError, required};
use crate::services::dtos::CreateExternalClientDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientForm {
	pub gateway_id: String,
	/// Left empty to let the server pick a name.
	pub client_id: String,
}

impl ClientForm {
	pub fn validate(&self) -> Result<(String, CreateExternalClientDto), FormError> {
		let gateway = required(&self.gateway_id, "gateway")?;
		Ok((
			gateway,
			CreateExternalClientDto {
				client_id: self.client_id.trim().to_string(),
			},
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gateway_required_client_id_optional() {
		let mut f = ClientForm::default();
		assert_eq!(f.validate(), Err(FormError::Missing("gateway")));
		f.gateway_id = "n1".into();
		let (gw, dto) = f.validate().unwrap();
		assert_eq!(gw, "n1");
		assert!(dto.client_id.is_empty());
	}
}
