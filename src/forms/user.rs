use super::{FormError, required};
use crate::services::dtos::CreateUserDto;

pub const MIN_PASSWORD_LEN: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
	pub username: String,
	pub password: String,
	pub confirm_password: String,
	pub is_admin: bool,
}

impl UserForm {
	pub fn validate(&self) -> Result<CreateUserDto, FormError> {
		let username = required(&self.username, "username")?;
		if self.password.chars().count() < MIN_PASSWORD_LEN {
			return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
		}
		if self.password != self.confirm_password {
			return Err(FormError::PasswordMismatch);
		}
		Ok(CreateUserDto {
			username,
			password: self.password.clone(),
			is_admin: self.is_admin,
			..Default::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn password_rules() {
		let mut f = UserForm {
			username: "alice".into(),
			password: "abcd".into(),
			confirm_password: "abcd".into(),
			is_admin: false,
		};
		assert_eq!(f.validate(), Err(FormError::PasswordTooShort(5)));
		f.password = "abcde".into();
		assert_eq!(f.validate(), Err(FormError::PasswordMismatch));
		f.confirm_password = "abcde".into();
		assert_eq!(f.validate().unwrap().username, "alice");
	}
}
