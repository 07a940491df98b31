use chrono::{Local, NaiveDateTime, TimeZone};

use super::{FormError, required};
use crate::models::EnrollmentKeyKind;
use crate::services::dtos::CreateEnrollmentKeyDto;

/// Formats produced by `<input type="datetime-local">`.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentKeyForm {
	pub name: String,
	pub kind: EnrollmentKeyKind,
	/// Raw text of the uses field.
	pub uses: String,
	/// Raw `datetime-local` value, read in the browser's time zone.
	pub expiration: String,
	pub networks: Vec<String>,
}

impl Default for EnrollmentKeyForm {
	fn default() -> Self {
		Self {
			name: String::new(),
			kind: EnrollmentKeyKind::Unlimited,
			uses: "1".into(),
			expiration: String::new(),
			networks: Vec::new(),
		}
	}
}

impl EnrollmentKeyForm {
	pub fn validate(&self) -> Result<CreateEnrollmentKeyDto, FormError> {
		self.validate_in(&Local)
	}

	pub fn validate_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<CreateEnrollmentKeyDto, FormError> {
		let name = required(&self.name, "name")?;
		let uses_remaining = match self.kind {
			EnrollmentKeyKind::Uses => match self.uses.trim().parse::<u32>() {
				Ok(n) if n >= 1 => n,
				_ => return Err(FormError::UsesBelowOne),
			},
			_ => 0,
		};
		let expiration = match self.kind {
			EnrollmentKeyKind::TimeBound => parse_expiration(&self.expiration, tz)?,
			_ => 0,
		};
		Ok(CreateEnrollmentKeyDto {
			tags: vec![name],
			kind: 0,
			unlimited: self.kind == EnrollmentKeyKind::Unlimited,
			uses_remaining,
			expiration,
			networks: self.networks.clone(),
		})
	}
}

fn parse_expiration<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<i64, FormError> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Err(FormError::MissingExpiration);
	}
	DATETIME_FORMATS
		.iter()
		.find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
		.and_then(|naive| tz.from_local_datetime(&naive).earliest())
		.map(|dt| dt.timestamp())
		.ok_or_else(|| FormError::InvalidExpiration(raw.to_string()))
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;

	fn form(kind: EnrollmentKeyKind) -> EnrollmentKeyForm {
		EnrollmentKeyForm {
			name: "laptops".into(),
			kind,
			networks: vec!["home".into()],
			..Default::default()
		}
	}

	#[test]
	fn unlimited_key() {
		let dto = form(EnrollmentKeyKind::Unlimited).validate_in(&Utc).unwrap();
		assert_eq!(dto.tags, vec!["laptops"]);
		assert!(dto.unlimited);
		assert_eq!((dto.kind, dto.uses_remaining, dto.expiration), (0, 0, 0));
		assert_eq!(dto.networks, vec!["home"]);
	}

	#[test]
	fn uses_must_be_positive() {
		let mut f = form(EnrollmentKeyKind::Uses);
		f.uses = "0".into();
		assert_eq!(f.validate_in(&Utc), Err(FormError::UsesBelowOne));
		f.uses = "five".into();
		assert_eq!(f.validate_in(&Utc), Err(FormError::UsesBelowOne));
		f.uses = " 5 ".into();
		let dto = f.validate_in(&Utc).unwrap();
		assert!(!dto.unlimited);
		assert_eq!(dto.uses_remaining, 5);
	}

	#[test]
	fn time_bound_needs_a_date() {
		let mut f = form(EnrollmentKeyKind::TimeBound);
		assert_eq!(f.validate_in(&Utc), Err(FormError::MissingExpiration));
		f.expiration = "tomorrow".into();
		assert_eq!(
			f.validate_in(&Utc),
			Err(FormError::InvalidExpiration("tomorrow".into()))
		);
		f.expiration = "2030-01-01T00:00".into();
		assert_eq!(f.validate_in(&Utc).unwrap().expiration, 1_893_456_000);
	}

	#[test]
	fn name_is_required() {
		let mut f = form(EnrollmentKeyKind::Unlimited);
		f.name = " ".into();
		assert_eq!(f.validate_in(&Utc), Err(FormError::Missing("name")));
	}
}
