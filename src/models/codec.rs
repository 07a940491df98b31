//! Serde adapters for the backend's loosely typed fields.

use serde::{Deserialize, Deserializer, Serializer};

/// Booleans that the API sends either as JSON bools or as `"yes"`/`"no"`.
pub mod yes_no {
	use super::*;

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Text(String),
	}

	pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(if *value { "yes" } else { "no" })
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
		Ok(match Option::<Flag>::deserialize(deserializer)? {
			Some(Flag::Bool(b)) => b,
			Some(Flag::Text(t)) => t.eq_ignore_ascii_case("yes") || t.eq_ignore_ascii_case("true"),
			None => false,
		})
	}
}

/// Timestamps that arrive as unix seconds or as RFC 3339 strings.
pub mod unix_time {
	use super::*;

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Stamp {
		Seconds(i64),
		Text(String),
	}

	pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_i64(*value)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
		match Option::<Stamp>::deserialize(deserializer)? {
			Some(Stamp::Seconds(s)) => Ok(s),
			Some(Stamp::Text(t)) => chrono::DateTime::parse_from_rfc3339(&t)
				.map(|dt| dt.timestamp().max(0))
				.map_err(serde::de::Error::custom),
			None => Ok(0),
		}
	}
}

/// `null` decodes to the type's default (the API emits `null` for empty lists).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
