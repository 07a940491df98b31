//! Request bodies sent to the API.

use serde::{Deserialize, Serialize};

use crate::models::codec::yes_no;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateEgressNodeDto {
	pub ranges: Vec<String>,
	#[serde(with = "yes_no")]
	pub natenabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateEnrollmentKeyDto {
	pub tags: Vec<String>,
	#[serde(rename = "type")]
	pub kind: u8,
	pub unlimited: bool,
	pub uses_remaining: u32,
	/// Unix seconds, `0` when the key never expires.
	pub expiration: i64,
	pub networks: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateIngressNodeDto {
	#[serde(rename = "extclientdns")]
	pub ext_client_dns: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateExternalClientDto {
	#[serde(rename = "clientid", skip_serializing_if = "String::is_empty")]
	pub client_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateDnsDto {
	pub name: String,
	pub network: String,
	pub address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateUserDto {
	pub username: String,
	pub password: String,
	#[serde(rename = "isadmin")]
	pub is_admin: bool,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub networks: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub groups: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateUserDto {
	pub username: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginDto {
	pub username: String,
	pub password: String,
}

/// `{"Code": 200, "Response": {"AuthToken": ..., "UserName": ...}}`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
	#[serde(rename = "Response", default)]
	pub response: LoginPayload,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginPayload {
	#[serde(rename = "AuthToken", default)]
	pub auth_token: String,
	#[serde(rename = "UserName", default)]
	pub username: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn egress_nat_flag_is_yes_no() {
		let dto = CreateEgressNodeDto {
			ranges: vec!["10.0.0.0/24".into()],
			natenabled: true,
		};
		assert_eq!(
			serde_json::to_value(&dto).unwrap(),
			serde_json::json!({ "ranges": ["10.0.0.0/24"], "natenabled": "yes" })
		);
	}

	#[test]
	fn login_response_unwraps_token() {
		let body = r#"{"Code":200,"Message":"ok","Response":{"AuthToken":"abc","UserName":"admin"}}"#;
		let parsed: LoginResponse = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.response.auth_token, "abc");
		assert_eq!(parsed.response.username, "admin");
	}
}
