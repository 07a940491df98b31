use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
	pub username: String,
	#[serde(rename = "isadmin")]
	pub is_admin: bool,
	pub networks: Option<Vec<String>>,
	pub groups: Option<Vec<String>>,
}
