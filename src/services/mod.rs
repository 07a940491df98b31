//! REST access to the mesh management API.
//!
//! One module per resource; each call takes an [`ApiClient`] carrying the
//! base URL and the session token.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod dns;
pub mod dtos;
pub mod enrollment_keys;
pub mod ext_clients;
pub mod hosts;
pub mod networks;
pub mod nodes;
pub mod routes;
pub mod server;
pub mod users;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
	#[error("{message} (HTTP {status})")]
	Http { status: u16, message: String },
	#[error("network error: {0}")]
	Transport(String),
	#[error("unexpected response: {0}")]
	Decode(String),
}

/// Error body the server sends along with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
	#[serde(rename = "Message", default)]
	message: String,
}

impl ApiError {
	/// Builds an HTTP error, preferring the server's own message.
	pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
		let message = serde_json::from_str::<ErrorBody>(body)
			.ok()
			.map(|b| b.message)
			.filter(|m| !m.trim().is_empty())
			.or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
			.or_else(|| reason.map(str::to_string))
			.unwrap_or_else(|| format!("request failed with status {status}"));
		Self::Http { status, message }
	}

	/// Text shown to the user in a notification.
	pub fn message(&self) -> String {
		match self {
			Self::Http { message, .. } => message.clone(),
			other => other.to_string(),
		}
	}

	pub fn is_unauthorized(&self) -> bool {
		matches!(self, Self::Http { status: 401, .. })
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
	base_url: String,
	token: Option<String>,
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			token: None,
		}
	}

	pub fn with_token(mut self, token: Option<String>) -> Self {
		self.token = token.filter(|t| !t.is_empty());
		self
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
		let builder = reqwest::Client::new().request(method, self.url(path));
		match &self.token {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		}
	}

	async fn send(builder: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
		let response = builder
			.send()
			.await
			.map_err(|e| ApiError::Transport(e.to_string()))?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(ApiError::from_response(
				status.as_u16(),
				status.canonical_reason(),
				&body,
			));
		}
		Ok(response)
	}

	async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
		response
			.json::<T>()
			.await
			.map_err(|e| ApiError::Decode(e.to_string()))
	}

	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
		Self::decode(Self::send(self.request(reqwest::Method::GET, path)).await?).await
	}

	pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> ApiResult<T> {
		let builder = self.request(reqwest::Method::POST, path).json(body);
		Self::decode(Self::send(builder).await?).await
	}

	/// POST whose response body, if any, is ignored.
	pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> ApiResult<()> {
		let mut builder = self.request(reqwest::Method::POST, path);
		if let Some(body) = body {
			builder = builder.json(body);
		}
		Self::send(builder).await.map(drop)
	}

	pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
		&self,
		path: &str,
		body: &B,
	) -> ApiResult<T> {
		let builder = self.request(reqwest::Method::PUT, path).json(body);
		Self::decode(Self::send(builder).await?).await
	}

	pub async fn delete(&self, path: &str) -> ApiResult<()> {
		Self::send(self.request(reqwest::Method::DELETE, path))
			.await
			.map(drop)
	}

	/// DELETE that answers with a body worth reading.
	pub async fn delete_returning<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
		Self::decode(Self::send(self.request(reqwest::Method::DELETE, path)).await?).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefers_server_message() {
		let err = ApiError::from_response(
			400,
			Some("Bad Request"),
			r#"{"Code":400,"Message":"network already exists"}"#,
		);
		assert_eq!(err.message(), "network already exists");
		assert_eq!(
			err,
			ApiError::Http {
				status: 400,
				message: "network already exists".into()
			}
		);
	}

	#[test]
	fn falls_back_to_body_then_reason() {
		let err = ApiError::from_response(502, Some("Bad Gateway"), "upstream down\n");
		assert_eq!(err.message(), "upstream down");

		let err = ApiError::from_response(500, Some("Internal Server Error"), "");
		assert_eq!(err.message(), "Internal Server Error");

		let err = ApiError::from_response(599, None, r#"{"Code":599,"Message":""}"#);
		assert_eq!(err.message(), r#"{"Code":599,"Message":""}"#);
	}

	#[test]
	fn unauthorized_is_detected() {
		assert!(ApiError::from_response(401, None, "").is_unauthorized());
		assert!(!ApiError::Transport("offline".into()).is_unauthorized());
		assert_eq!(
			ApiError::Transport("offline".into()).message(),
			"network error: offline"
		);
	}

	#[test]
	fn token_is_dropped_when_empty() {
		let client = ApiClient::new("https://api.example.com").with_token(Some(String::new()));
		assert_eq!(client, ApiClient::new("https://api.example.com"));
		assert_eq!(
			client.url("/api/networks"),
			"https://api.example.com/api/networks"
		);
	}
}
