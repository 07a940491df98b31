//! Sign in and the persisted session token.

use log::warn;

use super::dtos::{LoginDto, LoginResponse};
use super::{ApiClient, ApiError, ApiResult, routes};

const TOKEN_KEY: &str = "mesh-dashboard-token";
const USERNAME_KEY: &str = "mesh-dashboard-username";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
	pub token: String,
	pub username: String,
}

pub async fn login(api: &ApiClient, dto: &LoginDto) -> ApiResult<Session> {
	let response: LoginResponse = api.post(routes::LOGIN, dto).await?;
	if response.response.auth_token.is_empty() {
		return Err(ApiError::Decode("no auth token in response".into()));
	}
	Ok(Session {
		token: response.response.auth_token,
		username: response.response.username,
	})
}

fn storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_session() -> Option<Session> {
	let storage = storage()?;
	let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
	let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
	Some(Session { token, username })
}

pub fn save_session(session: &Session) {
	let Some(storage) = storage() else {
		warn!("local storage unavailable, session not persisted");
		return;
	};
	if storage.set_item(TOKEN_KEY, &session.token).is_err()
		|| storage.set_item(USERNAME_KEY, &session.username).is_err()
	{
		warn!("failed to persist session");
	}
}

pub fn clear_session() {
	if let Some(storage) = storage() {
		let _ = storage.remove_item(TOKEN_KEY);
		let _ = storage.remove_item(USERNAME_KEY);
	}
}
