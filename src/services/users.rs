use std::collections::HashMap;

use super::dtos::{CreateUserDto, UpdateUserDto};
use super::{ApiClient, ApiResult, routes};
use crate::models::User;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<User>> {
	api.get::<Option<Vec<User>>>(routes::USERS)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn get(api: &ApiClient, username: &str) -> ApiResult<User> {
	api.get(&format!("{}/{username}", routes::USERS)).await
}

pub async fn server_has_admin(api: &ApiClient) -> ApiResult<bool> {
	api.get(&format!("{}/hasadmin", routes::USERS_ADMIN)).await
}

pub async fn create_admin(api: &ApiClient, dto: &CreateUserDto) -> ApiResult<User> {
	api.post(&format!("{}/createadmin", routes::USERS_ADMIN), dto)
		.await
}

pub async fn create(api: &ApiClient, dto: &CreateUserDto) -> ApiResult<User> {
	api.post(&format!("{}/{}", routes::USERS, dto.username), dto)
		.await
}

pub async fn update(api: &ApiClient, username: &str, dto: &UpdateUserDto) -> ApiResult<User> {
	api.put(&format!("{}/{username}", routes::USERS), dto).await
}

pub async fn delete(api: &ApiClient, username: &str) -> ApiResult<()> {
	api.delete(&format!("{}/{username}", routes::USERS)).await
}

/// Group names; the API answers with an object keyed by name.
pub async fn groups(api: &ApiClient) -> ApiResult<Vec<String>> {
	let groups = api
		.get::<Option<HashMap<String, serde_json::Value>>>(routes::USER_GROUPS)
		.await?
		.unwrap_or_default();
	let mut names: Vec<String> = groups.into_keys().collect();
	names.sort();
	Ok(names)
}

pub async fn create_group(api: &ApiClient, name: &str) -> ApiResult<()> {
	api.post_unit::<()>(&format!("{}/{name}", routes::USER_GROUPS), None)
		.await
}

pub async fn delete_group(api: &ApiClient, name: &str) -> ApiResult<()> {
	api.delete(&format!("{}/{name}", routes::USER_GROUPS)).await
}
