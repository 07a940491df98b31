use super::{ApiClient, ApiResult, routes};
use crate::models::Host;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Host>> {
	api.get::<Option<Vec<Host>>>(routes::HOSTS)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn delete(api: &ApiClient, host_id: &str) -> ApiResult<()> {
	api.delete(&format!("{}/{host_id}", routes::HOSTS)).await
}
