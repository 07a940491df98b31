use super::{ApiClient, ApiResult, routes};
use crate::models::{ServerConfig, ServerStatus};

pub async fn config(api: &ApiClient) -> ApiResult<ServerConfig> {
	api.get(routes::SERVER_CONFIG).await
}

pub async fn status(api: &ApiClient) -> ApiResult<ServerStatus> {
	api.get(routes::SERVER_STATUS).await
}
