use super::dtos::CreateExternalClientDto;
use super::{ApiClient, ApiResult, routes};
use crate::models::ExternalClient;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<ExternalClient>> {
	api.get::<Option<Vec<ExternalClient>>>(routes::EXTERNAL_CLIENTS)
		.await
		.map(Option::unwrap_or_default)
}

/// Creates a client behind the ingress gateway `gateway_id`.
pub async fn create(
	api: &ApiClient,
	netid: &str,
	gateway_id: &str,
	dto: &CreateExternalClientDto,
) -> ApiResult<()> {
	api.post_unit(&routes::external_client(netid, gateway_id), Some(dto))
		.await
}

pub async fn delete(api: &ApiClient, netid: &str, client_id: &str) -> ApiResult<()> {
	api.delete(&routes::external_client(netid, client_id)).await
}
