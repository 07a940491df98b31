use super::dtos::CreateDnsDto;
use super::{ApiClient, ApiResult, routes};
use crate::models::DnsEntry;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<DnsEntry>> {
	api.get::<Option<Vec<DnsEntry>>>(routes::DNS)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn create(api: &ApiClient, dto: &CreateDnsDto) -> ApiResult<DnsEntry> {
	api.post(&routes::network_dns(&dto.network), dto).await
}

pub async fn delete(api: &ApiClient, netid: &str, name: &str) -> ApiResult<()> {
	api.delete(&routes::dns_entry(netid, name)).await
}
