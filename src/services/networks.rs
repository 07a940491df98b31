use super::{ApiClient, ApiResult, routes};
use crate::models::{AclMatrix, Network};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Network>> {
	api.get::<Option<Vec<Network>>>(routes::NETWORKS)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn get(api: &ApiClient, netid: &str) -> ApiResult<Network> {
	api.get(&routes::network(netid)).await
}

pub async fn create(api: &ApiClient, network: &Network) -> ApiResult<Network> {
	api.post(routes::NETWORKS, network).await
}

pub async fn update(api: &ApiClient, network: &Network) -> ApiResult<Network> {
	api.put(&routes::network(&network.netid), network).await
}

pub async fn delete(api: &ApiClient, netid: &str) -> ApiResult<()> {
	api.delete(&routes::network(netid)).await
}

pub async fn acls(api: &ApiClient, netid: &str) -> ApiResult<AclMatrix> {
	api.get::<Option<AclMatrix>>(&routes::network_acls(netid))
		.await
		.map(Option::unwrap_or_default)
}

pub async fn update_acls(api: &ApiClient, netid: &str, acls: &AclMatrix) -> ApiResult<AclMatrix> {
	api.put(&routes::network_acls(netid), acls).await
}
