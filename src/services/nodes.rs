use super::dtos::{CreateEgressNodeDto, CreateIngressNodeDto};
use super::{ApiClient, ApiResult, routes};
use crate::models::Node;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Node>> {
	api.get::<Option<Vec<Node>>>(routes::NODES)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn delete(api: &ApiClient, netid: &str, node_id: &str) -> ApiResult<()> {
	api.delete(&routes::node(netid, node_id)).await
}

pub async fn create_egress(
	api: &ApiClient,
	netid: &str,
	node_id: &str,
	dto: &CreateEgressNodeDto,
) -> ApiResult<Node> {
	api.post(&routes::node_action(netid, node_id, "creategateway"), dto)
		.await
}

pub async fn delete_egress(api: &ApiClient, netid: &str, node_id: &str) -> ApiResult<Node> {
	api.delete_returning(&routes::node_action(netid, node_id, "deletegateway"))
		.await
}

pub async fn create_ingress(
	api: &ApiClient,
	netid: &str,
	node_id: &str,
	dto: &CreateIngressNodeDto,
) -> ApiResult<Node> {
	api.post(&routes::node_action(netid, node_id, "createingress"), dto)
		.await
}

pub async fn delete_ingress(api: &ApiClient, netid: &str, node_id: &str) -> ApiResult<Node> {
	api.delete_returning(&routes::node_action(netid, node_id, "deleteingress"))
		.await
}
