use super::dtos::CreateEnrollmentKeyDto;
use super::{ApiClient, ApiResult, routes};
use crate::models::EnrollmentKey;

pub async fn list(api: &ApiClient) -> ApiResult<Vec<EnrollmentKey>> {
	api.get::<Option<Vec<EnrollmentKey>>>(routes::ENROLLMENT_KEYS)
		.await
		.map(Option::unwrap_or_default)
}

pub async fn create(api: &ApiClient, dto: &CreateEnrollmentKeyDto) -> ApiResult<EnrollmentKey> {
	api.post(routes::ENROLLMENT_KEYS, dto).await
}

pub async fn delete(api: &ApiClient, value: &str) -> ApiResult<()> {
	api.delete(&format!("{}/{value}", routes::ENROLLMENT_KEYS))
		.await
}
