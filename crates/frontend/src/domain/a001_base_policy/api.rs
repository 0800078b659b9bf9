use contracts::domain::a001_base_policy::aggregate::{BasePolicy, BasePolicyDto};
use contracts::shared::envelope::ApiFailure;

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/base-policies";

pub async fn fetch_list(client: &ApiClient) -> Result<Vec<BasePolicy>, ApiFailure> {
    client.get(BASE, Identity::Bearer).await
}

pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<BasePolicy, ApiFailure> {
    client.get(&format!("{}/{}", BASE, id), Identity::Bearer).await
}

pub async fn create(client: &ApiClient, dto: &BasePolicyDto) -> Result<BasePolicy, ApiFailure> {
    client.post(BASE, dto, Identity::Bearer).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    dto: &BasePolicyDto,
) -> Result<BasePolicy, ApiFailure> {
    client.put(&format!("{}/{}", BASE, id), dto, Identity::Bearer).await
}

/// Archived products stay readable but can no longer be offered.
pub async fn archive(client: &ApiClient, id: &str) -> Result<BasePolicy, ApiFailure> {
    client
        .post(&format!("{}/{}/archive", BASE, id), &serde_json::json!({}), Identity::Bearer)
        .await
}
