use contracts::domain::a002_registered_policy::aggregate::{
    ApproveRequest, RegisteredPolicy, RejectRequest,
};
use contracts::shared::envelope::ApiFailure;

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/policies";

pub async fn fetch_list(client: &ApiClient) -> Result<Vec<RegisteredPolicy>, ApiFailure> {
    client.get(BASE, Identity::Bearer).await
}

pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<RegisteredPolicy, ApiFailure> {
    client.get(&format!("{}/{}", BASE, id), Identity::Bearer).await
}

pub async fn approve(
    client: &ApiClient,
    id: &str,
    request: &ApproveRequest,
) -> Result<RegisteredPolicy, ApiFailure> {
    client
        .post(&format!("{}/{}/approve", BASE, id), request, Identity::Bearer)
        .await
}

pub async fn reject(
    client: &ApiClient,
    id: &str,
    request: &RejectRequest,
) -> Result<RegisteredPolicy, ApiFailure> {
    client
        .post(&format!("{}/{}/reject", BASE, id), request, Identity::Bearer)
        .await
}
