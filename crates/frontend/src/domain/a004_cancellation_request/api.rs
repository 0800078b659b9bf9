//! Cancellation endpoints identify the acting user with `X-User-ID`.

use contracts::domain::a004_cancellation_request::aggregate::{
    CancellationRequest, CreateCancellationRequest, ResolveDispute, ReviewCancellation,
};
use contracts::shared::envelope::ApiFailure;

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/cancellations";

pub async fn fetch_list(client: &ApiClient) -> Result<Vec<CancellationRequest>, ApiFailure> {
    client.get(BASE, Identity::BearerWithUser).await
}

pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<CancellationRequest, ApiFailure> {
    client
        .get(&format!("{}/{}", BASE, id), Identity::BearerWithUser)
        .await
}

pub async fn create(
    client: &ApiClient,
    request: &CreateCancellationRequest,
) -> Result<CancellationRequest, ApiFailure> {
    client.post(BASE, request, Identity::BearerWithUser).await
}

pub async fn review(
    client: &ApiClient,
    id: &str,
    review: &ReviewCancellation,
) -> Result<CancellationRequest, ApiFailure> {
    client
        .post(&format!("{}/{}/review", BASE, id), review, Identity::BearerWithUser)
        .await
}

pub async fn resolve(
    client: &ApiClient,
    id: &str,
    resolution: &ResolveDispute,
) -> Result<CancellationRequest, ApiFailure> {
    client
        .post(&format!("{}/{}/resolve", BASE, id), resolution, Identity::BearerWithUser)
        .await
}

/// Withdraws a request the partner filed, while still inside the revoke window.
pub async fn revoke(client: &ApiClient, id: &str) -> Result<(), ApiFailure> {
    client
        .post_unit(
            &format!("{}/{}/revoke", BASE, id),
            &serde_json::json!({}),
            Identity::BearerWithUser,
        )
        .await
}
