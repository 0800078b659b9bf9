use contracts::domain::a006_notification::aggregate::Notification;
use contracts::shared::envelope::ApiFailure;

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/notifications";

pub async fn fetch_list(client: &ApiClient) -> Result<Vec<Notification>, ApiFailure> {
    client.get(BASE, Identity::Bearer).await
}

pub async fn mark_read(client: &ApiClient, id: &str) -> Result<(), ApiFailure> {
    client
        .post_unit(&format!("{}/{}/read", BASE, id), &serde_json::json!({}), Identity::Bearer)
        .await
}

pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiFailure> {
    client
        .post_unit(&format!("{}/read-all", BASE), &serde_json::json!({}), Identity::Bearer)
        .await
}
