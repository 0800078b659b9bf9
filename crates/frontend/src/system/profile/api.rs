//! Partner profile endpoints identify the acting user with `X-User-ID`.

use contracts::shared::envelope::ApiFailure;
use contracts::system::profile::{
    CreateDeletionRequestDto, DeletionRequest, PartnerProfile, UpdateProfileDto,
};

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/partner/profile";

pub async fn fetch_profile(client: &ApiClient) -> Result<PartnerProfile, ApiFailure> {
    client.get(BASE, Identity::BearerWithUser).await
}

pub async fn update_profile(
    client: &ApiClient,
    dto: &UpdateProfileDto,
) -> Result<PartnerProfile, ApiFailure> {
    client.put(BASE, dto, Identity::BearerWithUser).await
}

pub async fn request_deletion(
    client: &ApiClient,
    dto: &CreateDeletionRequestDto,
) -> Result<DeletionRequest, ApiFailure> {
    client
        .post(&format!("{}/deletion-request", BASE), dto, Identity::BearerWithUser)
        .await
}

pub async fn revoke_deletion(client: &ApiClient) -> Result<(), ApiFailure> {
    client
        .delete(&format!("{}/deletion-request", BASE), Identity::BearerWithUser)
        .await
}
