use contracts::shared::envelope::ApiFailure;
use contracts::system::auth::{SignInRequest, SignInResponse, UserInfo};

use crate::shared::api_utils::{ApiClient, Identity};

/// Sign in with email and password
pub async fn sign_in(email: String, password: String) -> Result<SignInResponse, ApiFailure> {
    let request = SignInRequest { email, password };
    ApiClient::anonymous()
        .post("/api/auth/sign-in", &request, Identity::Bearer)
        .await
}

/// Invalidate the token server-side
pub async fn sign_out(client: &ApiClient) -> Result<(), ApiFailure> {
    client
        .post_unit("/api/auth/sign-out", &serde_json::json!({}), Identity::Bearer)
        .await
}

/// Get current user info
pub async fn current_user(client: &ApiClient) -> Result<UserInfo, ApiFailure> {
    client.get("/api/auth/me", Identity::Bearer).await
}
