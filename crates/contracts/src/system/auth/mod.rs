pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session::{MemorySessionStore, Session, SessionStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: UserInfo,
    /// Absolute expiry; some deployments send `expires_in` seconds instead.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl SignInResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + chrono::Duration::seconds(secs)));
        Session {
            token: self.token,
            user: self.user,
            expires_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerRole {
    PartnerAdmin,
    Underwriter,
    ClaimsOfficer,
    Viewer,
}

impl PartnerRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerRole::PartnerAdmin => "Quản trị đối tác",
            PartnerRole::Underwriter => "Thẩm định viên",
            PartnerRole::ClaimsOfficer => "Cán bộ bồi thường",
            PartnerRole::Viewer => "Chỉ xem",
        }
    }

    pub fn can_review(&self) -> bool {
        matches!(self, PartnerRole::PartnerAdmin | PartnerRole::Underwriter)
    }

    pub fn can_pay(&self) -> bool {
        matches!(self, PartnerRole::PartnerAdmin | PartnerRole::ClaimsOfficer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: PartnerRole,
    pub partner_id: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}
