use crate::shared::validation::{
    is_valid_email, is_valid_phone, is_valid_tax_code, FieldErrors, REQUIRED,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStatus {
    Pending,
    Revoked,
    Completed,
}

/// Request to close the partner account; revocable for a limited window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionRequest {
    pub id: String,
    pub status: DeletionStatus,
    pub reason: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub revocable_until: Option<DateTime<Utc>>,
}

impl DeletionRequest {
    pub fn can_revoke(&self, now: DateTime<Utc>) -> bool {
        self.status == DeletionStatus::Pending
            && self.revocable_until.map_or(true, |until| now <= until)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub id: String,
    pub partner_name: String,
    pub tax_code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub deletion_request: Option<DeletionRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub partner_name: String,
    pub tax_code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

impl From<&PartnerProfile> for UpdateProfileDto {
    fn from(p: &PartnerProfile) -> Self {
        Self {
            partner_name: p.partner_name.clone(),
            tax_code: p.tax_code.clone(),
            address: p.address.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            website: p.website.clone(),
            logo_url: p.logo_url.clone(),
        }
    }
}

impl UpdateProfileDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(!self.partner_name.trim().is_empty(), "partner_name", REQUIRED);
        errors.check(
            is_valid_tax_code(&self.tax_code),
            "tax_code",
            "Mã số thuế gồm 10 chữ số (có thể kèm -XXX)",
        );
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            errors.check(is_valid_phone(phone), "phone", "Số điện thoại không hợp lệ");
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            errors.check(is_valid_email(email), "email", "Email không hợp lệ");
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDeletionRequestDto {
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_profile_validation() {
        let mut dto = UpdateProfileDto {
            partner_name: "Bảo hiểm Nông nghiệp Xanh".into(),
            tax_code: "0312345678".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_empty());

        dto.phone = Some("12345".into());
        dto.tax_code = "abc".into();
        let errors = dto.validate();
        assert!(errors.get("phone").is_some());
        assert!(errors.get("tax_code").is_some());
    }

    #[test]
    fn test_deletion_revoke_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let req = DeletionRequest {
            id: "d-1".into(),
            status: DeletionStatus::Pending,
            reason: None,
            requested_at: now - Duration::days(1),
            revocable_until: Some(now + Duration::days(6)),
        };
        assert!(req.can_revoke(now));
        assert!(!req.can_revoke(now + Duration::days(7)));
    }
}
