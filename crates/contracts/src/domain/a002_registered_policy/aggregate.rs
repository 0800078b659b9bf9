use crate::enums::crop_type::CropType;
use crate::shared::list_query::{FieldValue, ListRecord};
use crate::shared::validation::FieldErrors;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    PendingReview,
    Active,
    Rejected,
    Cancelled,
    Expired,
}

impl PolicyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PolicyStatus::PendingReview => "pending_review",
            PolicyStatus::Active => "active",
            PolicyStatus::Rejected => "rejected",
            PolicyStatus::Cancelled => "cancelled",
            PolicyStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PolicyStatus::PendingReview => "Chờ thẩm định",
            PolicyStatus::Active => "Đang hiệu lực",
            PolicyStatus::Rejected => "Từ chối",
            PolicyStatus::Cancelled => "Đã hủy",
            PolicyStatus::Expired => "Hết hạn",
        }
    }

    pub fn all() -> Vec<PolicyStatus> {
        vec![
            PolicyStatus::PendingReview,
            PolicyStatus::Active,
            PolicyStatus::Rejected,
            PolicyStatus::Cancelled,
            PolicyStatus::Expired,
        ]
    }

    /// Only applications still waiting for underwriting can be decided.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, PolicyStatus::PendingReview)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Base policy issued to a specific farmer and farm (an underwriting
/// application until it is approved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredPolicy {
    pub id: String,
    pub policy_number: String,
    pub base_policy_id: String,
    pub product_name: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub farm_id: String,
    pub farm_name: String,
    pub province: String,
    pub crop_type: String,
    pub area_ha: f64,
    pub sum_insured: f64,
    pub premium_amount: f64,
    pub status: PolicyStatus,
    pub coverage_start: Option<NaiveDate>,
    pub coverage_end: Option<NaiveDate>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_note: Option<String>,
}

pub const SEARCH_FIELDS: &[&str] = &["policy_number", "farmer_name", "farm_name", "province"];

impl ListRecord for RegisteredPolicy {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "policy_number" => self.policy_number.as_str().into(),
            "product_name" => self.product_name.as_str().into(),
            "farmer_name" => self.farmer_name.as_str().into(),
            "farm_name" => self.farm_name.as_str().into(),
            "province" => self.province.as_str().into(),
            "crop_type" => self.crop_type.as_str().into(),
            "crop_type_label" => CropType::label_for(&self.crop_type).into(),
            "area_ha" => self.area_ha.into(),
            "sum_insured" => self.sum_insured.into(),
            "premium_amount" => self.premium_amount.into(),
            "status" => self.status.code().into(),
            "coverage_start" => self.coverage_start.into(),
            "submitted_at" => self.submitted_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

// ============================================================================
// Review commands
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

impl RejectRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            self.reason.trim().chars().count() >= 10,
            "reason",
            "Lý do từ chối cần ít nhất 10 ký tự",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "id": "p-1", "policy_number": "HD-2024-001", "base_policy_id": "bp-1",
            "product_name": "Lúa Hè Thu", "farmer_id": "f-1", "farmer_name": "Nguyễn Văn A",
            "farm_id": "farm-1", "farm_name": "Ruộng Đồng Tháp", "province": "Đồng Tháp",
            "crop_type": "rice", "area_ha": 2.5, "sum_insured": 50000000,
            "premium_amount": 1750000, "status": "pending_review",
            "coverage_start": "2024-05-01", "coverage_end": null,
            "submitted_at": "2024-04-20T08:00:00Z"
        }"#;
        let p: RegisteredPolicy = serde_json::from_str(json).unwrap();
        assert!(p.status.is_reviewable());
        assert_eq!(p.field("crop_type_label").display(), "Lúa");
        assert_eq!(
            p.submitted_at,
            Utc.with_ymd_and_hms(2024, 4, 20, 8, 0, 0).unwrap()
        );
        assert_eq!(p.field("coverage_end"), FieldValue::Empty);
    }

    #[test]
    fn test_reject_needs_reason() {
        assert!(!RejectRequest { reason: "ngắn".into() }.validate().is_empty());
        assert!(RejectRequest {
            reason: "Diện tích khai báo không khớp".into()
        }
        .validate()
        .is_empty());
    }
}
