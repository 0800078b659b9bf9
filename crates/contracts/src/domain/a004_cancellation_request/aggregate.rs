use crate::shared::list_query::{FieldValue, ListRecord};
use crate::shared::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationStatus {
    PendingReview,
    Approved,
    Denied,
    Disputed,
    Resolved,
    Revoked,
}

impl CancellationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CancellationStatus::PendingReview => "pending_review",
            CancellationStatus::Approved => "approved",
            CancellationStatus::Denied => "denied",
            CancellationStatus::Disputed => "disputed",
            CancellationStatus::Resolved => "resolved",
            CancellationStatus::Revoked => "revoked",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CancellationStatus::PendingReview => "Chờ xem xét",
            CancellationStatus::Approved => "Đã chấp thuận",
            CancellationStatus::Denied => "Đã từ chối",
            CancellationStatus::Disputed => "Đang tranh chấp",
            CancellationStatus::Resolved => "Đã giải quyết",
            CancellationStatus::Revoked => "Đã thu hồi",
        }
    }

    pub fn all() -> Vec<CancellationStatus> {
        vec![
            CancellationStatus::PendingReview,
            CancellationStatus::Approved,
            CancellationStatus::Denied,
            CancellationStatus::Disputed,
            CancellationStatus::Resolved,
            CancellationStatus::Revoked,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequesterRole {
    Farmer,
    Partner,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Request to terminate an active policy.
///
/// Lifecycle: `pending_review` → `approved` | `denied`; a denied request may
/// be `disputed` by the farmer and then `resolved` by the partner. The
/// requester may `revoke` while the request is pending and the revoke
/// window is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationRequest {
    pub id: String,
    pub policy_id: String,
    pub policy_number: String,
    pub farmer_name: String,
    pub requested_by: String,
    pub requester_role: RequesterRole,
    pub reason: String,
    #[serde(default)]
    pub evidence_urls: Vec<String>,
    pub status: CancellationStatus,
    #[serde(default)]
    pub compensation_amount: Option<f64>,
    #[serde(default)]
    pub review_note: Option<String>,
    #[serde(default)]
    pub dispute_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub revocable_until: Option<DateTime<Utc>>,
}

impl CancellationRequest {
    pub fn can_review(&self) -> bool {
        self.status == CancellationStatus::PendingReview
    }

    pub fn can_resolve(&self) -> bool {
        self.status == CancellationStatus::Disputed
    }

    pub fn can_revoke(&self, now: DateTime<Utc>) -> bool {
        self.status == CancellationStatus::PendingReview
            && self.revocable_until.map_or(false, |until| now <= until)
    }
}

pub const SEARCH_FIELDS: &[&str] = &["policy_number", "farmer_name", "reason"];

impl ListRecord for CancellationRequest {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "policy_number" => self.policy_number.as_str().into(),
            "farmer_name" => self.farmer_name.as_str().into(),
            "reason" => self.reason.as_str().into(),
            "status" => self.status.code().into(),
            "requester_role" => match self.requester_role {
                RequesterRole::Farmer => "farmer".into(),
                RequesterRole::Partner => "partner".into(),
            },
            "compensation_amount" => self.compensation_amount.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCancellationRequest {
    pub policy_id: String,
    pub reason: String,
    #[serde(default)]
    pub evidence_urls: Vec<String>,
}

impl CreateCancellationRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            !self.policy_id.trim().is_empty(),
            "policy_id",
            "Vui lòng chọn hợp đồng",
        );
        errors.check(
            self.reason.trim().chars().count() >= 10,
            "reason",
            "Lý do hủy cần ít nhất 10 ký tự",
        );
        errors
    }
}

/// Partner decision on a pending request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewCancellation {
    pub approve: bool,
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation_amount: Option<f64>,
}

impl ReviewCancellation {
    pub fn approve(compensation_amount: Option<f64>, note: Option<String>) -> Self {
        Self {
            approve: true,
            note,
            compensation_amount,
        }
    }

    pub fn deny(reason: String) -> Self {
        Self {
            approve: false,
            note: Some(reason),
            compensation_amount: None,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.approve {
            errors.check(
                self.compensation_amount.map_or(true, |a| a >= 0.0),
                "compensation_amount",
                "Số tiền hoàn trả không hợp lệ",
            );
        } else {
            errors.check(
                self.note
                    .as_deref()
                    .map_or(false, |n| n.trim().chars().count() >= 10),
                "note",
                "Lý do từ chối cần ít nhất 10 ký tự",
            );
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeOutcome {
    UpholdCancellation,
    ReinstatePolicy,
}

impl DisputeOutcome {
    pub fn display_name(&self) -> &'static str {
        match self {
            DisputeOutcome::UpholdCancellation => "Giữ quyết định hủy",
            DisputeOutcome::ReinstatePolicy => "Khôi phục hợp đồng",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveDispute {
    pub outcome: DisputeOutcome,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn request(
        status: CancellationStatus,
        revocable_until: Option<DateTime<Utc>>,
    ) -> CancellationRequest {
        CancellationRequest {
            id: "c-1".into(),
            policy_id: "p-1".into(),
            policy_number: "HD-001".into(),
            farmer_name: "Lê Văn C".into(),
            requested_by: "u-1".into(),
            requester_role: RequesterRole::Partner,
            reason: "Nông hộ chuyển đổi cây trồng".into(),
            evidence_urls: vec![],
            status,
            compensation_amount: None,
            review_note: None,
            dispute_reason: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            reviewed_at: None,
            revocable_until,
        }
    }

    #[test]
    fn test_revoke_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let open = request(CancellationStatus::PendingReview, Some(now + Duration::hours(1)));
        assert!(open.can_revoke(now));
        assert!(!open.can_revoke(now + Duration::hours(2)));

        let reviewed = request(CancellationStatus::Approved, Some(now + Duration::hours(1)));
        assert!(!reviewed.can_revoke(now));
        assert!(!request(CancellationStatus::PendingReview, None).can_revoke(now));
    }

    #[test]
    fn test_review_validation() {
        assert!(ReviewCancellation::approve(Some(500_000.0), None)
            .validate()
            .is_empty());
        assert!(ReviewCancellation::deny("không".into()).validate().get("note").is_some());
        assert!(ReviewCancellation::deny("Hồ sơ thiếu bằng chứng thiệt hại".into())
            .validate()
            .is_empty());
    }

    #[test]
    fn test_outcome_wire_format() {
        let body = ResolveDispute {
            outcome: DisputeOutcome::ReinstatePolicy,
            note: "ok".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"outcome":"reinstate_policy","note":"ok"}"#
        );
    }
}
