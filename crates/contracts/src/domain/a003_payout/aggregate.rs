use crate::shared::list_query::{FieldValue, ListRecord};
use crate::shared::validation::{FieldErrors, REQUIRED};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    Approved,
    Processing,
    Completed,
    Failed,
}

impl PayoutStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Approved => "approved",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "Chờ duyệt",
            PayoutStatus::Approved => "Đã duyệt",
            PayoutStatus::Processing => "Đang chuyển",
            PayoutStatus::Completed => "Đã chi trả",
            PayoutStatus::Failed => "Thất bại",
        }
    }

    pub fn all() -> Vec<PayoutStatus> {
        vec![
            PayoutStatus::Pending,
            PayoutStatus::Approved,
            PayoutStatus::Processing,
            PayoutStatus::Completed,
            PayoutStatus::Failed,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutReason {
    Claim,
    CancellationCompensation,
}

impl PayoutReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            PayoutReason::Claim => "Bồi thường",
            PayoutReason::CancellationCompensation => "Hoàn phí hủy hợp đồng",
        }
    }
}

/// Disbursement tied to a triggered claim or a cancellation compensation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub policy_id: String,
    pub policy_number: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: PayoutStatus,
    pub reason: PayoutReason,
    /// Trigger parameter that fired, for claim payouts
    #[serde(default)]
    pub trigger_parameter: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transaction_ref: Option<String>,
}

fn default_currency() -> String {
    "VND".to_string()
}

impl Payout {
    pub fn can_approve(&self) -> bool {
        self.status == PayoutStatus::Pending
    }

    pub fn can_mark_paid(&self) -> bool {
        matches!(self.status, PayoutStatus::Approved | PayoutStatus::Processing)
    }
}

pub const SEARCH_FIELDS: &[&str] = &["policy_number", "farmer_name", "transaction_ref"];

impl ListRecord for Payout {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "policy_number" => self.policy_number.as_str().into(),
            "farmer_name" => self.farmer_name.as_str().into(),
            "amount" => self.amount.into(),
            "status" => self.status.code().into(),
            "reason" => self.reason.display_name().into(),
            "trigger_parameter" => self.trigger_parameter.as_deref().into(),
            "transaction_ref" => self.transaction_ref.as_deref().into(),
            "created_at" => self.created_at.into(),
            "paid_at" => self.paid_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

/// Query string of the paginated payout endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PayoutQuery {
    pub fn first(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            status: None,
        }
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self)
            .unwrap_or_else(|_| format!("page={}&limit={}", self.page, self.limit))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkPaidRequest {
    pub transaction_ref: String,
}

impl MarkPaidRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(!self.transaction_ref.trim().is_empty(), "transaction_ref", REQUIRED);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::PagedEnvelope;

    #[test]
    fn test_query_string() {
        let q = PayoutQuery::first(50);
        assert_eq!(q.to_query_string(), "page=1&limit=50");
        let q = PayoutQuery {
            status: Some("pending".into()),
            ..q.next()
        };
        assert_eq!(q.to_query_string(), "page=2&limit=50&status=pending");
    }

    #[test]
    fn test_paged_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "items": [{
                    "id": "po-1", "policy_id": "p-1", "policy_number": "HD-001",
                    "farmer_id": "f-1", "farmer_name": "Trần Thị B", "amount": 12000000,
                    "status": "approved", "reason": "claim", "trigger_parameter": "rainfall",
                    "created_at": "2024-07-01T00:00:00Z"
                }],
                "metadata": { "page": 1, "limit": 20, "total_items": 21, "total_pages": 2 }
            }
        }"#;
        let env: PagedEnvelope<Payout> = serde_json::from_str(json).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data.metadata.total_pages, 2);
        let payout = &data.items[0];
        assert_eq!(payout.currency, "VND");
        assert!(payout.can_mark_paid());
        assert!(!payout.can_approve());
    }
}
