use crate::enums::crop_type::CropType;
use crate::shared::list_query::{FieldValue, ListRecord};
use crate::shared::validation::{FieldErrors, REQUIRED};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePolicyStatus {
    Draft,
    Active,
    Archived,
}

impl BasePolicyStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BasePolicyStatus::Draft => "draft",
            BasePolicyStatus::Active => "active",
            BasePolicyStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BasePolicyStatus::Draft => "Bản nháp",
            BasePolicyStatus::Active => "Đang áp dụng",
            BasePolicyStatus::Archived => "Đã lưu trữ",
        }
    }
}

// ============================================================================
// Trigger conditions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdOperator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
}

impl ThresholdOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ThresholdOperator::Lt => "<",
            ThresholdOperator::Lte => "<=",
            ThresholdOperator::Gt => ">",
            ThresholdOperator::Gte => ">=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "<" => Some(ThresholdOperator::Lt),
            "<=" => Some(ThresholdOperator::Lte),
            ">" => Some(ThresholdOperator::Gt),
            ">=" => Some(ThresholdOperator::Gte),
            _ => None,
        }
    }

    pub fn is_breached(&self, observed: f64, threshold: f64) -> bool {
        match self {
            ThresholdOperator::Lt => observed < threshold,
            ThresholdOperator::Lte => observed <= threshold,
            ThresholdOperator::Gt => observed > threshold,
            ThresholdOperator::Gte => observed >= threshold,
        }
    }
}

/// Parameterised rule whose breach starts an automatic claim evaluation,
/// e.g. cumulative rainfall over 30 days below 50 mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerCondition {
    /// Monitored parameter code (`rainfall`, `temperature`, `ndvi`, ...)
    pub parameter: String,
    pub operator: ThresholdOperator,
    pub threshold: f64,
    pub unit: String,
    /// Aggregation window in days
    pub window_days: u32,
    /// Share of the sum insured paid out when breached, 0..=100
    pub payout_percent: f64,
}

impl TriggerCondition {
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {} / {} ngày → chi trả {}%",
            self.parameter,
            self.operator.symbol(),
            self.threshold,
            self.unit,
            self.window_days,
            self.payout_percent
        )
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Insurance product template configured by the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePolicy {
    pub id: String,
    pub product_code: String,
    pub product_name: String,
    pub crop_type: String,
    pub description: Option<String>,
    /// Premium as a percentage of the sum insured
    pub premium_rate: f64,
    /// Maximum sum insured per hectare, VND
    pub coverage_per_ha: f64,
    pub coverage_months: u32,
    pub status: BasePolicyStatus,
    #[serde(default)]
    pub trigger_conditions: Vec<TriggerCondition>,
    /// Hosted PDF template with placeholders
    pub template_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub const SEARCH_FIELDS: &[&str] = &["product_code", "product_name", "crop_type_label"];

impl ListRecord for BasePolicy {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "product_code" => self.product_code.as_str().into(),
            "product_name" => self.product_name.as_str().into(),
            "crop_type" => self.crop_type.as_str().into(),
            "crop_type_label" => CropType::label_for(&self.crop_type).into(),
            "premium_rate" => self.premium_rate.into(),
            "coverage_per_ha" => self.coverage_per_ha.into(),
            "coverage_months" => self.coverage_months.into(),
            "status" => self.status.code().into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

// ============================================================================
// Form DTO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasePolicyDto {
    pub id: Option<String>,
    pub product_code: String,
    pub product_name: String,
    pub crop_type: String,
    pub description: Option<String>,
    pub premium_rate: f64,
    pub coverage_per_ha: f64,
    pub coverage_months: u32,
    pub trigger_conditions: Vec<TriggerCondition>,
    pub template_url: Option<String>,
}

impl From<BasePolicy> for BasePolicyDto {
    fn from(p: BasePolicy) -> Self {
        Self {
            id: Some(p.id),
            product_code: p.product_code,
            product_name: p.product_name,
            crop_type: p.crop_type,
            description: p.description,
            premium_rate: p.premium_rate,
            coverage_per_ha: p.coverage_per_ha,
            coverage_months: p.coverage_months,
            trigger_conditions: p.trigger_conditions,
            template_url: p.template_url,
        }
    }
}

impl BasePolicyDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(!self.product_code.trim().is_empty(), "product_code", REQUIRED);
        errors.check(!self.product_name.trim().is_empty(), "product_name", REQUIRED);
        errors.check(
            CropType::from_code(&self.crop_type).is_some(),
            "crop_type",
            "Vui lòng chọn loại cây trồng",
        );
        errors.check(
            self.premium_rate > 0.0 && self.premium_rate <= 100.0,
            "premium_rate",
            "Tỷ lệ phí phải lớn hơn 0 và không vượt quá 100%",
        );
        errors.check(
            self.coverage_per_ha > 0.0,
            "coverage_per_ha",
            "Số tiền bảo hiểm phải lớn hơn 0",
        );
        errors.check(
            (1..=36).contains(&self.coverage_months),
            "coverage_months",
            "Thời hạn bảo hiểm từ 1 đến 36 tháng",
        );
        errors.check(
            !self.trigger_conditions.is_empty(),
            "trigger_conditions",
            "Cần ít nhất một điều kiện kích hoạt",
        );
        errors.check(
            self.trigger_conditions.iter().all(|t| {
                !t.parameter.trim().is_empty()
                    && t.window_days > 0
                    && t.payout_percent > 0.0
                    && t.payout_percent <= 100.0
            }),
            "trigger_conditions",
            "Điều kiện kích hoạt không hợp lệ",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rainfall() -> TriggerCondition {
        TriggerCondition {
            parameter: "rainfall".into(),
            operator: ThresholdOperator::Lt,
            threshold: 50.0,
            unit: "mm".into(),
            window_days: 30,
            payout_percent: 40.0,
        }
    }

    #[test]
    fn test_operator_wire_format() {
        let json = serde_json::to_string(&rainfall()).unwrap();
        assert!(json.contains(r#""operator":"<""#));
        assert!(ThresholdOperator::Lt.is_breached(49.9, 50.0));
        assert!(!ThresholdOperator::Lt.is_breached(50.0, 50.0));
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = BasePolicyDto {
            product_code: "LUA-HE-THU".into(),
            product_name: "Bảo hiểm lúa vụ Hè Thu".into(),
            crop_type: "rice".into(),
            premium_rate: 3.5,
            coverage_per_ha: 20_000_000.0,
            coverage_months: 4,
            trigger_conditions: vec![rainfall()],
            ..Default::default()
        };
        assert!(dto.validate().is_empty());

        dto.crop_type = "tea".into();
        dto.trigger_conditions.clear();
        let errors = dto.validate();
        assert!(errors.get("crop_type").is_some());
        assert!(errors.get("trigger_conditions").is_some());
    }
}
