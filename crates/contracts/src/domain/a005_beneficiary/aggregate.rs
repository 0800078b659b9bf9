use crate::enums::crop_type::CropType;
use crate::shared::list_query::{FieldValue, ListRecord};
use crate::shared::validation::{is_valid_national_id, is_valid_phone, FieldErrors, REQUIRED};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Insured farmer registered by the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    /// CCCD number
    pub national_id: String,
    pub province: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub crop_type: String,
    pub farm_area_ha: f64,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub active_policies: u32,
    pub created_at: DateTime<Utc>,
}

pub const SEARCH_FIELDS: &[&str] = &["full_name", "phone", "national_id", "province"];

impl ListRecord for Beneficiary {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "full_name" => self.full_name.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "national_id" => self.national_id.as_str().into(),
            "province" => self.province.as_str().into(),
            "district" => self.district.as_deref().into(),
            "crop_type" => self.crop_type.as_str().into(),
            "crop_type_label" => CropType::label_for(&self.crop_type).into(),
            "farm_area_ha" => self.farm_area_ha.into(),
            "active_policies" => self.active_policies.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryDto {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub province: String,
    pub district: Option<String>,
    pub address: Option<String>,
    pub crop_type: String,
    pub farm_area_ha: f64,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
}

impl From<Beneficiary> for BeneficiaryDto {
    fn from(b: Beneficiary) -> Self {
        Self {
            id: Some(b.id),
            full_name: b.full_name,
            phone: b.phone,
            national_id: b.national_id,
            province: b.province,
            district: b.district,
            address: b.address,
            crop_type: b.crop_type,
            farm_area_ha: b.farm_area_ha,
            bank_name: b.bank_name,
            bank_account: b.bank_account,
        }
    }
}

impl BeneficiaryDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(!self.full_name.trim().is_empty(), "full_name", REQUIRED);
        errors.check(
            is_valid_phone(&self.phone),
            "phone",
            "Số điện thoại gồm 10 chữ số, bắt đầu bằng 0",
        );
        errors.check(
            is_valid_national_id(&self.national_id),
            "national_id",
            "Số CCCD gồm 12 chữ số",
        );
        errors.check(!self.province.trim().is_empty(), "province", REQUIRED);
        errors.check(
            CropType::from_code(&self.crop_type).is_some(),
            "crop_type",
            "Vui lòng chọn loại cây trồng",
        );
        errors.check(
            self.farm_area_ha > 0.0,
            "farm_area_ha",
            "Diện tích canh tác phải lớn hơn 0",
        );
        let has_bank = self.bank_name.as_deref().map_or(false, |s| !s.trim().is_empty());
        let has_account = self
            .bank_account
            .as_deref()
            .map_or(false, |s| !s.trim().is_empty());
        errors.check(
            has_bank == has_account,
            "bank_account",
            "Cần nhập đủ tên ngân hàng và số tài khoản",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> BeneficiaryDto {
        BeneficiaryDto {
            full_name: "Phạm Thị D".into(),
            phone: "0912345678".into(),
            national_id: "079123456789".into(),
            province: "Đắk Lắk".into(),
            crop_type: "coffee".into(),
            farm_area_ha: 1.2,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_beneficiary() {
        assert!(dto().validate().is_empty());
    }

    #[test]
    fn test_invalid_identifiers() {
        let mut d = dto();
        d.phone = "912345678".into();
        d.national_id = "12345".into();
        d.bank_name = Some("Agribank".into());
        let errors = d.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("phone").is_some());
        assert!(errors.get("national_id").is_some());
        assert!(errors.get("bank_account").is_some());
    }
}
