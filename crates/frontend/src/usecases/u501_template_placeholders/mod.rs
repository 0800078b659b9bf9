mod view;

pub use view::TemplatePlaceholdersPage;

/// Data fields a template placeholder can be bound to: `(tag_id, label)`.
pub const TEMPLATE_FIELDS: &[(&str, &str)] = &[
    ("policy_number", "Số hợp đồng"),
    ("farmer_name", "Họ tên nông hộ"),
    ("national_id", "Số CCCD"),
    ("phone", "Số điện thoại"),
    ("address", "Địa chỉ"),
    ("crop_type", "Loại cây trồng"),
    ("farm_area_ha", "Diện tích (ha)"),
    ("coverage_amount", "Số tiền bảo hiểm"),
    ("premium_amount", "Phí bảo hiểm"),
    ("coverage_start", "Ngày hiệu lực"),
    ("coverage_end", "Ngày hết hạn"),
    ("signed_at", "Ngày ký"),
];

/// Suggests a field for an extracted key, matching case-insensitively on
/// the tag id.
pub fn suggest_field(extracted_key: &str) -> Option<&'static str> {
    let key = extracted_key.trim().to_lowercase().replace([' ', '-'], "_");
    TEMPLATE_FIELDS
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(tag, _)| *tag)
}

pub fn field_label(tag_id: &str) -> &str {
    TEMPLATE_FIELDS
        .iter()
        .find(|(tag, _)| *tag == tag_id)
        .map(|(_, label)| *label)
        .unwrap_or(tag_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_field() {
        assert_eq!(suggest_field("Farmer Name"), Some("farmer_name"));
        assert_eq!(suggest_field("crop-type"), Some("crop_type"));
        assert_eq!(suggest_field("12"), None);
    }

    #[test]
    fn test_field_label_falls_back_to_tag() {
        assert_eq!(field_label("phone"), "Số điện thoại");
        assert_eq!(field_label("custom"), "custom");
    }
}
