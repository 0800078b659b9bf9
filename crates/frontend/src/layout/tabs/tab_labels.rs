//! Titles of tabs, keyed the same way as the registry.
//!
//! Detail tabs use `<entity>_detail_<id>`; `<entity>_detail_new` is the
//! create form.

/// List-level entities that have detail tabs, with their element name.
const DETAIL_ENTITIES: &[(&str, &str)] = &[
    ("a001_base_policy", "Sản phẩm"),
    ("a002_registered_policy", "Hợp đồng"),
    ("a003_payout", "Chi trả"),
    ("a004_cancellation_request", "Yêu cầu hủy"),
    ("a005_beneficiary", "Nông hộ"),
];

pub fn list_label(key: &str) -> Option<&'static str> {
    let label = match key {
        "a001_base_policy" => "Sản phẩm bảo hiểm",
        "a002_registered_policy" => "Hồ sơ thẩm định",
        "a003_payout" => "Chi trả bồi thường",
        "a004_cancellation_request" => "Yêu cầu hủy hợp đồng",
        "a005_beneficiary" => "Nông hộ thụ hưởng",
        "a006_notification" => "Thông báo",
        "u501_template_placeholders" => "Mẫu hợp đồng PDF",
        "sys_profile" => "Hồ sơ đối tác",
        _ => return None,
    };
    Some(label)
}

pub fn detail_tab_key(entity: &str, id: Option<&str>) -> String {
    format!("{}_detail_{}", entity, id.unwrap_or("new"))
}

/// «<entity> · <identifier>», or «<entity> mới» for the create form.
pub fn detail_tab_label(element: &str, identifier: Option<&str>) -> String {
    match identifier.filter(|s| !s.is_empty()) {
        Some(ident) => format!("{} · {}", element, ident),
        None => format!("{} mới", element),
    }
}

/// Title for any tab key; unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(label) = list_label(key) {
        return label.to_string();
    }
    for (entity, element) in DETAIL_ENTITIES {
        if let Some(rest) = key.strip_prefix(entity).and_then(|r| r.strip_prefix("_detail_")) {
            let ident = (rest != "new").then_some(rest);
            return detail_tab_label(element, ident);
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys() {
        assert_eq!(tab_label_for_key("a003_payout"), "Chi trả bồi thường");
        assert_eq!(tab_label_for_key("unknown_key"), "unknown_key");
    }

    #[test]
    fn test_detail_keys() {
        let key = detail_tab_key("a005_beneficiary", Some("b-17"));
        assert_eq!(key, "a005_beneficiary_detail_b-17");
        assert_eq!(tab_label_for_key(&key), "Nông hộ · b-17");
        assert_eq!(
            tab_label_for_key(&detail_tab_key("a001_base_policy", None)),
            "Sản phẩm mới"
        );
    }
}
