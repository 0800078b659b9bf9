use crate::shared::list_query::{FieldValue, ListRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Event kind, e.g. `policy_submitted`, `cancellation_requested`, `payout_failed`
    #[serde(default, alias = "type")]
    pub kind: String,
    #[serde(default, alias = "is_read")]
    pub read: bool,
    /// In-app route to open on click
    #[serde(default)]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub const SEARCH_FIELDS: &[&str] = &["title", "body"];

impl ListRecord for Notification {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => self.title.as_str().into(),
            "body" => self.body.as_str().into(),
            "kind" => self.kind.as_str().into(),
            "read" => self.read.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_and_unread() {
        let items: Vec<Notification> = serde_json::from_str(
            r#"[
                {"id":"n1","title":"Hồ sơ mới","type":"policy_submitted","is_read":false,"created_at":"2024-06-01T00:00:00Z"},
                {"id":"n2","title":"Đã chi trả","kind":"payout_completed","read":true,"created_at":"2024-06-02T00:00:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(items[0].kind, "policy_submitted");
        assert_eq!(unread_count(&items), 1);
        assert_eq!(items[1].field("read"), FieldValue::Bool(true));
    }
}
