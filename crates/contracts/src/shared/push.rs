//! Payload delivered to the push service worker.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushAction {
    pub action: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub require_interaction: bool,
    #[serde(default)]
    pub silent: bool,
    #[serde(default)]
    pub actions: Vec<PushAction>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub renotify: bool,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl PushPayload {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// URL carried in `data.url`, if any.
    pub fn url(&self) -> Option<&str> {
        self.data
            .get("url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Where a click on the notification body navigates. Clicks on an action
/// button (non-empty `action`) are handled by the action itself.
pub fn click_target_url(payload: &PushPayload, action: Option<&str>) -> Option<String> {
    match action.filter(|a| !a.is_empty()) {
        Some(_) => None,
        None => Some(payload.url().unwrap_or("/").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let raw = r#"{
            "title": "Yêu cầu hủy mới",
            "body": "Hợp đồng HD-001 có yêu cầu hủy",
            "requireInteraction": true,
            "data": { "url": "/cancellations/42" },
            "actions": [{ "action": "open", "title": "Xem" }],
            "timestamp": 1717000000000
        }"#;
        let payload = PushPayload::parse(raw).unwrap();
        assert!(payload.require_interaction);
        assert_eq!(payload.actions.len(), 1);
        assert_eq!(
            click_target_url(&payload, None).as_deref(),
            Some("/cancellations/42")
        );
        assert_eq!(click_target_url(&payload, Some("open")), None);
    }

    #[test]
    fn test_click_defaults_to_root() {
        let payload = PushPayload::parse(r#"{"title":"x"}"#).unwrap();
        assert_eq!(click_target_url(&payload, Some("")).as_deref(), Some("/"));
    }
}
