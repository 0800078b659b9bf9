use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute backend origin. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    #[serde(default = "default_upload_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_port() -> u16 {
    3000
}

fn default_max_bytes() -> u64 {
    32 * 1024 * 1024
}

fn default_upload_timeout_ms() -> u32 {
    crate::shared::image_upload::UPLOAD_TIMEOUT_MS
}

fn default_page_size() -> usize {
    20
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[upload]
endpoint = "https://api.imgbb.com/1/upload"
api_key = ""
max_bytes = 33554432
timeout_ms = 30000

[list]
default_page_size = 20
page_size_options = [10, 20, 50, 100]
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid console configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConsoleConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Applies build-time overrides; empty values are ignored.
    pub fn with_overrides(mut self, api_base: Option<&str>, upload_key: Option<&str>) -> Self {
        if let Some(base) = api_base.filter(|s| !s.trim().is_empty()) {
            self.api.base_url = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = upload_key.filter(|s| !s.trim().is_empty()) {
            self.upload.api_key = key.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::embedded();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.upload.max_bytes, 32 * 1024 * 1024);
        assert_eq!(config.upload.timeout_ms, 30_000);
        assert_eq!(config.list.default_page_size, 20);
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = ConsoleConfig::embedded()
            .unwrap()
            .with_overrides(Some("https://api.example.vn/"), Some(""));
        assert_eq!(config.api.base_url, "https://api.example.vn");
        assert_eq!(config.upload.api_key, "");
    }

    #[test]
    fn test_upload_timeout_defaults_when_omitted() {
        let base = "[api]\n[list]\n[upload]\nendpoint = \"https://img.example\"\n";
        let config = ConsoleConfig::from_toml(base).unwrap();
        assert_eq!(config.upload.timeout_ms, 30_000);

        let config = ConsoleConfig::from_toml(&format!("{base}timeout_ms = 5000\n")).unwrap();
        assert_eq!(config.upload.timeout_ms, 5000);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(ConsoleConfig::from_toml("[api]\nport = 1").is_err());
    }
}
