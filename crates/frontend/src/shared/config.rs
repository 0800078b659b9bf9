//! Console configuration: the embedded TOML default plus compile-time
//! overrides (`CONSOLE_API_BASE`, `CONSOLE_UPLOAD_KEY`).

use contracts::shared::config::{ApiConfig, ConsoleConfig, ListConfig, UploadConfig};
use once_cell::sync::Lazy;

static CONFIG: Lazy<ConsoleConfig> = Lazy::new(|| {
    let base = match ConsoleConfig::embedded() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{}; falling back to built-in defaults", e);
            fallback()
        }
    };
    base.with_overrides(option_env!("CONSOLE_API_BASE"), option_env!("CONSOLE_UPLOAD_KEY"))
});

fn fallback() -> ConsoleConfig {
    ConsoleConfig {
        api: ApiConfig {
            base_url: String::new(),
            port: 3000,
        },
        upload: UploadConfig {
            endpoint: "https://api.imgbb.com/1/upload".to_string(),
            api_key: String::new(),
            max_bytes: contracts::shared::image_upload::MAX_IMAGE_BYTES,
            timeout_ms: contracts::shared::image_upload::UPLOAD_TIMEOUT_MS,
        },
        list: ListConfig {
            default_page_size: contracts::shared::list_query::DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
        },
    }
}

pub fn config() -> &'static ConsoleConfig {
    &CONFIG
}
