//! Frontend Configuration
//!
//! The page has no runtime environment, so settings are baked in at build
//! time from `TODO_*` variables. Unset or unparsable values keep defaults.

use log::LevelFilter;
use todo_store::{BackendKind, StoreConfig};

/// Store configuration from the build environment
pub fn app_config() -> StoreConfig {
    config_from(build_var)
}

/// Console log level from `TODO_LOG`, `info` by default
pub fn log_level() -> LevelFilter {
    build_var("TODO_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn build_var(name: &str) -> Option<&'static str> {
    match name {
        "TODO_BACKEND" => option_env!("TODO_BACKEND"),
        "TODO_API_BASE_URL" => option_env!("TODO_API_BASE_URL"),
        "TODO_STORAGE_KEY" => option_env!("TODO_STORAGE_KEY"),
        "TODO_REQUEST_TIMEOUT_MS" => option_env!("TODO_REQUEST_TIMEOUT_MS"),
        "TODO_LOG" => option_env!("TODO_LOG"),
        _ => None,
    }
}

fn config_from<'a>(var: impl Fn(&str) -> Option<&'a str>) -> StoreConfig {
    let mut config = StoreConfig::default();

    if let Some(backend) = var("TODO_BACKEND") {
        config.backend = BackendKind::from_str(backend);
    }
    if let Some(url) = var("TODO_API_BASE_URL").filter(|url| !url.is_empty()) {
        config.api_base_url = url.to_string();
    }
    if let Some(key) = var("TODO_STORAGE_KEY").filter(|key| !key.is_empty()) {
        config.storage_key = key.to_string();
    }
    if let Some(ms) = var("TODO_REQUEST_TIMEOUT_MS").and_then(|ms| ms.parse().ok()) {
        config.request_timeout_ms = ms;
    }

    config
}
