//! Store Configuration
//!
//! Which backend to use and how to reach it. Every field has a default so a
//! partial JSON document (or none at all) is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::BackendError;
use crate::repository::{KeyValueStore, LocalBackend, RestBackend, DEFAULT_STORAGE_KEY};
use crate::store::TodoStore;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Persistence backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Browser key-value storage
    #[default]
    Local,
    /// REST service
    Remote,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Remote => "remote",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "rest" => BackendKind::Remote,
            _ => BackendKind::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: BackendKind,
    /// Key the local backend stores the collection under
    pub storage_key: String,
    /// Base URL of the REST service, without the `/api/items/` suffix
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Build a store backed by whatever this configuration selects.
    ///
    /// `storage` is only used by the local backend.
    pub fn build_store<S: KeyValueStore + 'static>(&self, storage: S) -> Result<TodoStore, BackendError> {
        let store = match self.backend {
            BackendKind::Local => TodoStore::new(LocalBackend::with_key(storage, self.storage_key.clone())),
            BackendKind::Remote => TodoStore::new(RestBackend::new(
                self.api_base_url.clone(),
                self.request_timeout(),
            )?),
        };
        log::info!("[Config] Using {} backend", self.backend.as_str());
        Ok(store)
    }
}
