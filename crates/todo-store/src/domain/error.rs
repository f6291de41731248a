//! Domain Errors
//!
//! Failures surfaced to callers of the todo store.

use std::time::Duration;
use thiserror::Error;

/// Failure talking to a persistence backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Adding an item failed; the collection is unchanged
#[derive(Error, Debug)]
pub enum CreationError {
    #[error("Todo content must not be empty")]
    EmptyContent,

    #[error("Failed to save new todo: {0}")]
    Persistence(#[source] BackendError),
}

/// Deleting an item failed; the collection is unchanged
#[derive(Error, Debug)]
pub enum DeletionError {
    #[error("No todo matches {0}")]
    NotFound(String),

    #[error("Failed to save deletion: {0}")]
    Persistence(#[source] BackendError),
}
