//! REST Backend
//!
//! Talks to the todo service's collection endpoint. Every mutating call
//! answers with the full updated collection, which becomes the new state.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;

use crate::domain::{BackendError, ItemRef, TodoCollection};
use super::timeout::with_timeout;
use super::traits::{Removal, TodoBackend};

/// Collection endpoint, relative to the base URL
pub const ITEMS_PATH: &str = "/api/items/";

#[derive(Serialize)]
struct CreateItemBody<'a> {
    content: &'a str,
}

pub struct RestBackend {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeout,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}{}/", self.collection_url(), utf8_percent_encode(id, NON_ALPHANUMERIC))
    }

    /// Send a request and decode the collection in the response body
    ///
    /// One timeout covers the whole exchange, headers and body.
    async fn fetch_collection(&self, request: RequestBuilder) -> Result<TodoCollection, BackendError> {
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, BackendError>((status, body))
        };
        let (status, body) = with_timeout(self.timeout, exchange).await??;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let collection: TodoCollection = serde_json::from_str(&body)?;
        debug!("[RestBackend] Received {} items", collection.len());
        Ok(collection)
    }
}

#[async_trait(?Send)]
impl TodoBackend for RestBackend {
    async fn load(&self) -> Result<TodoCollection, BackendError> {
        self.fetch_collection(self.client.get(self.collection_url())).await
    }

    async fn add(&self, _current: &TodoCollection, content: &str) -> Result<TodoCollection, BackendError> {
        let request = self
            .client
            .post(self.collection_url())
            .json(&CreateItemBody { content });
        self.fetch_collection(request).await
    }

    async fn delete(&self, current: &TodoCollection, target: &ItemRef) -> Result<Removal, BackendError> {
        let id = match target {
            ItemRef::Id(id) => id.as_str(),
            ItemRef::Index(index) => current
                .get(*index)
                .map(|item| item.id.as_str())
                .ok_or_else(|| BackendError::NotFound(target.to_string()))?,
        };

        let request = self.client.delete(self.item_url(id));
        match self.fetch_collection(request).await {
            Ok(collection) => Ok(Removal::Removed(collection)),
            Err(BackendError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(BackendError::NotFound(format!("id {}", id)))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base_url: &str) -> RestBackend {
        RestBackend::with_client(Client::new(), base_url, Duration::from_secs(1))
    }

    #[test]
    fn test_collection_url_trims_trailing_slash() {
        assert_eq!(
            backend("http://localhost:8000/").collection_url(),
            "http://localhost:8000/api/items/"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        let backend = backend("http://localhost:8000");
        assert_eq!(backend.item_url("12"), "http://localhost:8000/api/items/12/");
        assert_eq!(backend.item_url("a/b"), "http://localhost:8000/api/items/a%2Fb/");
    }
}
