//! Reqwest client for the remote document store.
//!
//! The store is treated as an opaque append + latest-query service: the app
//! never reads submissions back except for the lockout gate's latest-record
//! lookup.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;

use crate::repository::{StorageError, SubmissionRecord, SubmissionRepository};

#[derive(Clone, Debug)]
pub struct RemoteStoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl RemoteStoreConfig {
    /// Read the store endpoint from the environment. Returns `None` when no
    /// endpoint is configured, in which case the app falls back to the
    /// in-memory store.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("QUIZ_STORE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let api_key = env::var("QUIZ_STORE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Some(Self { base_url, api_key })
    }
}

/// Document-store client speaking plain JSON over HTTP.
#[derive(Clone)]
pub struct RemoteSubmissionStore {
    client: Client,
    config: RemoteStoreConfig,
}

impl RemoteSubmissionStore {
    #[must_use]
    pub fn new(config: RemoteStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    id: String,
}

#[async_trait]
impl SubmissionRepository for RemoteSubmissionStore {
    async fn append_submission(&self, record: &SubmissionRecord) -> Result<String, StorageError> {
        let response = self
            .authorize(self.client.post(self.endpoint("submissions")))
            .json(record)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::RemoteStatus(response.status().as_u16()));
        }

        let body: AppendResponse = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        tracing::debug!(id = %body.id, "submission appended to remote store");
        Ok(body.id)
    }

    async fn latest_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<SubmissionRecord>, StorageError> {
        let response = self
            .authorize(self.client.get(self.endpoint("submissions/latest")))
            .query(&[("identifier", identifier)])
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StorageError::RemoteStatus(response.status().as_u16()));
        }

        let record: SubmissionRecord = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(record))
    }
}
