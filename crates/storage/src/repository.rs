use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the persistence collaborator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("remote store answered with status {0}")]
    RemoteStatus(u16),
}

/// Persisted shape of a finished submission.
///
/// This is the full document appended to the store and the record the lockout
/// gate reads back; it never carries in-progress session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub score: u32,
    pub total_questions: u32,
    pub identifier: String,
    pub percentage: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Append/query contract over the opaque document store.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Append a submission document, returning its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the document cannot be stored.
    async fn append_submission(&self, record: &SubmissionRecord) -> Result<String, StorageError>;

    /// The most recent submission for an identifier, `None` when the
    /// identifier has never submitted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend/query faults.
    async fn latest_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<SubmissionRecord>, StorageError>;
}

/// In-memory store for tests and offline runs.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in append order.
    #[must_use]
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().map(|guard| guard.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryStore {
    async fn append_submission(&self, record: &SubmissionRecord) -> Result<String, StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(record.clone());
        Ok(Uuid::new_v4().to_string())
    }

    async fn latest_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<SubmissionRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|record| record.identifier == identifier)
            .max_by_key(|record| record.submitted_at)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(identifier: &str, submitted_at: DateTime<Utc>) -> SubmissionRecord {
        SubmissionRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            score: 21,
            total_questions: 30,
            identifier: identifier.into(),
            percentage: 70,
            submitted_at,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn latest_picks_the_most_recent_for_the_identifier() {
        let store = InMemoryStore::new();
        store.append_submission(&record("10.0.0.1", now())).await.unwrap();
        store
            .append_submission(&record("10.0.0.1", now() + Duration::minutes(5)))
            .await
            .unwrap();
        store
            .append_submission(&record("10.0.0.2", now() + Duration::hours(1)))
            .await
            .unwrap();

        let latest = store.latest_by_identifier("10.0.0.1").await.unwrap().unwrap();
        assert_eq!(latest.submitted_at, now() + Duration::minutes(5));
    }

    #[tokio::test]
    async fn unknown_identifier_yields_none() {
        let store = InMemoryStore::new();
        store.append_submission(&record("10.0.0.1", now())).await.unwrap();
        assert!(store.latest_by_identifier("10.0.0.9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_returns_distinct_ids() {
        let store = InMemoryStore::new();
        let a = store.append_submission(&record("a", now())).await.unwrap();
        let b = store.append_submission(&record("a", now())).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.records().len(), 2);
    }
}
