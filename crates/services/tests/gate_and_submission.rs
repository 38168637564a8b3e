use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use quiz_core::model::{Identity, Question};
use quiz_core::time::{fixed_clock, fixed_now};
use services::{LockoutService, SubmissionService};
use storage::{InMemoryStore, StorageError, SubmissionRecord, SubmissionRepository};

fn bank() -> Arc<Vec<Question>> {
    let keys = [2usize, 1, 2];
    Arc::new(
        keys.iter()
            .map(|correct| {
                Question::new(
                    "prompt",
                    vec!["a".into(), "b".into(), "c".into()],
                    *correct,
                )
                .unwrap()
            })
            .collect(),
    )
}

fn identity() -> Identity {
    Identity {
        name: "Ada".into(),
        email: "ada@example.com".into(),
    }
}

struct FailingStore;

#[async_trait]
impl SubmissionRepository for FailingStore {
    async fn append_submission(&self, _record: &SubmissionRecord) -> Result<String, StorageError> {
        Err(StorageError::Connection("store unreachable".into()))
    }

    async fn latest_by_identifier(
        &self,
        _identifier: &str,
    ) -> Result<Option<SubmissionRecord>, StorageError> {
        Err(StorageError::Connection("store unreachable".into()))
    }
}

#[tokio::test]
async fn submission_scores_and_persists_the_record() {
    let store = InMemoryStore::new();
    let service = SubmissionService::new(fixed_clock(), bank(), Arc::new(store.clone()));

    let answers = [Some(2), Some(1), Some(0)];
    let outcome = service
        .submit(&identity(), &answers, "10.0.0.1", false)
        .await;

    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.percentage, 67);
    assert_eq!(outcome.submitted_at, fixed_now());
    assert!(outcome.document_id.is_some());

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].identifier, "10.0.0.1");
    assert_eq!(records[0].total_questions, 3);
    assert_eq!(records[0].score, 2);
}

#[tokio::test]
async fn submission_settles_even_when_the_store_is_down() {
    let service = SubmissionService::new(fixed_clock(), bank(), Arc::new(FailingStore));

    let outcome = service
        .submit(&identity(), &[None, Some(1), None], "10.0.0.1", true)
        .await;

    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.percentage, 33);
    assert_eq!(outcome.document_id, None);
    assert_eq!(outcome.submitted_at, fixed_now());
}

#[tokio::test]
async fn gate_admits_an_unseen_identifier() {
    let gate = LockoutService::new(fixed_clock(), Arc::new(InMemoryStore::new()));
    assert!(!gate.is_locked_out("10.0.0.1", Duration::minutes(30)).await);
}

#[tokio::test]
async fn gate_denies_inside_the_window_and_admits_at_its_edge() {
    let store = InMemoryStore::new();
    store
        .append_submission(&SubmissionRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            score: 2,
            total_questions: 3,
            identifier: "10.0.0.1".into(),
            percentage: 67,
            submitted_at: fixed_now() - Duration::minutes(10),
        })
        .await
        .unwrap();
    let gate = LockoutService::new(fixed_clock(), Arc::new(store.clone()));

    // 10 minutes in: still inside a 30 minute window.
    assert!(gate.is_locked_out("10.0.0.1", Duration::minutes(30)).await);
    // Exactly at the window boundary the gate opens.
    assert!(!gate.is_locked_out("10.0.0.1", Duration::minutes(10)).await);
    // A different identifier is unaffected.
    assert!(!gate.is_locked_out("10.0.0.2", Duration::minutes(30)).await);
}

#[tokio::test]
async fn gate_fails_open_when_the_query_fails() {
    let gate = LockoutService::new(fixed_clock(), Arc::new(FailingStore));
    assert!(!gate.is_locked_out("10.0.0.1", Duration::minutes(30)).await);
}

#[tokio::test]
async fn finished_submission_locks_the_retake() {
    let store = InMemoryStore::new();
    let repo: Arc<dyn SubmissionRepository> = Arc::new(store.clone());
    let submissions = SubmissionService::new(fixed_clock(), bank(), Arc::clone(&repo));
    let gate = LockoutService::new(fixed_clock(), repo);

    assert!(!gate.is_locked_out("10.0.0.1", Duration::minutes(30)).await);
    submissions
        .submit(&identity(), &[Some(2), None, None], "10.0.0.1", false)
        .await;
    assert!(gate.is_locked_out("10.0.0.1", Duration::minutes(30)).await);
}
