use chrono::{DateTime, Utc};
use std::sync::Arc;

use quiz_core::model::{Identity, Question};
use quiz_core::scoring::{compute_score, percentage};
use storage::{SubmissionRecord, SubmissionRepository};

use crate::Clock;

/// Outcome of a settled submission.
///
/// `document_id` is `None` when the append failed; the session still finishes
/// with the locally computed score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedSubmission {
    pub score: u32,
    pub percentage: u32,
    pub submitted_at: DateTime<Utc>,
    pub document_id: Option<String>,
}

/// Scores the answer record and appends the result document.
///
/// `submit` always settles: persistence failure is logged and swallowed so
/// completing the quiz never blocks on the network. Availability over
/// durability, deliberately.
#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    bank: Arc<Vec<Question>>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: Arc<Vec<Question>>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            clock,
            bank,
            submissions,
        }
    }

    /// Score `answers`, build the result record, and attempt the append.
    ///
    /// The append is awaited to completion with no artificial deadline; a
    /// hung store hangs the submitting notice, which is accepted.
    pub async fn submit(
        &self,
        identity: &Identity,
        answers: &[Option<usize>],
        identifier: &str,
        forced: bool,
    ) -> FinalizedSubmission {
        let score = compute_score(answers, &self.bank);
        let total = self.bank.len();
        let percentage = percentage(score, total);
        let submitted_at = self.clock.now();

        let record = SubmissionRecord {
            name: identity.name.clone(),
            email: identity.email.clone(),
            score,
            total_questions: total as u32,
            identifier: identifier.to_string(),
            percentage,
            submitted_at,
        };

        let document_id = match self.submissions.append_submission(&record).await {
            Ok(id) => {
                tracing::info!(id, score, percentage, forced, "submission stored");
                Some(id)
            }
            Err(err) => {
                // Local fallback: the candidate still gets their result.
                tracing::warn!(
                    error = %err,
                    score,
                    percentage,
                    forced,
                    identifier,
                    "submission append failed, finishing with local score"
                );
                None
            }
        };

        FinalizedSubmission {
            score,
            percentage,
            submitted_at,
            document_id,
        }
    }
}
