use chrono::Duration;
use std::sync::Arc;

use storage::SubmissionRepository;

use crate::Clock;
use crate::error::LockoutError;

/// The retake gate: reads the most recent submission for an identifier and
/// decides admit/deny before the entry form is shown.
///
/// Proctoring is advisory, so a failed query fails open: the candidate gets
/// in and the failure is only logged.
#[derive(Clone)]
pub struct LockoutService {
    clock: Clock,
    submissions: Arc<dyn SubmissionRepository>,
}

impl LockoutService {
    #[must_use]
    pub fn new(clock: Clock, submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { clock, submissions }
    }

    /// True iff a submission from `identifier` landed strictly less than
    /// `window` ago. No prior record, or a record exactly `window` old or
    /// older, admits; a query failure admits too.
    pub async fn is_locked_out(&self, identifier: &str, window: Duration) -> bool {
        match self.query(identifier).await {
            Ok(Some(submitted_at)) => {
                let elapsed = self.clock.now() - submitted_at;
                let locked = elapsed < window;
                if locked {
                    tracing::info!(identifier, "retake denied inside lockout window");
                }
                locked
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, identifier, "lockout query failed, failing open");
                false
            }
        }
    }

    async fn query(
        &self,
        identifier: &str,
    ) -> Result<Option<chrono::DateTime<chrono::Utc>>, LockoutError> {
        let latest = self.submissions.latest_by_identifier(identifier).await?;
        Ok(latest.map(|record| record.submitted_at))
    }
}
