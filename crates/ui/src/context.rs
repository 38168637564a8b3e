use std::sync::Arc;

use quiz_core::model::{Question, QuizLimits};
use services::{Clock, IdentifierService, LockoutService, SubmissionService};

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn limits(&self) -> QuizLimits;
    fn bank(&self) -> Arc<Vec<Question>>;

    fn identifier(&self) -> Arc<IdentifierService>;
    fn lockout(&self) -> Arc<LockoutService>;
    fn submissions(&self) -> Arc<SubmissionService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    limits: QuizLimits,
    bank: Arc<Vec<Question>>,

    identifier: Arc<IdentifierService>,
    lockout: Arc<LockoutService>,
    submissions: Arc<SubmissionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            limits: app.limits(),
            bank: app.bank(),
            identifier: app.identifier(),
            lockout: app.lockout(),
            submissions: app.submissions(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn limits(&self) -> QuizLimits {
        self.limits
    }

    #[must_use]
    pub fn bank(&self) -> Arc<Vec<Question>> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn identifier(&self) -> Arc<IdentifierService> {
        Arc::clone(&self.identifier)
    }

    #[must_use]
    pub fn lockout(&self) -> Arc<LockoutService> {
        Arc::clone(&self.lockout)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
