mod auth;
mod finished;
mod locked;
mod quiz;
mod scripts;
mod submitting;

pub use auth::AuthView;
pub use finished::FinishedView;
pub use locked::LockedView;
pub use quiz::{QuizView, QuizViewData};
pub use submitting::SubmittingView;

pub(crate) use scripts::integrity_monitor_script;
