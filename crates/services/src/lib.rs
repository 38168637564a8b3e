#![forbid(unsafe_code)]

pub mod error;
pub mod identifier_service;
pub mod lockout_service;
pub mod submission_service;

pub use quiz_core::Clock;

pub use error::{IdentifierError, LockoutError};
pub use identifier_service::{IdentifierService, UNKNOWN_IDENTIFIER};
pub use lockout_service::LockoutService;
pub use submission_service::{FinalizedSubmission, SubmissionService};
