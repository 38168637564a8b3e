//! Shared error types for the services crate.
//!
//! Every fault here is recovered locally: the identifier degrades to a
//! sentinel, the gate fails open, and a failed append still lets the session
//! finish. The types exist so the degraded paths can log what actually broke.

use thiserror::Error;

use storage::StorageError;

/// Faults while resolving the client identifier.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentifierError {
    #[error("identifier endpoint answered with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Faults while querying the gate's latest-submission lookup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LockoutError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
