#![forbid(unsafe_code)]

pub mod remote;
pub mod repository;

pub use remote::{RemoteStoreConfig, RemoteSubmissionStore};
pub use repository::{InMemoryStore, StorageError, SubmissionRecord, SubmissionRepository};
