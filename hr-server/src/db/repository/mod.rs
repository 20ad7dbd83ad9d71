//! Repository Module
//!
//! CRUD operations over the in-memory tables, plus the referential
//! integrity rules the tables themselves do not know about.

pub mod permit;
pub mod user;
pub mod worker;

pub use permit::PermitRepository;
pub use user::UserRepository;
pub use worker::WorkerRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
