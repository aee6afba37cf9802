use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("User ID must be positive, got {0}")]
    InvalidUserId(i64),

    #[error("Cannot identify a comment author from {0:?}")]
    UnresolvableAuthor(String),
}
