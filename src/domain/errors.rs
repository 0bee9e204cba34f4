//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No teacher matches the given reference code
    NotFound(String),
    /// A teacher with the same tax identifier already exists
    AlreadyExists(String),
    /// A referenced region does not exist
    InvalidReference(String),
    /// Input failed shape validation or a precondition
    Validation(String),
    /// Database/persistence error
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    /// Short machine-readable tag, used by the HTTP layer and in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "not_found",
            DomainError::AlreadyExists(_) => "already_exists",
            DomainError::InvalidReference(_) => "invalid_reference",
            DomainError::Validation(_) => "validation",
            DomainError::Database(_) => "database",
            DomainError::Internal(_) => "internal",
        }
    }

    /// Whether the caller can act on this error (re-show a form, pick another value...)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DomainError::Database(_) | DomainError::Internal(_))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            DomainError::InvalidReference(msg) => write!(f, "Invalid reference: {}", msg),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Constraint violations are the authoritative backstop for the service pre-checks,
// so they keep their business meaning instead of collapsing into Database.
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::AlreadyExists(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::InvalidReference(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}
