//! Domain error taxonomy shared by every marketplace operation.
//!
//! Messages carried by these variants are user-safe: storage details stay in
//! [`StorageError`] and are only logged, never rendered to callers.

use crate::storage::StorageError;
use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or invalid credential
    #[error("authentication required")]
    Unauthenticated,
    /// Credential resolved to a deactivated account
    #[error("account is inactive")]
    InactiveAccount,
    /// Authenticated, but wrong role or not the resource owner
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Referenced entity is absent
    #[error("{0} not found")]
    NotFound(String),
    /// Uniqueness violation
    #[error("conflict: {0}")]
    Conflict(String),
    /// Malformed or out-of-range input
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Status change rejected by the state machine
    #[error("invalid {entity} transition from `{from}` to `{to}`")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },
    /// Persistence failure; rendered as a generic internal error
    #[error("storage failure")]
    Storage(StorageError),
}

impl DomainError {
    #[inline]
    pub fn forbidden(msg: impl Into<String>) -> Self {
        DomainError::Forbidden(msg.into())
    }

    #[inline]
    pub fn not_found(what: impl Into<String>) -> Self {
        DomainError::NotFound(what.into())
    }

    #[inline]
    pub fn conflict(msg: impl Into<String>) -> Self {
        DomainError::Conflict(msg.into())
    }

    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }

    #[inline]
    pub fn transition(entity: &'static str, from: impl ToString, to: impl ToString) -> Self {
        DomainError::InvalidTransition {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(e: StorageError) -> Self {
        if let Some(msg) = e.unique_violation() {
            tracing::debug!(constraint = %msg, "unique constraint rejected write");
            return DomainError::Conflict("resource already exists".into());
        }
        if let Some(msg) = e.foreign_key_violation() {
            tracing::debug!(constraint = %msg, "foreign key constraint rejected write");
            return DomainError::InvalidInput("referenced resource does not exist".into());
        }
        match e {
            StorageError::EntityNotFound(what) => DomainError::NotFound(what),
            other => DomainError::Storage(other),
        }
    }
}

impl From<DbErr> for DomainError {
    #[inline]
    fn from(e: DbErr) -> Self {
        DomainError::from(StorageError::DBError(e))
    }
}

impl From<TransactionError<DomainError>> for DomainError {
    fn from(e: TransactionError<DomainError>) -> Self {
        match e {
            TransactionError::Connection(db_err) => DomainError::from(db_err),
            TransactionError::Transaction(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_not_found_maps_to_not_found() {
        let err = DomainError::from(StorageError::EntityNotFound("campaign".into()));
        assert!(matches!(err, DomainError::NotFound(ref w) if w == "campaign"));
    }

    #[test]
    fn test_plain_db_error_is_storage() {
        let err = DomainError::from(DbErr::Custom("disk on fire".into()));
        assert!(matches!(err, DomainError::Storage(_)));
        // Storage details never reach the rendered message
        assert_eq!(err.to_string(), "storage failure");
    }

    #[test]
    fn test_transition_message() {
        let err = DomainError::transition("campaign", "active", "draft");
        assert_eq!(
            err.to_string(),
            "invalid campaign transition from `active` to `draft`"
        );
    }
}
