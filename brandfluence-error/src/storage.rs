use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

impl StorageError {
    /// Returns the violated constraint message when the database rejected a
    /// write because of a unique index.
    pub fn unique_violation(&self) -> Option<String> {
        match self {
            StorageError::DBError(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => Some(msg),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the violated constraint message for foreign key failures.
    pub fn foreign_key_violation(&self) -> Option<String> {
        match self {
            StorageError::DBError(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Some(msg),
                _ => None,
            },
            _ => None,
        }
    }
}
