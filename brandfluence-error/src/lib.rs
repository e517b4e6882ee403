pub mod domain;
pub mod init;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use domain::DomainError;
use init::InitContextError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type BFResult<T, E = BFError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type DomainResult<T, E = DomainError> = Result<T, E>;

/// Process-level error used by bootstrap, configuration and shutdown paths.
#[derive(Error, Debug, Default)]
pub enum BFError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    DomainError(#[from] DomainError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<String> for BFError {
    #[inline]
    fn from(e: String) -> Self {
        BFError::Msg(e)
    }
}

impl From<&str> for BFError {
    #[inline]
    fn from(e: &str) -> Self {
        BFError::Msg(e.to_string())
    }
}

impl From<DbErr> for BFError {
    #[inline]
    fn from(e: DbErr) -> Self {
        BFError::StorageError(StorageError::DBError(e))
    }
}
