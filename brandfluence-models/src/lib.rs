pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;
pub mod web;

use async_trait::async_trait;
use brandfluence_error::{init::InitContextError, storage::StorageError, BFResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

/// Database management interface.
///
/// Owns the connection pool: creates it (running migrations when needed),
/// hands out connections and closes the pool on shutdown.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Initializes the database manager with the provided settings.
    async fn init(settings: &Settings) -> BFResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the connection pool.
    fn get_connection(&self) -> BFResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> BFResult<()>;
}

/// Web server interface for the HTTP API.
#[async_trait]
pub trait WebServer: Send + Sync + 'static {
    /// Binds the listener and starts serving in the background.
    ///
    /// # Arguments
    /// * `settings` - The application configuration
    /// * `db` - Connection handed to every request's domain context
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> BFResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> BFResult<()>;
}
