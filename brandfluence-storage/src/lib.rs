mod migration;
mod sql;

use async_trait::async_trait;
use brandfluence_error::{init::InitContextError, storage::StorageError, BFResult};
use brandfluence_models::{
    settings::{Settings, Sqlite},
    DbManager,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::sync::Arc;
use tracing::{info, instrument};

/// Owns the SQLite pool for the lifetime of the process
pub struct BFDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl BFDbManager {
    async fn connect(config: &Sqlite) -> BFResult<DatabaseConnection, InitContextError> {
        let db = sqlite::init_db(config).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
        })?;

        Migrator::up(&db, None).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
        })?;

        Ok(db)
    }
}

#[async_trait]
impl DbManager for BFDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> BFResult<Arc<Self>, InitContextError> {
        let db_conn = Self::connect(&settings.db.sqlite).await?;
        let db_manager = Arc::new(BFDbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    fn get_connection(&self) -> BFResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> BFResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}

/// Fresh, fully migrated in-memory database
pub async fn init_memory_db() -> BFResult<DatabaseConnection, InitContextError> {
    BFDbManager::connect(&Sqlite::memory()).await
}

/// Rolls the schema back and forward again, leaving empty tables
pub async fn reset_schema(db: &DatabaseConnection) -> BFResult<(), StorageError> {
    Migrator::refresh(db).await?;
    Ok(())
}
