use brandfluence_error::BFResult;
use brandfluence_models::settings::{BFDbConfig, Sqlite};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tokio::fs::create_dir_all;
use tracing::{info, instrument, log::LevelFilter};

/// Initialize the SQLite connection pool.
///
/// File databases are created on demand (`mode=rwc`) when `auto_create` is set.
/// `:memory:` gives every connection its own database, so the pool is pinned to
/// a single connection.
#[instrument(name = "init_sqlite_db", skip_all)]
pub async fn init_db(config: &Sqlite) -> BFResult<DatabaseConnection> {
    let database_url = config.to_url();

    let mut opts = ConnectOptions::new(&database_url);
    if config.is_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_millis(config.timeout));
    } else {
        if config.auto_create {
            create_dir_all(config.db_dir()).await?;
        }
        opts.connect_timeout(Duration::from_millis(config.timeout))
            .idle_timeout(Duration::from_millis(config.idle_timeout))
            .max_lifetime(Duration::from_millis(config.max_lifetime))
            .max_connections(config.max_connections);
    }

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    info!(
        "Connecting to SQLite database at: {} (auto_create: {})",
        config.db_path(),
        config.auto_create
    );

    // sqlx enables `foreign_keys` on every pooled connection
    let db = Database::connect(opts).await?;
    #[cfg(not(debug_assertions))]
    {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};
        let _ = db
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA synchronous=NORMAL;".to_string(),
            ))
            .await;
        let _ = db
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA temp_store=MEMORY;".to_string(),
            ))
            .await;
    }
    info!("Successfully connected to SQLite database");

    Ok(db)
}
