//! Process wiring for the brandfluence service.
//!
//! Loads settings, installs logging, brings up the database and the HTTP API,
//! and tears them down again when a shutdown signal arrives.
mod logger;

pub use brandfluence_error::{BFError, BFResult};
pub use logger::Logger;

use brandfluence_core::{service::UserService, CoreContext};
use brandfluence_models::{constants::DATA_DIR, settings::Settings, DbManager, WebServer};
use std::{
    future::Future,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, span, warn, Level};

pub struct BFAppContext {
    /// Global settings
    settings: Settings,
    /// Global logger
    logger: Logger,
    /// Database manager
    db_manager: Arc<dyn DbManager>,
    /// Web server
    web_server: Arc<dyn WebServer>,
    /// Flag to prevent duplicate shutdowns
    shutting_down: AtomicBool,
    /// Shutdown token
    shutdown_token: CancellationToken,
}

impl BFAppContext {
    /// Builds every component from the configuration file at `config`.
    ///
    /// Order: settings, runtime directory, logger, database (with the optional admin
    /// seed), web server.
    pub async fn init<D, W>(config: String) -> BFResult<Self>
    where
        D: DbManager,
        W: WebServer,
    {
        let settings = Settings::new(config)?;
        apply_runtime_dir(&settings.general.runtime_dir)?;

        let mut logger = Logger::new(Some(Logger::default_level()));
        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        ensure_runtime_directories()?;

        let db_manager = Self::init_db_manager::<D>(&settings).await?;
        let web_server = W::init(&settings, db_manager.get_connection()?).await?;
        info!(
            host = %settings.web.host,
            port = settings.web.port,
            "Web server initialized successfully."
        );

        Ok(BFAppContext {
            settings,
            logger,
            db_manager,
            web_server,
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        })
    }

    async fn init_db_manager<D: DbManager>(settings: &Settings) -> BFResult<Arc<dyn DbManager>> {
        let db_manager = D::init(settings).await?;

        let core = CoreContext::with_stored_notifier(
            db_manager.get_connection()?,
            settings.general.transition_policy,
        );
        if UserService::ensure_admin(&core, &settings.general.admin).await? {
            info!(username = %settings.general.admin.username, "Admin account created");
        }

        info!("Database initialized successfully.");
        Ok(db_manager)
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn db_manager(&self) -> Arc<dyn DbManager> {
        Arc::clone(&self.db_manager)
    }

    #[inline]
    pub fn web_server(&self) -> Arc<dyn WebServer> {
        Arc::clone(&self.web_server)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Requests shutdown without waiting for a process signal.
    #[inline]
    pub fn shutdown(&self) {
        self.shutdown_token.cancel();
    }

    /// Serves until a shutdown signal arrives, then shuts down gracefully.
    pub async fn run(&self) -> BFResult<()> {
        self.listen_for_shutdown(async { self.graceful_shutdown().await })
            .await
    }

    async fn listen_for_shutdown<F>(&self, shutdown_fn: F) -> BFResult<()>
    where
        F: Future<Output = BFResult<()>>,
    {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;
            let mut sigquit = signal(SignalKind::quit())?;

            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT signal");
                }
                _ = sighup.recv() => {
                    info!("Received SIGHUP signal");
                }
                _ = sigquit.recv() => {
                    info!("Received SIGQUIT signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => {
                    info!("Received ctrl-c signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        shutdown_fn.await
    }

    /// Stops the HTTP API first so in-flight requests drain, then closes the pool.
    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> BFResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("Starting graceful shutdown...");
        if let Err(e) = self.web_server.stop().await {
            warn!(error = %e, "Web server did not stop cleanly");
        }
        if let Err(e) = self.db_manager.close().await {
            warn!(error = %e, "Database pool did not close cleanly");
        }
        info!("Graceful shutdown completed successfully");
        Ok(())
    }
}

/// Switches the working directory so relative paths (`./data`, `./logs`) resolve
/// under the configured runtime root.
fn apply_runtime_dir(runtime_dir: &str) -> BFResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| BFError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;
    std::env::set_current_dir(dir)
        .map_err(|e| BFError::from(format!("Failed to set current_dir to {dir}: {e}")))?;
    Ok(())
}

fn ensure_runtime_directories() -> BFResult<()> {
    let dir = Path::new(DATA_DIR);
    std::fs::create_dir_all(dir).map_err(|e| {
        BFError::from(format!("Failed to create directory {}: {e}", dir.display()))
    })?;
    Ok(())
}
