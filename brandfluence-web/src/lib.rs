//! HTTP API of the brandfluence marketplace
mod api;
mod middleware;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use async_trait::async_trait;
use brandfluence_core::{CoreContext, JwtVerifier};
use brandfluence_error::{init::InitContextError, BFError, BFResult};
use brandfluence_models::{settings::Settings, WebServer};
use middleware::{auth::Authentication, cors::middleware};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    core: CoreContext,
    verifier: Arc<JwtVerifier>,
}

impl AppState {
    pub fn new(core: CoreContext, verifier: JwtVerifier) -> Self {
        Self {
            core,
            verifier: Arc::new(verifier),
        }
    }

    #[inline]
    pub fn core(&self) -> &CoreContext {
        &self.core
    }

    #[inline]
    pub fn verifier(&self) -> &JwtVerifier {
        &self.verifier
    }
}

/// Registers the state, root routes and the authenticated API under `router_prefix`.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: &AppState, router_prefix: &str) {
    cfg.app_data(Data::new(state.clone()))
        .configure(api::configure_public_routes)
        .service(
            web::scope(router_prefix)
                .wrap(Authentication)
                .configure(api::configure_routes),
        );
}

/// BFWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct BFWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl BFWebServer {
    fn create_server(settings: &Settings, db: DatabaseConnection) -> BFResult<Server> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let router_prefix = settings.web.router_prefix.clone();
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();

        let state = AppState::new(
            CoreContext::with_stored_notifier(db, settings.general.transition_policy),
            JwtVerifier::new(&settings.web.jwt),
        );

        let server = HttpServer::new(move || {
            App::new()
                .wrap(middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(|cfg| configure_app(cfg, &state, &router_prefix))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| BFError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for BFWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> BFResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(BFWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    async fn stop(&self) -> BFResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");
        Ok(())
    }
}
