//! To-do server implementation

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::handlers;
use crate::reconcile::{local_today, reconcile, ReconcileOutcome};
use crate::store::{FileStore, TodoStore};

/// Delay before pointing the browser at the freshly bound server.
const BROWSER_OPEN_DELAY: Duration = Duration::from_secs(1);

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn TodoStore>,
    page: String,
    write_lock: Mutex<()>,
}

impl AppState {
    /// Builds the state, loading the page template once.
    pub fn new(config: AppConfig, store: Arc<dyn TodoStore>) -> Self {
        let page = handlers::page::load_template(config.template.as_deref());
        Self {
            config,
            store,
            page,
            write_lock: Mutex::new(()),
        }
    }

    /// HTML served at `/`.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Runs `f` with exclusive write access to the store.
    ///
    /// Every mutation of the task list goes through here so that a reset
    /// and a client save never interleave.
    pub fn with_write_lock<T>(&self, f: impl FnOnce(&dyn TodoStore) -> T) -> T {
        let _guard = self.write_lock.lock();
        f(self.store.as_ref())
    }
}

/// Local to-do server
pub struct TodoServer;

impl TodoServer {
    /// Build the application router
    pub fn router(state: Arc<AppState>) -> Router {
        let cors = cors_layer(state.config.port);

        Router::new()
            // Main page
            .route("/", get(handlers::page::index))
            // Task list, replaced wholesale on POST
            .route(
                "/api/todos",
                get(handlers::api::list_todos).post(handlers::api::save_todos),
            )
            // Static assets
            .route("/assets/{*path}", get(handlers::assets::serve))
            .layer(cors)
            .with_state(state)
    }

    /// Run the daily reset, then serve until Ctrl+C.
    ///
    /// The reset completes before the listener is bound, so no request can
    /// observe yesterday's completed flags. A storage failure during the
    /// reset aborts startup.
    pub async fn start(config: AppConfig) -> Result<()> {
        let store: Arc<dyn TodoStore> = Arc::new(FileStore::new(&config.data_dir));

        let today = local_today();
        match reconcile(store.as_ref(), today).with_context(|| {
            format!(
                "daily reset failed for data directory {}",
                config.data_dir.display()
            )
        })? {
            ReconcileOutcome::UpToDate => info!(%today, "tasks already reset today"),
            ReconcileOutcome::Reset { retained, dropped } => {
                info!(%today, retained, dropped, "tasks reset for a new day")
            },
        }

        let state = Arc::new(AppState::new(config.clone(), store));
        let app = Self::router(state);

        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        println!();
        println!("  Daily To-Do:  {}", config.url());
        println!("  Data:         {}", config.data_dir.display());
        println!("  Press Ctrl+C to stop");
        println!();

        info!("To-do server listening on http://{}", addr);

        if config.open_browser {
            let url = config.url();
            tokio::spawn(async move {
                tokio::time::sleep(BROWSER_OPEN_DELAY).await;
                if let Err(e) = open::that(&url) {
                    warn!(%url, error = %e, "failed to open browser");
                }
            });
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("To-do server stopped");
        Ok(())
    }
}

/// Only the UI's own origin may call the API from a browser.
fn cors_layer(port: u16) -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        format!("http://127.0.0.1:{port}"),
        format!("http://localhost:{port}"),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
