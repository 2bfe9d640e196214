//! HTTP front end.
//!
//! A thin axum layer over the cipher: it validates input, calls
//! [`transform`](crate::cipher::transform), renders the index page, and
//! keeps the last successful shift for the next render.
//!
//! ```text
//! GET  /              index page
//! POST /encrypt       JSON body, records last shift, returns alphabets
//! POST /decrypt       JSON body, records last shift, returns alphabets
//! GET  /api/encrypt   query string
//! GET  /api/decrypt   query string
//! GET  /health
//! ```

pub mod error;
mod handlers;
pub mod page;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::session::LastShift;
use crate::shift::ShiftAmount;
use page::PageRenderer;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Server settings collected from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub default_shift: ShiftAmount,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            default_shift: ShiftAmount::DEFAULT,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// State shared by all handlers.
pub struct AppState {
    pub default_shift: ShiftAmount,
    pub last_shift: LastShift,
    pub pages: PageRenderer,
}

impl AppState {
    pub fn new(default_shift: ShiftAmount) -> Result<Self, tera::Error> {
        Ok(Self {
            default_shift,
            last_shift: LastShift::new(),
            pages: PageRenderer::new()?,
        })
    }
}

/// Builds the router over an existing state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/encrypt", post(handlers::encrypt))
        .route("/decrypt", post(handlers::decrypt))
        .route("/api/encrypt", get(handlers::api_encrypt))
        .route("/api/decrypt", get(handlers::api_decrypt))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the configured address and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::new(config.default_shift).context("failed to load page template")?;
    let app = router(Arc::new(state));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Starting caesarcrypt server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
    }
}
