//! # HTTP Server for Receipt Printing
//!
//! Exposes the single print endpoint over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! recibo serve --port 8000
//! ```
//!
//! Then `POST /print-receipt` with `{ "data": <order> }`.

mod handlers;
mod state;

pub use state::AppState;

use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ReciboError;

/// Build the application router.
///
/// Split out from [`serve`] so tests can run the app without binding a
/// real socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/print-receipt", post(handlers::print_receipt))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use recibo::{Config, server};
///
/// # async fn example() -> Result<(), recibo::ReciboError> {
/// let config = Config::from_env();
/// server::serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: Config) -> Result<(), ReciboError> {
    let addr = format!("0.0.0.0:{}", config.port);
    let mode = config.mode;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    tracing::info!(%addr, mode = mode.label(), "recibo server starting");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ReciboError::Server(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ReciboError::Server(format!("Server error: {e}")))?;

    Ok(())
}
