//! REST API over a built network.
//!
//! Provides three GET endpoints:
//! - `/items`: renderable buses and loads, in input order
//! - `/items/{name}/chart`: composed time-current chart of one item
//! - `/items/{name}/tree`: text tree around one item

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::catalog::Catalog;
use crate::plot::PlotStyle;

pub use types::{ErrorResponse, ItemSummary, TreeResponse};

/// Immutable application state shared across all request handlers.
///
/// The network is built once before serving; handlers only read it, so no
/// locks are needed.
pub struct AppState {
    /// Network and its items.
    pub catalog: Catalog,
    /// Style applied to every composed chart.
    pub style: PlotStyle,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(handlers::get_items))
        .route("/items/{name}/chart", get(handlers::get_chart))
        .route("/items/{name}/tree", get(handlers::get_tree))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
