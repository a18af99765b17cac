//! HTTP gateway: router construction and the server loop.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the service router over shared state.
///
/// Split out of [`run_server`] so tests can drive the router without
/// binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(handlers::healthz))
        .route("/api/users", get(handlers::list_users))
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/orders", post(handlers::create_order))
        .route("/api/orders/{order_id}", get(handlers::get_order))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind the listener and serve until the process is stopped.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
