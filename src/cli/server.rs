//! HTTP server mode exposing the tools to an automation host

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::checker::Checkers;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::tools;

/// App state shared across handlers
struct AppState {
    checkers: Checkers,
}

/// Start the HTTP server
pub async fn serve(config: Config, port: u16) -> Result<()> {
    let state = AppState {
        checkers: Checkers::from_config(&config)?,
    };

    // Allow all origins; the server only exposes read/status operations
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(call_tool))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List the tool descriptors
async fn list_tools() -> impl IntoResponse {
    Json(tools::definitions())
}

/// Invoke a tool by name. The response is always an envelope, 200 even for
/// error envelopes; the `status` field carries the outcome.
async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let args = body.map_or_else(|| json!({}), |Json(v)| v);
    Json(tools::dispatch(&name, &args, &state.checkers).await)
}
