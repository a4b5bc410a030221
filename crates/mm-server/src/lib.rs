//! moodmix HTTP API server (Axum) and command-line front end.
//!
//! Serves playlist recommendations, cluster insights and premium-likelihood
//! scores over the read-only artifacts loaded at start-up.

pub mod advice;
pub mod artifacts;
pub mod cli;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use anyhow::Context;
use axum::Router;
use state::AppState;
use tracing::info;

/// Build the application router with built-in rules and no artifacts.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::api_routes())
        .fallback(routes::not_found)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    info!(%addr, "moodmix listening");
    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
