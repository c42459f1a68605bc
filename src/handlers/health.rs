//! Health check handler

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{error::AppResult, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness check including a database ping
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let database = match crate::db::test_connection(state.db()).await {
        Ok(()) => "up",
        Err(e) => {
            tracing::error!("Health check database ping failed: {}", e);
            "down"
        }
    };

    Ok(Json(HealthResponse {
        status: "ok",
        database,
    }))
}
