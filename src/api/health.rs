//! Health check endpoints

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub database: bool,
    pub pool: PoolStats,
}

/// Connection pool occupancy at the time of the check
#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check: the catalog store must answer a trivial query
async fn readyz(State(state): State<AppState>) -> Json<ReadyResponse> {
    let pool = state.db.pool();
    let database = match sqlx::query("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog store not ready");
            false
        }
    };

    Json(ReadyResponse {
        ready: database,
        database,
        pool: PoolStats {
            size: pool.size(),
            idle: pool.num_idle(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
