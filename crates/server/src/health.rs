//! Unified /health endpoint: build info, storage health, uptime.
//!
//! Never fails; a broken store downgrades the verdict instead of erroring
//! the request.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::SharedState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "up" or "degraded"
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub db_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

pub async fn check_health(State(state): State<SharedState>) -> impl IntoResponse {
    let db_error = state.db.ping().err().map(|e| e.to_string());
    let db_ok = db_error.is_none();

    Json(HealthResponse {
        status: if db_ok { "up" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.start_time).num_seconds(),
        db_ok,
        db_error,
        checked_at: Utc::now(),
    })
}
