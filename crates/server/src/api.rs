//! HTTP surface for the evidence service.
//!
//! Each request is handled independently: one store call per request, no
//! shared mutable state beyond the store itself.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use evidence_core::{mapper, validation, EvidenceDto};

use crate::db::Database;
use crate::health;
use crate::service::EvidenceService;

pub struct AppState {
    pub db: Arc<Database>,
    pub service: EvidenceService,
    /// Server start time (used for uptime reporting)
    pub start_time: chrono::DateTime<chrono::Utc>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(db: Database) -> SharedState {
        let db = Arc::new(db);
        Arc::new(Self {
            service: EvidenceService::new(db.clone()),
            db,
            start_time: chrono::Utc::now(),
        })
    }
}

/// Build the application router. Tests drive this directly in-process.
pub fn evidence_router(state: SharedState) -> Router {
    Router::new()
        .route("/evidence", get(list_evidence).post(create_evidence))
        .route("/health", get(health::check_health))
        .with_state(state)
}

// ============================================================================
// Evidence Endpoints
// ============================================================================

async fn list_evidence(State(state): State<SharedState>) -> impl IntoResponse {
    match state.service.list() {
        Ok(records) => {
            let dtos: Vec<EvidenceDto> = records.iter().map(mapper::to_wire).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list evidence: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing evidence").into_response()
        }
    }
}

async fn create_evidence(
    State(state): State<SharedState>,
    body: Option<Json<EvidenceDto>>,
) -> impl IntoResponse {
    // A missing or unparseable body is a validation failure, not a 500
    let Some(Json(dto)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            "A JSON request body with testimony and createdBy is required",
        )
            .into_response();
    };

    if let Err(e) = validation::validate(&dto) {
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    match state.service.save(&mapper::to_record(&dto)) {
        Ok(evidence) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/evidence/{}", evidence.id))],
            "Evidence created correctly!",
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create evidence: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating evidence").into_response()
        }
    }
}
