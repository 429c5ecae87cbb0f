//! Evidence Server Library
//!
//! Exposes the router, store, and service so integration tests can drive
//! the HTTP surface in-process.

pub mod api;
pub mod db;
pub mod health;
pub mod service;

pub use api::{evidence_router, AppState, SharedState};
pub use db::{Database, PersistenceError};
pub use health::HealthResponse;
pub use service::EvidenceService;
