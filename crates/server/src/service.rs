//! Pass-through orchestration over the store. No business logic lives here;
//! store errors propagate to the caller unchanged.

use std::sync::Arc;

use evidence_core::{Evidence, NewEvidence};

use crate::db::{Database, PersistenceError};

#[derive(Clone)]
pub struct EvidenceService {
    db: Arc<Database>,
}

impl EvidenceService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, record: &NewEvidence) -> Result<Evidence, PersistenceError> {
        self.db.insert_evidence(record)
    }

    pub fn list(&self) -> Result<Vec<Evidence>, PersistenceError> {
        self.db.list_evidence()
    }
}
