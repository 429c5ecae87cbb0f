use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted form of an evidence record. `id` and `date_time` are assigned
/// by the store on insert and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evidence {
    pub id: String,
    pub testimony: String,
    pub date_time: DateTime<Utc>,
    pub created_by: String,
}

/// Pre-insert form: a create request once the fields the store owns
/// (id, creation timestamp) have been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvidence {
    pub testimony: String,
    pub created_by: String,
}
