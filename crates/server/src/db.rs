// SQLite persistence for evidence records.

use chrono::{DateTime, Utc};
use evidence_core::{Evidence, NewEvidence};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

/// Store-side failure: connectivity or a constraint at the storage layer.
/// Callers surface this as a generic 500; the detail only goes to the logs.
#[derive(Debug, Error)]
#[error("evidence store error: {0}")]
pub struct PersistenceError(#[from] rusqlite::Error);

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path).map_err(PersistenceError)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory().map_err(PersistenceError)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<(), PersistenceError> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS evidence (
                id TEXT PRIMARY KEY,
                testimony TEXT NOT NULL,
                date_time TEXT NOT NULL,
                created_by TEXT NOT NULL
            );
        "#,
        )
        .map_err(PersistenceError)?;
        Ok(())
    }

    /// Insert one record: assigns the id and creation timestamp, persists,
    /// returns the stored form.
    pub fn insert_evidence(&self, record: &NewEvidence) -> Result<Evidence, PersistenceError> {
        let evidence = Evidence {
            id: uuid::Uuid::new_v4().to_string(),
            testimony: record.testimony.clone(),
            date_time: Utc::now(),
            created_by: record.created_by.clone(),
        };

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO evidence (id, testimony, date_time, created_by) VALUES (?1, ?2, ?3, ?4)",
            params![
                evidence.id,
                evidence.testimony,
                evidence.date_time.to_rfc3339(),
                evidence.created_by
            ],
        )?;
        Ok(evidence)
    }

    /// List every record in insertion order.
    pub fn list_evidence(&self) -> Result<Vec<Evidence>, PersistenceError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, testimony, date_time, created_by FROM evidence ORDER BY rowid")?;
        let mut rows = stmt.query([])?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let raw_ts: String = row.get(2)?;
            let date_time = parse_timestamp(&raw_ts)?;
            records.push(Evidence {
                id: row.get(0)?,
                testimony: row.get(1)?,
                date_time,
                created_by: row.get(3)?,
            });
        }
        Ok(records)
    }

    /// Cheap liveness probe for the health endpoint.
    pub fn ping(&self) -> Result<(), PersistenceError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM evidence", [], |row| {
            row.get::<_, i64>(0)
        })?;
        Ok(())
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })
}
