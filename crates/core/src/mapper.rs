//! Translation between the wire form and the persisted form.
//!
//! Pure field copying in both directions; assignment of `id` and the
//! creation timestamp is the store's job, so `to_record` drops them.

use crate::dto::EvidenceDto;
use crate::evidence::{Evidence, NewEvidence};

/// Persisted -> wire. Every field populated; the timestamp is rendered as
/// RFC 3339 so it re-parses exactly.
pub fn to_wire(evidence: &Evidence) -> EvidenceDto {
    EvidenceDto {
        id: Some(evidence.id.clone()),
        testimony: Some(evidence.testimony.clone()),
        date_time: Some(evidence.date_time.to_rfc3339()),
        created_by: Some(evidence.created_by.clone()),
    }
}

/// Wire -> pre-insert record. Client-supplied `id` and `dateTime` are
/// ignored. Callers validate first, so absent fields only map to empty
/// strings on paths that never reach the store.
pub fn to_record(dto: &EvidenceDto) -> NewEvidence {
    NewEvidence {
        testimony: dto.testimony.clone().unwrap_or_default(),
        created_by: dto.created_by.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored() -> Evidence {
        Evidence {
            id: "7c9e6679-7425-40de-963d-02d1dfae2a9b".to_string(),
            testimony: "The logs showed repeated failed logins".to_string(),
            date_time: Utc::now(),
            created_by: "alice".to_string(),
        }
    }

    #[test]
    fn round_trip_preserves_testimony_and_author() {
        let evidence = stored();
        let record = to_record(&to_wire(&evidence));
        assert_eq!(record.testimony, evidence.testimony);
        assert_eq!(record.created_by, evidence.created_by);
    }

    #[test]
    fn to_wire_populates_every_field() {
        let evidence = stored();
        let dto = to_wire(&evidence);
        assert_eq!(dto.id.as_deref(), Some(evidence.id.as_str()));
        assert_eq!(dto.testimony.as_deref(), Some(evidence.testimony.as_str()));
        assert_eq!(dto.created_by.as_deref(), Some(evidence.created_by.as_str()));
        let rendered = dto.date_time.expect("timestamp rendered");
        let parsed = chrono::DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), evidence.date_time);
    }

    #[test]
    fn to_record_drops_client_supplied_id_and_timestamp() {
        let dto = EvidenceDto {
            id: Some("client-chosen".to_string()),
            testimony: Some("A testimony long enough to matter".to_string()),
            date_time: Some("2024-01-05T12:00:00Z".to_string()),
            created_by: Some("bob".to_string()),
        };
        let record = to_record(&dto);
        assert_eq!(record.testimony, "A testimony long enough to matter");
        assert_eq!(record.created_by, "bob");
    }

    #[test]
    fn wire_form_uses_camel_case_field_names() {
        let json = serde_json::to_value(to_wire(&stored())).unwrap();
        assert!(json.get("dateTime").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("date_time").is_none());
    }
}
