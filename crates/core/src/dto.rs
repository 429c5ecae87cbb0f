use serde::{Deserialize, Serialize};

/// Wire form of an evidence record as exchanged with HTTP clients.
///
/// Every field is optional on input so validation can report what is
/// missing instead of failing deserialization. `id` and `dateTime` are
/// ignored on the create path (the store assigns both); timestamps travel
/// as RFC 3339 strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimony: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
