//! Field validation for incoming evidence records.
//!
//! Runs before translation, collecting every violation rather than stopping
//! at the first. Lengths are counted in characters, bounds inclusive.

use crate::dto::EvidenceDto;
use crate::error::ValidationError;

pub const TESTIMONY_MIN_CHARS: usize = 20;
pub const TESTIMONY_MAX_CHARS: usize = 255;
pub const CREATED_BY_MAX_CHARS: usize = 100;

pub const MSG_TESTIMONY_REQUIRED: &str = "Testimony is required";
pub const MSG_TESTIMONY_LENGTH: &str = "Testimony must be between 20 and 255 characters";
pub const MSG_CREATED_BY_REQUIRED: &str = "Created by is required";
pub const MSG_CREATED_BY_LENGTH: &str = "Created by must be less than 100 characters";

/// Validate the wire form of a create request.
///
/// A missing or whitespace-only field reports the "required" message; the
/// length messages only apply to non-blank values.
pub fn validate(dto: &EvidenceDto) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    match dto.testimony.as_deref() {
        None => violations.push(MSG_TESTIMONY_REQUIRED.to_string()),
        Some(t) if t.trim().is_empty() => violations.push(MSG_TESTIMONY_REQUIRED.to_string()),
        Some(t) => {
            let len = t.chars().count();
            if !(TESTIMONY_MIN_CHARS..=TESTIMONY_MAX_CHARS).contains(&len) {
                violations.push(MSG_TESTIMONY_LENGTH.to_string());
            }
        }
    }

    match dto.created_by.as_deref() {
        None => violations.push(MSG_CREATED_BY_REQUIRED.to_string()),
        Some(c) if c.trim().is_empty() => violations.push(MSG_CREATED_BY_REQUIRED.to_string()),
        Some(c) => {
            if c.chars().count() > CREATED_BY_MAX_CHARS {
                violations.push(MSG_CREATED_BY_LENGTH.to_string());
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}
