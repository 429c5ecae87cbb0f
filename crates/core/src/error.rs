/// Error taxonomy for the create path.
///
/// Store-side failures are a separate type owned by the server crate; the
/// only error the domain itself produces is a validation failure.
use thiserror::Error;

/// A create request that failed field validation. Carries every violated
/// constraint so the caller sees all problems in one response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", .violations.join(", "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}
