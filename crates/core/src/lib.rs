//! Evidence domain types: the persisted record, its wire form, translation
//! between the two, and field validation. No I/O lives here.

pub mod dto;
pub mod error;
pub mod evidence;
pub mod mapper;
pub mod validation;


pub use dto::EvidenceDto;
pub use error::ValidationError;
pub use evidence::{Evidence, NewEvidence};
pub use mapper::{to_record, to_wire};
pub use validation::validate;
