//! Export encoders for registration reports.
//!
//! Two stateless transforms over the full filtered record set: a
//! spreadsheet (`.xlsx`) and a paginated PDF document. Both share one
//! semantic column mapping ([`columns`]) so a row means the same thing in
//! either artifact, and both render missing optional fields as a fixed
//! placeholder rather than an ambiguous blank.

pub mod columns;
pub mod document;
pub mod error;
pub mod sheet;

pub use document::encode_document;
pub use error::ExportError;
pub use sheet::encode_spreadsheet;
