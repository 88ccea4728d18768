//! Domain logic for the OPD registration service.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the export encoders, and the API alike. Everything
//! here is synchronous and pure: record types, form validation, the
//! filter engine, the pagination slicer, and registration sequencing
//! arithmetic. Store access lives in `opdreg-db`.

pub mod error;
pub mod filter;
pub mod form;
pub mod paging;
pub mod registration;
pub mod sequence;
pub mod types;
