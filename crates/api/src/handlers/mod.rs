//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repository in `opdreg_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod export;
pub mod registration;
