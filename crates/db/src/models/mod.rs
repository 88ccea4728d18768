//! Row models and insert DTOs for the registration table.

pub mod registration;
