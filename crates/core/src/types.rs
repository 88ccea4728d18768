/// Registration numbers are a human-facing BIGINT sequence.
pub type RegistrationNumber = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
