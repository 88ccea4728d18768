//! Repository for the `registrations` table.

use sqlx::PgPool;
use uuid::Uuid;

use opdreg_core::registration::Registration;

use crate::models::registration::{CreateRegistration, RegistrationRow};

const COLUMNS: &str = "id, registration_number, name, age, gender, department, patient_type, \
     room_number, address, aadhar_number, mobile_number, created_at, updated_at";

/// Provides insert and read operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a new registration.
    ///
    /// When `input.registration_number` is `None` the statement assigns
    /// `max + 1` itself; the `uq_registrations_registration_number` index
    /// turns a concurrent duplicate into a unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations \
                (registration_number, name, age, gender, department, patient_type, \
                 room_number, address, aadhar_number, mobile_number) \
             VALUES \
                (COALESCE($1, (SELECT COALESCE(MAX(registration_number), 0) + 1 \
                               FROM registrations)), \
                 $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RegistrationRow>(&query)
            .bind(input.registration_number)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.gender.as_str())
            .bind(&input.department)
            .bind(input.patient_type.as_str())
            .bind(&input.room_number)
            .bind(&input.address)
            .bind(&input.aadhar_number)
            .bind(&input.mobile_number)
            .fetch_one(pool)
            .await?;
        decode(row)
    }

    /// List all registrations, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, RegistrationRow>(&query)
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(decode).collect()
    }

    /// Find a registration by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        let row = sqlx::query_as::<_, RegistrationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(decode).transpose()
    }

    /// The highest registration number currently persisted, if any.
    pub async fn max_registration_number(pool: &PgPool) -> Result<Option<i64>, sqlx::Error> {
        let row: (Option<i64>,) =
            sqlx::query_as("SELECT MAX(registration_number) FROM registrations")
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Count all registrations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

/// Parse a raw row into the typed record, surfacing bad labels as a
/// decode error.
fn decode(row: RegistrationRow) -> Result<Registration, sqlx::Error> {
    row.try_into().map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
