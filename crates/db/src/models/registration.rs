//! Registration row model and insert DTO.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use opdreg_core::error::ParseLabelError;
use opdreg_core::registration::{Gender, NewRegistration, PatientType, Registration};

/// A raw row from the `registrations` table.
///
/// Enum-backed columns come back as text and are parsed in the
/// [`TryFrom`] conversion; a label the domain does not know is a decode
/// error, never a silently defaulted value.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub registration_number: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub department: String,
    pub patient_type: String,
    pub room_number: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = ParseLabelError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration {
            id: row.id,
            registration_number: row.registration_number,
            name: row.name,
            age: row.age,
            gender: row.gender.parse()?,
            department: row.department,
            patient_type: row.patient_type.parse()?,
            room_number: row.room_number,
            address: row.address,
            aadhar_number: row.aadhar_number,
            mobile_number: row.mobile_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for inserting a new registration.
///
/// `registration_number` is `None` when the store should assign the next
/// number itself; a caller-supplied value is honored subject to the
/// unique index.
#[derive(Debug, Clone)]
pub struct CreateRegistration {
    pub registration_number: Option<i64>,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub department: String,
    pub patient_type: PatientType,
    pub room_number: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub mobile_number: Option<String>,
}

impl CreateRegistration {
    /// Build the insert DTO from a validated form result.
    pub fn from_new(new: NewRegistration, registration_number: Option<i64>) -> Self {
        Self {
            registration_number,
            name: new.name,
            age: new.age,
            gender: new.gender,
            department: new.department,
            patient_type: new.patient_type,
            room_number: new.room_number,
            address: new.address,
            aadhar_number: new.aadhar_number,
            mobile_number: new.mobile_number,
        }
    }
}
