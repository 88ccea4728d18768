//! The registration record and its closed vocabularies.
//!
//! One schema covers every revision of the entry form: fields added over
//! time (room number) are nullable rather than forked into parallel types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseLabelError;
use crate::types::{RegistrationNumber, Timestamp};

// ---------------------------------------------------------------------------
// Closed vocabularies
// ---------------------------------------------------------------------------

/// Patient gender. Stored and serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    /// The stored/wire form (`male`, `female`, `others`).
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Others => "others",
        }
    }

    /// Capitalized display form used in reports (`Male`, `Female`, `Others`).
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "others" => Ok(Gender::Others),
            _ => Err(ParseLabelError {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visit category. Stored and serialized in its conventional casing
/// (`ANC`, `General`, `JSSK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientType {
    #[serde(rename = "ANC")]
    Anc,
    General,
    #[serde(rename = "JSSK")]
    Jssk,
}

impl PatientType {
    pub fn as_str(self) -> &'static str {
        match self {
            PatientType::Anc => "ANC",
            PatientType::General => "General",
            PatientType::Jssk => "JSSK",
        }
    }
}

impl FromStr for PatientType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anc" => Ok(PatientType::Anc),
            "general" => Ok(PatientType::General),
            "jssk" => Ok(PatientType::Jssk),
            _ => Err(ParseLabelError {
                kind: "patient type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PatientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

/// The fixed list of departments a registration can be filed under.
pub const DEPARTMENTS: &[&str] = &[
    "Cardiology",
    "Dermatology",
    "Emergency",
    "ENT",
    "Gastroenterology",
    "General Medicine",
    "Gynecology",
    "Neurology",
    "Oncology",
    "Orthopedics",
    "Pediatrics",
    "Psychiatry",
    "Radiology",
    "Surgery",
    "Urology",
];

/// Check whether a department name is a member of the fixed list.
pub fn is_valid_department(department: &str) -> bool {
    DEPARTMENTS.contains(&department)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A persisted patient registration.
///
/// `id`, `registration_number`, `created_at`, and `updated_at` are assigned
/// by the store on insert. `registration_number` is never altered after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub id: Uuid,
    pub registration_number: RegistrationNumber,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub department: String,
    #[serde(rename = "type")]
    pub patient_type: PatientType,
    pub room_number: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated registration ready for insertion.
///
/// Produced only by [`crate::form::validate`]; optional fields are `None`
/// when blank, never an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Gender --------------------------------------------------------------

    #[test]
    fn gender_round_trips_through_str() {
        for gender in [Gender::Male, Gender::Female, Gender::Others] {
            assert_eq!(gender.as_str().parse::<Gender>().ok(), Some(gender));
        }
    }

    #[test]
    fn gender_parse_is_case_insensitive() {
        assert_eq!("Female".parse::<Gender>().ok(), Some(Gender::Female));
        assert_eq!("MALE".parse::<Gender>().ok(), Some(Gender::Male));
    }

    #[test]
    fn gender_rejects_unknown_label() {
        assert!("unknown".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_label_is_capitalized() {
        assert_eq!(Gender::Male.label(), "Male");
        assert_eq!(Gender::Others.label(), "Others");
    }

    // -- PatientType ---------------------------------------------------------

    #[test]
    fn patient_type_round_trips_through_str() {
        for ty in [PatientType::Anc, PatientType::General, PatientType::Jssk] {
            assert_eq!(ty.as_str().parse::<PatientType>().ok(), Some(ty));
        }
    }

    #[test]
    fn patient_type_serializes_conventional_casing() {
        assert_eq!(
            serde_json::to_string(&PatientType::Anc).unwrap(),
            "\"ANC\""
        );
        assert_eq!(
            serde_json::to_string(&PatientType::General).unwrap(),
            "\"General\""
        );
        assert_eq!(
            serde_json::to_string(&PatientType::Jssk).unwrap(),
            "\"JSSK\""
        );
    }

    // -- Departments ---------------------------------------------------------

    #[test]
    fn valid_departments() {
        assert!(is_valid_department("Cardiology"));
        assert!(is_valid_department("General Medicine"));
        assert!(is_valid_department("Urology"));
    }

    #[test]
    fn invalid_departments() {
        assert!(!is_valid_department("cardiology"));
        assert!(!is_valid_department("all"));
        assert!(!is_valid_department(""));
    }
}
