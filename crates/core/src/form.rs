//! Entry-form validation.
//!
//! [`RegistrationForm`] is the raw field bag exactly as a data-entry
//! front-end submits it: every field text, age included. [`validate`] is a
//! pure transformation into a [`NewRegistration`]; submission to the store
//! is a separate step the caller performs only on success.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::registration::{is_valid_department, Gender, NewRegistration, PatientType};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw, unvalidated form fields.
///
/// Every field defaults to blank so a missing key and an empty input are
/// the same case: a per-field validation error, not a deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub department: String,
    #[serde(rename = "type")]
    pub patient_type: String,
    pub room_number: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub mobile_number: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Field-keyed validation errors, in fixed field order.
///
/// Serializes as a JSON object (`{ "age": "Age must be a number", ... }`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Field names in recorded order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(name, _)| *name)
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in &self.errors {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw form into an insert-ready record.
///
/// Eager: one pass collects an error for every failing field, keyed in
/// fixed field order (name, age, gender, department, type). Optional
/// strings are trimmed and normalized to `None` when blank.
pub fn validate(form: &RegistrationForm) -> Result<NewRegistration, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    }

    let age = match form.age.trim() {
        "" => {
            errors.push("age", "Age is required");
            None
        }
        raw => match raw.parse::<i32>() {
            Ok(age) if (1..=150).contains(&age) => Some(age),
            Ok(_) => {
                errors.push("age", "Age must be between 1 and 150");
                None
            }
            Err(_) => {
                errors.push("age", "Age must be a number");
                None
            }
        },
    };

    let gender = match form.gender.trim().parse::<Gender>() {
        Ok(gender) => Some(gender),
        Err(_) => {
            errors.push("gender", "Please select gender");
            None
        }
    };

    let department = form.department.trim();
    if department.is_empty() {
        errors.push("department", "Department is required");
    } else if !is_valid_department(department) {
        errors.push("department", "Unknown department");
    }

    let patient_type = match form.patient_type.trim().parse::<PatientType>() {
        Ok(patient_type) => Some(patient_type),
        Err(_) => {
            errors.push("type", "Please select type");
            None
        }
    };

    if let (Some(age), Some(gender), Some(patient_type)) = (age, gender, patient_type) {
        if errors.is_empty() {
            return Ok(NewRegistration {
                name: name.to_string(),
                age,
                gender,
                department: department.to_string(),
                patient_type,
                room_number: normalize_optional(form.room_number.as_deref()),
                address: normalize_optional(form.address.as_deref()),
                aadhar_number: normalize_optional(form.aadhar_number.as_deref()),
                mobile_number: normalize_optional(form.mobile_number.as_deref()),
            });
        }
    }

    Err(errors)
}

/// Trim an optional input; blank becomes `None`, never `Some("")`.
fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
