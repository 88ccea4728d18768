//! The shared column mapping.
//!
//! Both encoders pull cell values through the same extractor functions, so
//! the spreadsheet's wide layout and the PDF's compact layout agree on
//! what every column means. The PDF drops the two long free-text columns
//! (address, aadhar number) that do not fit a printed table.

use opdreg_core::registration::Registration;

/// Placeholder rendered for a missing optional field.
pub const MISSING: &str = "N/A";

/// One export column: header label plus cell extractor.
pub struct Column {
    pub header: &'static str,
    pub extract: fn(&Registration) -> String,
}

/// Spreadsheet layout: the full field set.
pub const SHEET_COLUMNS: &[Column] = &[
    Column { header: "Registration Number", extract: registration_number },
    Column { header: "Patient Name", extract: name },
    Column { header: "Age", extract: age },
    Column { header: "Gender", extract: gender },
    Column { header: "Room Number", extract: room_number },
    Column { header: "Department", extract: department },
    Column { header: "Type", extract: patient_type },
    Column { header: "Mobile Number", extract: mobile_number },
    Column { header: "Address", extract: address },
    Column { header: "Aadhar Number", extract: aadhar_number },
    Column { header: "Created Date", extract: created_date },
];

/// PDF layout: the compact report subset, same extractors.
pub const DOCUMENT_COLUMNS: &[Column] = &[
    Column { header: "Reg. No.", extract: registration_number },
    Column { header: "Patient Name", extract: name },
    Column { header: "Age", extract: age },
    Column { header: "Gender", extract: gender },
    Column { header: "Room", extract: room_number },
    Column { header: "Department", extract: department },
    Column { header: "Type", extract: patient_type },
    Column { header: "Mobile", extract: mobile_number },
    Column { header: "Date", extract: created_date },
];

/// Extract one row of cell values in column order.
pub fn row_values(columns: &[Column], record: &Registration) -> Vec<String> {
    columns.iter().map(|c| (c.extract)(record)).collect()
}

/// Registration numbers are zero-padded to six digits in reports.
pub fn format_registration_number(number: i64) -> String {
    format!("{number:06}")
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

fn registration_number(r: &Registration) -> String {
    format_registration_number(r.registration_number)
}

fn name(r: &Registration) -> String {
    r.name.clone()
}

fn age(r: &Registration) -> String {
    r.age.to_string()
}

fn gender(r: &Registration) -> String {
    r.gender.label().to_string()
}

fn room_number(r: &Registration) -> String {
    optional(r.room_number.as_deref())
}

fn department(r: &Registration) -> String {
    r.department.clone()
}

fn patient_type(r: &Registration) -> String {
    r.patient_type.as_str().to_string()
}

fn mobile_number(r: &Registration) -> String {
    optional(r.mobile_number.as_deref())
}

fn address(r: &Registration) -> String {
    optional(r.address.as_deref())
}

fn aadhar_number(r: &Registration) -> String {
    optional(r.aadhar_number.as_deref())
}

fn created_date(r: &Registration) -> String {
    r.created_at.format("%d %b %Y").to_string()
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
