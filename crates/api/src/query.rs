//! Shared query parameter types for API handlers.
//!
//! The list and export endpoints accept the same filter parameters, so
//! the criteria conversion lives here rather than in each handler.

use chrono::NaiveDate;
use serde::Deserialize;

use opdreg_core::filter::FilterCriteria;

/// Filter parameters (`?search=&gender=&type=&department=&date_from=&date_to=`).
///
/// `gender` and `type` accept comma-separated sets (`gender=male,female`);
/// a single value is the one-element set. Unknown labels in a set are
/// dropped rather than rejected, so they contribute no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "type")]
    pub patient_type: Option<String>,
    pub department: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterParams {
    /// Convert into the filter engine's criteria object.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.unwrap_or_default(),
            genders: parse_set(self.gender.as_deref()),
            patient_types: parse_set(self.patient_type.as_deref()),
            department: self.department,
            date_from: self.date_from,
            date_to: self.date_to,
        }
    }
}

/// Parse a comma-separated set parameter, dropping unparseable labels.
fn parse_set<T: std::str::FromStr>(raw: Option<&str>) -> Vec<T> {
    raw.map(|value| {
        value
            .split(',')
            .filter_map(|label| label.trim().parse().ok())
            .collect()
    })
    .unwrap_or_default()
}

/// Pagination parameters (`?page=&page_size=`).
///
/// Values are clamped in the handler via `clamp_page` / `clamp_page_size`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
