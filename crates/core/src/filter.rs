//! The record filter engine.
//!
//! A record matches when it satisfies the conjunction of all active
//! predicates; an empty or unset criterion contributes no constraint.
//! The function never sorts: output preserves input order (the store
//! lists newest-first), and identical inputs always produce identical
//! output.

use chrono::NaiveDate;

use crate::registration::{Gender, PatientType, Registration};

/// Sentinel department value meaning "no department filter".
pub const ALL_DEPARTMENTS: &str = "all";

/// User-controlled predicate set narrowing the visible/exported subset.
///
/// Lives only for the duration of a request; never persisted. Single-select
/// categorical filters are the degenerate case of a one-element set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name or registration number.
    pub search: String,
    /// Empty set means no gender constraint.
    pub genders: Vec<Gender>,
    /// Empty set means no type constraint.
    pub patient_types: Vec<PatientType>,
    /// `None`, blank, or [`ALL_DEPARTMENTS`] means no department constraint.
    pub department: Option<String>,
    /// Inclusive lower bound on the record's calendar date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound; the whole day counts (end-of-day semantics).
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Whether any predicate is active.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.genders.is_empty()
            || !self.patient_types.is_empty()
            || self.department_filter().is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// The concrete department constraint, with sentinels normalized away.
    fn department_filter(&self) -> Option<&str> {
        self.department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty() && !d.eq_ignore_ascii_case(ALL_DEPARTMENTS))
    }
}

/// Reduce a record set to the subset matching `criteria`, preserving order.
pub fn filter(records: &[Registration], criteria: &FilterCriteria) -> Vec<Registration> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &Registration, criteria: &FilterCriteria) -> bool {
    let search = criteria.search.trim().to_lowercase();
    if !search.is_empty() {
        let in_name = record.name.to_lowercase().contains(&search);
        // Registration numbers match on the unpadded decimal rendering.
        let in_number = record.registration_number.to_string().contains(&search);
        if !in_name && !in_number {
            return false;
        }
    }

    if !criteria.genders.is_empty() && !criteria.genders.contains(&record.gender) {
        return false;
    }

    if !criteria.patient_types.is_empty()
        && !criteria.patient_types.contains(&record.patient_type)
    {
        return false;
    }

    if let Some(department) = criteria.department_filter() {
        if record.department != department {
            return false;
        }
    }

    // Calendar-date comparison gives the inclusive end-of-day semantics:
    // a record created any time on `date_to` still passes.
    let record_date = record.created_at.date_naive();
    if let Some(from) = criteria.date_from {
        if record_date < from {
            return false;
        }
    }
    if let Some(to) = criteria.date_to {
        if record_date > to {
            return false;
        }
    }

    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn record(
        number: i64,
        name: &str,
        gender: Gender,
        patient_type: PatientType,
        department: &str,
        day: u32,
    ) -> Registration {
        Registration {
            id: Uuid::from_u128(number as u128),
            registration_number: number,
            name: name.to_string(),
            age: 30,
            gender,
            department: department.to_string(),
            patient_type,
            room_number: None,
            address: None,
            aadhar_number: None,
            mobile_number: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, day, 23, 15, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, day, 23, 15, 0).unwrap(),
        }
    }

    fn fixture() -> Vec<Registration> {
        vec![
            record(1003, "Ravi Kumar", Gender::Male, PatientType::General, "Cardiology", 7),
            record(1002, "Meena Devi", Gender::Female, PatientType::Anc, "Gynecology", 6),
            record(1001, "Arun Raj", Gender::Male, PatientType::Jssk, "Pediatrics", 5),
        ]
    }

    // -- inactive criteria ---------------------------------------------------

    #[test]
    fn empty_criteria_pass_everything_in_order() {
        let records = fixture();
        let result = filter(&records, &FilterCriteria::default());
        assert_eq!(result, records);
    }

    #[test]
    fn all_sentinel_department_is_no_filter() {
        let records = fixture();
        for sentinel in ["all", "All", ""] {
            let criteria = FilterCriteria {
                department: Some(sentinel.to_string()),
                ..FilterCriteria::default()
            };
            assert_eq!(filter(&records, &criteria).len(), 3, "sentinel {sentinel:?}");
            assert!(!criteria.is_active());
        }
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_matches_name_case_insensitively() {
        let records = fixture();
        let criteria = FilterCriteria {
            search: "  MEENA ".to_string(),
            ..FilterCriteria::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].registration_number, 1002);
    }

    #[test]
    fn search_matches_registration_number_substring() {
        let records = fixture();
        let criteria = FilterCriteria {
            search: "1001".to_string(),
            ..FilterCriteria::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Arun Raj");

        // A shared prefix matches every number containing it.
        let criteria = FilterCriteria {
            search: "100".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&records, &criteria).len(), 3);
    }

    // -- categorical sets ----------------------------------------------------

    #[test]
    fn gender_set_membership() {
        let records = fixture();
        let criteria = FilterCriteria {
            genders: vec![Gender::Female],
            ..FilterCriteria::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].registration_number, 1002);

        let criteria = FilterCriteria {
            genders: vec![Gender::Male, Gender::Female],
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&records, &criteria).len(), 3);
    }

    #[test]
    fn type_set_membership() {
        let records = fixture();
        let criteria = FilterCriteria {
            patient_types: vec![PatientType::Anc, PatientType::Jssk],
            ..FilterCriteria::default()
        };
        let numbers: Vec<_> = filter(&records, &criteria)
            .iter()
            .map(|r| r.registration_number)
            .collect();
        assert_eq!(numbers, [1002, 1001]);
    }

    #[test]
    fn department_exact_match() {
        let records = fixture();
        let criteria = FilterCriteria {
            department: Some("Cardiology".to_string()),
            ..FilterCriteria::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].registration_number, 1003);
    }

    // -- date range ----------------------------------------------------------

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let records = fixture();
        let criteria = FilterCriteria {
            date_from: NaiveDate::from_ymd_opt(2025, 3, 5),
            date_to: NaiveDate::from_ymd_opt(2025, 3, 6),
            ..FilterCriteria::default()
        };
        let numbers: Vec<_> = filter(&records, &criteria)
            .iter()
            .map(|r| r.registration_number)
            .collect();
        assert_eq!(numbers, [1002, 1001]);
    }

    #[test]
    fn date_to_counts_the_whole_day() {
        // Fixture records are created at 23:15; a date_to equal to their
        // calendar date must still include them.
        let records = fixture();
        let criteria = FilterCriteria {
            date_to: NaiveDate::from_ymd_opt(2025, 3, 7),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&records, &criteria).len(), 3);
    }

    #[test]
    fn conjunction_of_predicates() {
        let records = fixture();
        let criteria = FilterCriteria {
            genders: vec![Gender::Male],
            date_from: NaiveDate::from_ymd_opt(2025, 3, 6),
            ..FilterCriteria::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].registration_number, 1003);
    }

    // -- properties ----------------------------------------------------------

    #[test]
    fn filter_is_idempotent() {
        let records = fixture();
        let criterias = [
            FilterCriteria::default(),
            FilterCriteria {
                search: "ra".to_string(),
                genders: vec![Gender::Male],
                ..FilterCriteria::default()
            },
            FilterCriteria {
                patient_types: vec![PatientType::Anc],
                date_to: NaiveDate::from_ymd_opt(2025, 3, 6),
                ..FilterCriteria::default()
            },
        ];
        for criteria in &criterias {
            let once = filter(&records, criteria);
            let twice = filter(&once, criteria);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let records = fixture();
        let loose = FilterCriteria {
            search: "ra".to_string(),
            ..FilterCriteria::default()
        };
        let tight = FilterCriteria {
            genders: vec![Gender::Female],
            ..loose.clone()
        };
        assert!(filter(&records, &tight).len() <= filter(&records, &loose).len());
    }
}
