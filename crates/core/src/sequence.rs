//! Registration number sequencing arithmetic.
//!
//! The number shown on the entry form is advisory: it previews what the
//! store will assign, and nothing is reserved until the insert succeeds.
//! The store itself assigns the persisted number atomically under a unique
//! index, so the preview can be stale but the persisted sequence cannot
//! collide.

use crate::types::RegistrationNumber;

/// The next registration number given the store's current maximum.
///
/// An empty store starts the sequence at 1.
pub fn next_registration_number(max: Option<RegistrationNumber>) -> RegistrationNumber {
    max.map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_the_current_maximum() {
        assert_eq!(next_registration_number(Some(1005)), 1006);
        assert_eq!(next_registration_number(Some(1)), 2);
    }

    #[test]
    fn empty_store_starts_at_one() {
        assert_eq!(next_registration_number(None), 1);
    }
}
