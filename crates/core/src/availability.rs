//! Room availability rules: date-range validation and the overlap check
//! used when a booking request names a preferred room.
//!
//! The repository layer runs the same comparison in SQL when scanning
//! `room_schedules`; this module is the single in-process definition of
//! the rule so handler-level checks and tests agree with the query.

use chrono::NaiveDate;

use crate::error::CoreError;

/// A validated booking date range.
///
/// Construction enforces `end > start`, so a `DateRange` can never be
/// empty or inverted. Both bounds are calendar dates; time-of-day is not
/// part of the booking model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end <= start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end <= start {
            return Err(CoreError::Validation(
                "End date must be strictly after start date".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether this range overlaps `[other_start, other_end]`.
    ///
    /// Bounds are compared inclusively on both sides: an entry ending on
    /// the candidate's start date still counts as an overlap, so a
    /// checkout day blocks a same-day checkin. See DESIGN.md for why the
    /// boundary stays inclusive.
    pub fn overlaps(&self, other_start: NaiveDate, other_end: NaiveDate) -> bool {
        other_start <= self.end && other_end >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn d(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    #[test]
    fn rejects_equal_dates() {
        let result = DateRange::new(d("2024-07-01"), d("2024-07-01"));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_inverted_dates() {
        let result = DateRange::new(d("2024-07-10"), d("2024-07-01"));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn accepts_single_night() {
        let range = DateRange::new(d("2024-07-01"), d("2024-07-02")).unwrap();
        assert_eq!(range.start(), d("2024-07-01"));
        assert_eq!(range.end(), d("2024-07-02"));
    }

    #[test]
    fn contained_entry_overlaps() {
        let range = DateRange::new(d("2024-07-01"), d("2024-07-31")).unwrap();
        assert!(range.overlaps(d("2024-07-10"), d("2024-07-12")));
    }

    #[test]
    fn partial_overlap_at_tail() {
        // Occupied 07-01..07-10, request 07-05..07-12: rejected.
        let range = DateRange::new(d("2024-07-05"), d("2024-07-12")).unwrap();
        assert!(range.overlaps(d("2024-07-01"), d("2024-07-10")));
    }

    #[test]
    fn disjoint_later_range_does_not_overlap() {
        // Occupied 07-01..07-10, request 07-11..07-15: accepted.
        let range = DateRange::new(d("2024-07-11"), d("2024-07-15")).unwrap();
        assert!(!range.overlaps(d("2024-07-01"), d("2024-07-10")));
    }

    #[test]
    fn disjoint_earlier_range_does_not_overlap() {
        let range = DateRange::new(d("2024-06-01"), d("2024-06-10")).unwrap();
        assert!(!range.overlaps(d("2024-07-01"), d("2024-07-10")));
    }

    #[test]
    fn shared_boundary_day_counts_as_overlap() {
        // Entry ends the day the candidate starts: inclusive rule blocks it.
        let range = DateRange::new(d("2024-07-10"), d("2024-07-15")).unwrap();
        assert!(range.overlaps(d("2024-07-01"), d("2024-07-10")));

        // Mirror case: entry starts the day the candidate ends.
        let range = DateRange::new(d("2024-07-01"), d("2024-07-10")).unwrap();
        assert!(range.overlaps(d("2024-07-10"), d("2024-07-20")));
    }
}
