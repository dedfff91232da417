//! Half-open interval overlap and conflict classification.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{minutes_of_day, CourtId, Hearing, HearingId};

/// A candidate hearing to check against existing occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictQuery {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_minutes: i32,
    pub court_id: CourtId,
    /// Set when re-validating an update so the hearing does not conflict
    /// with itself.
    #[serde(default)]
    pub exclude_hearing_id: Option<HearingId>,
}

/// Half-open overlap test: `[a_start, a_end)` meets `[b_start, b_end)` iff
/// `a_start < b_end && b_start < a_end`.
///
/// Both comparisons are strict: a hearing ending exactly when another starts
/// is not a conflict. Using `<=` anywhere here would produce false positives
/// at exact boundaries.
pub fn overlaps(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Classify which of `hearings` collide with the candidate.
///
/// Only hearings on the candidate's date and court are considered, the
/// excluded id (if any) is skipped, and the half-open [`overlaps`] rule
/// decides the rest. A non-empty result is a normal outcome; translating it
/// into a rejection is the caller's business.
pub fn find_conflicts(query: &ConflictQuery, hearings: &[Hearing]) -> Vec<Hearing> {
    let start = minutes_of_day(query.start);
    let end = start + query.duration_minutes;

    hearings
        .iter()
        .filter(|h| h.date == query.date && h.court_id == query.court_id)
        .filter(|h| match (query.exclude_hearing_id, h.id) {
            (Some(excluded), Some(id)) => excluded != id,
            _ => true,
        })
        .filter(|h| overlaps(start, end, minutes_of_day(h.start), minutes_of_day(h.end)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn hearing(id: i64, court: i64, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Hearing {
        Hearing {
            id: Some(HearingId::new(id)),
            case_number: format!("case-{}", id),
            court_id: CourtId::new(court),
            date,
            start,
            end,
        }
    }

    fn query(date: NaiveDate, start: NaiveTime, duration: i32, court: i64) -> ConflictQuery {
        ConflictQuery {
            date,
            start,
            duration_minutes: duration,
            court_id: CourtId::new(court),
            exclude_hearing_id: None,
        }
    }

    #[test]
    fn test_overlap_symmetry() {
        let cases = [
            (540, 600, 570, 630),
            (540, 600, 600, 660),
            (540, 600, 500, 550),
            (540, 600, 540, 600),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(overlaps(a1, a2, b1, b2), overlaps(b1, b2, a1, a2));
        }
    }

    #[test]
    fn test_boundary_touch_is_not_overlap() {
        // End meets start exactly, both directions
        assert!(!overlaps(540, 600, 600, 660));
        assert!(!overlaps(600, 660, 540, 600));
    }

    #[test]
    fn test_candidate_ending_at_existing_start_no_conflict() {
        // 10:00 + 30min against an existing 10:30–11:00 hearing
        let date = ymd(2025, 3, 10);
        let existing = vec![hearing(1, 1, date, hm(10, 30), hm(11, 0))];
        let conflicts = find_conflicts(&query(date, hm(10, 0), 30, 1), &existing);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_partial_overlap_is_conflict() {
        // 10:00 + 30min against an existing 09:45–10:15 hearing
        let date = ymd(2025, 3, 10);
        let existing = vec![hearing(1, 1, date, hm(9, 45), hm(10, 15))];
        let conflicts = find_conflicts(&query(date, hm(10, 0), 30, 1), &existing);
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn test_other_court_ignored() {
        let date = ymd(2025, 3, 10);
        let existing = vec![hearing(1, 2, date, hm(10, 0), hm(11, 0))];
        let conflicts = find_conflicts(&query(date, hm(10, 0), 60, 1), &existing);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_other_date_ignored() {
        let existing = vec![hearing(1, 1, ymd(2025, 3, 11), hm(10, 0), hm(11, 0))];
        let conflicts = find_conflicts(&query(ymd(2025, 3, 10), hm(10, 0), 60, 1), &existing);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_exclusion_prevents_self_conflict() {
        let date = ymd(2025, 3, 10);
        let existing = vec![hearing(7, 1, date, hm(10, 0), hm(11, 0))];

        let mut q = query(date, hm(10, 0), 60, 1);
        assert_eq!(find_conflicts(&q, &existing).len(), 1);

        q.exclude_hearing_id = Some(HearingId::new(7));
        assert!(find_conflicts(&q, &existing).is_empty());
    }

    #[test]
    fn test_multiple_conflicts_all_reported() {
        let date = ymd(2025, 3, 10);
        let existing = vec![
            hearing(1, 1, date, hm(9, 30), hm(10, 30)),
            hearing(2, 1, date, hm(10, 30), hm(11, 30)),
            hearing(3, 1, date, hm(13, 0), hm(14, 0)),
        ];
        // 10:00–11:00 overlaps the first two, not the afternoon one
        let conflicts = find_conflicts(&query(date, hm(10, 0), 60, 1), &existing);
        assert_eq!(conflicts.len(), 2);
    }
}
