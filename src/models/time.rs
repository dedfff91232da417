//! Wall-clock time helpers.
//!
//! The scheduling core works in minutes since midnight (`i32`) rather than
//! `chrono::NaiveTime`. `NaiveTime` arithmetic wraps around midnight, which
//! would silently corrupt buffered intervals that step outside 00:00–24:00;
//! plain integers keep that arithmetic honest. Conversion back to `NaiveTime`
//! happens only at the API boundary, where values are guaranteed in range.

use chrono::{NaiveTime, Timelike};

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Convert a wall-clock time to minutes since midnight.
pub fn minutes_of_day(t: NaiveTime) -> i32 {
    (t.hour() * 60 + t.minute()) as i32
}

/// Convert minutes since midnight back to a wall-clock time.
///
/// Returns `None` for values outside `[0, 1440)`, which can occur when buffer
/// expansion pushes an interval past a day boundary.
pub fn time_from_minutes(minutes: i32) -> Option<NaiveTime> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return None;
    }
    NaiveTime::from_hms_opt(minutes as u32 / 60, minutes as u32 % 60, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_minutes_of_day_midnight() {
        assert_eq!(minutes_of_day(hm(0, 0)), 0);
    }

    #[test]
    fn test_minutes_of_day_morning() {
        assert_eq!(minutes_of_day(hm(8, 30)), 510);
    }

    #[test]
    fn test_minutes_of_day_end_of_day() {
        assert_eq!(minutes_of_day(hm(23, 59)), 1439);
    }

    #[test]
    fn test_time_from_minutes_roundtrip() {
        for t in [hm(0, 0), hm(9, 15), hm(13, 0), hm(23, 59)] {
            assert_eq!(time_from_minutes(minutes_of_day(t)), Some(t));
        }
    }

    #[test]
    fn test_time_from_minutes_out_of_range() {
        assert_eq!(time_from_minutes(-10), None);
        assert_eq!(time_from_minutes(MINUTES_PER_DAY), None);
        assert_eq!(time_from_minutes(MINUTES_PER_DAY + 30), None);
    }
}
