//! Work window construction.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::models::{minutes_of_day, WorkWindow};

/// Build the ordered work windows for every business day in
/// `[date_start, date_end]` inclusive.
///
/// Saturdays and Sundays are skipped; each remaining day contributes one
/// window per entry in `daily_windows` (morning before afternoon). Callers
/// must reject an inverted range before calling; this function would simply
/// produce no windows for it.
pub fn build_work_windows(
    date_start: NaiveDate,
    date_end: NaiveDate,
    daily_windows: &[(NaiveTime, NaiveTime)],
) -> Vec<WorkWindow> {
    let mut windows = Vec::new();
    let mut date = date_start;

    while date <= date_end {
        let weekday = date.weekday();
        if weekday != Weekday::Sat && weekday != Weekday::Sun {
            for &(start, end) in daily_windows {
                windows.push(WorkWindow {
                    date,
                    start: minutes_of_day(start),
                    end: minutes_of_day(end),
                });
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break, // end of the calendar
        };
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_windows() -> Vec<(NaiveTime, NaiveTime)> {
        vec![(hm(8, 0), hm(12, 0)), (hm(13, 0), hm(18, 0))]
    }

    #[test]
    fn test_single_weekday_two_windows() {
        // 2025-03-10 is a Monday
        let windows = build_work_windows(ymd(2025, 3, 10), ymd(2025, 3, 10), &standard_windows());
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].start, 8 * 60);
        assert_eq!(windows[0].end, 12 * 60);
        assert_eq!(windows[1].start, 13 * 60);
        assert_eq!(windows[1].end, 18 * 60);
    }

    #[test]
    fn test_weekend_skipped() {
        // 2025-03-15 is a Saturday, 2025-03-16 a Sunday
        let windows = build_work_windows(ymd(2025, 3, 15), ymd(2025, 3, 16), &standard_windows());
        assert!(windows.is_empty());
    }

    #[test]
    fn test_full_week_ordering() {
        // Monday through Sunday: five business days, morning before afternoon
        let windows = build_work_windows(ymd(2025, 3, 10), ymd(2025, 3, 16), &standard_windows());
        assert_eq!(windows.len(), 10);
        for pair in windows.windows(2) {
            let earlier = (pair[0].date, pair[0].start);
            let later = (pair[1].date, pair[1].start);
            assert!(earlier < later);
        }
    }

    #[test]
    fn test_inverted_range_yields_nothing() {
        let windows = build_work_windows(ymd(2025, 3, 11), ymd(2025, 3, 10), &standard_windows());
        assert!(windows.is_empty());
    }
}
