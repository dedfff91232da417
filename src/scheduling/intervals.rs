//! Buffer expansion, sweep-line merging, and window subtraction.
//!
//! These are the interval primitives both entry points are built from. They
//! take and return immutable value types; no in-place mutation escapes any
//! function here.

use crate::models::{FreeInterval, OccupiedInterval, WorkWindow};

/// Widen each occupied interval by the configured buffers.
///
/// `start -= before`, `end += after`. Results may leave `[0, 1440)`; the core
/// does not wrap across days, and validation bounds the buffers callers can
/// request.
pub fn expand_buffers(
    occupied: &[OccupiedInterval],
    buffer_before_minutes: i32,
    buffer_after_minutes: i32,
) -> Vec<OccupiedInterval> {
    occupied
        .iter()
        .map(|o| OccupiedInterval {
            date: o.date,
            start: o.start - buffer_before_minutes,
            end: o.end + buffer_after_minutes,
        })
        .collect()
}

/// Merge overlapping or touching intervals into a minimal disjoint set.
///
/// Intervals are grouped per day: sorted by (date, start), then swept left to
/// right. A following interval whose start is not after the running end
/// (`next.start <= current.end`) is absorbed, extending the end to the max of
/// the two. Touching counts as overlap here, so the output never contains two
/// adjacent intervals on the same day. Idempotent.
pub fn merge_intervals(occupied: &[OccupiedInterval]) -> Vec<OccupiedInterval> {
    if occupied.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<OccupiedInterval> = occupied.to_vec();
    sorted.sort_by_key(|o| (o.date, o.start));

    let mut merged = Vec::new();
    let mut current = sorted[0];

    for next in sorted.into_iter().skip(1) {
        if next.date == current.date && next.start <= current.end {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

/// Subtract a day's merged occupancy from one work window.
///
/// A cursor starts at the window's start; each occupied interval on the
/// window's date either opens a free gap before it or just advances the
/// cursor. Whatever remains before the window's end is the final gap.
/// Zero-length and negative gaps are dropped. `occupied` must be sorted by
/// start, which [`merge_intervals`] guarantees.
pub fn subtract_occupied(window: &WorkWindow, occupied: &[OccupiedInterval]) -> Vec<FreeInterval> {
    let mut free = Vec::new();
    let mut cursor = window.start;

    for o in occupied.iter().filter(|o| o.date == window.date) {
        let gap_end = o.start.min(window.end);
        if gap_end > cursor {
            free.push(FreeInterval {
                date: window.date,
                start: cursor,
                end: gap_end,
            });
        }
        cursor = cursor.max(o.end);
    }

    if cursor < window.end {
        free.push(FreeInterval {
            date: window.date,
            start: cursor,
            end: window.end,
        });
    }

    free
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn occ(date: NaiveDate, start: i32, end: i32) -> OccupiedInterval {
        OccupiedInterval { date, start, end }
    }

    #[test]
    fn test_expand_buffers() {
        let date = ymd(2025, 3, 10);
        let expanded = expand_buffers(&[occ(date, 9 * 60, 10 * 60)], 10, 10);
        assert_eq!(expanded, vec![occ(date, 8 * 60 + 50, 10 * 60 + 10)]);
    }

    #[test]
    fn test_expand_buffers_can_leave_day_bounds() {
        let date = ymd(2025, 3, 10);
        let expanded = expand_buffers(&[occ(date, 0, 23 * 60 + 50)], 15, 15);
        assert_eq!(expanded[0].start, -15);
        assert_eq!(expanded[0].end, 24 * 60 + 5);
    }

    #[test]
    fn test_merge_overlapping() {
        let date = ymd(2025, 3, 10);
        let merged = merge_intervals(&[
            occ(date, 540, 600),
            occ(date, 570, 660),
            occ(date, 700, 730),
        ]);
        assert_eq!(merged, vec![occ(date, 540, 660), occ(date, 700, 730)]);
    }

    #[test]
    fn test_merge_touching_is_absorbed() {
        let date = ymd(2025, 3, 10);
        let merged = merge_intervals(&[occ(date, 540, 600), occ(date, 600, 630)]);
        assert_eq!(merged, vec![occ(date, 540, 630)]);
    }

    #[test]
    fn test_merge_contained_interval() {
        let date = ymd(2025, 3, 10);
        let merged = merge_intervals(&[occ(date, 540, 700), occ(date, 560, 580)]);
        assert_eq!(merged, vec![occ(date, 540, 700)]);
    }

    #[test]
    fn test_merge_separate_days_not_combined() {
        let merged = merge_intervals(&[
            occ(ymd(2025, 3, 10), 540, 600),
            occ(ymd(2025, 3, 11), 540, 600),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_idempotent() {
        let date = ymd(2025, 3, 10);
        let input = vec![
            occ(date, 540, 600),
            occ(date, 590, 650),
            occ(date, 800, 850),
        ];
        let once = merge_intervals(&input);
        let twice = merge_intervals(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_coverage_preserved() {
        // Coverage of the merged output equals coverage of the input, and no
        // two output intervals overlap or touch.
        let date = ymd(2025, 3, 10);
        let input = vec![
            occ(date, 500, 560),
            occ(date, 550, 620),
            occ(date, 620, 640),
            occ(date, 700, 720),
        ];
        let merged = merge_intervals(&input);

        let covered = |intervals: &[OccupiedInterval], minute: i32| {
            intervals.iter().any(|o| o.start <= minute && minute < o.end)
        };
        for minute in 480..780 {
            assert_eq!(covered(&input, minute), covered(&merged, minute));
        }
        for pair in merged.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_subtract_no_occupancy_full_window() {
        let window = WorkWindow {
            date: ymd(2025, 3, 10),
            start: 480,
            end: 720,
        };
        let free = subtract_occupied(&window, &[]);
        assert_eq!(free.len(), 1);
        assert_eq!((free[0].start, free[0].end), (480, 720));
    }

    #[test]
    fn test_subtract_middle_occupancy() {
        // Hearing 09:00–10:00 with 10/10 buffers in window 08:00–12:00:
        // occupied 08:50–10:10, free 08:00–08:50 and 10:10–12:00.
        let date = ymd(2025, 3, 10);
        let window = WorkWindow {
            date,
            start: 480,
            end: 720,
        };
        let occupied = merge_intervals(&expand_buffers(&[occ(date, 540, 600)], 10, 10));
        let free = subtract_occupied(&window, &occupied);
        assert_eq!(free.len(), 2);
        assert_eq!((free[0].start, free[0].end), (480, 530));
        assert_eq!((free[1].start, free[1].end), (610, 720));
    }

    #[test]
    fn test_subtract_occupancy_covering_window() {
        let date = ymd(2025, 3, 10);
        let window = WorkWindow {
            date,
            start: 480,
            end: 720,
        };
        let free = subtract_occupied(&window, &[occ(date, 400, 800)]);
        assert!(free.is_empty());
    }

    #[test]
    fn test_subtract_occupancy_at_window_edges() {
        let date = ymd(2025, 3, 10);
        let window = WorkWindow {
            date,
            start: 480,
            end: 720,
        };
        let occupied = vec![occ(date, 480, 510), occ(date, 690, 720)];
        let free = subtract_occupied(&window, &occupied);
        assert_eq!(free, vec![FreeInterval {
            date,
            start: 510,
            end: 690,
        }]);
    }

    #[test]
    fn test_subtract_ignores_other_days() {
        let window = WorkWindow {
            date: ymd(2025, 3, 10),
            start: 480,
            end: 720,
        };
        let free = subtract_occupied(&window, &[occ(ymd(2025, 3, 11), 480, 720)]);
        assert_eq!(free.len(), 1);
    }

    #[test]
    fn test_subtract_coverage_partition() {
        // Free intervals plus occupied (clipped to the window) tile the window
        // exactly, with no overlap between free and occupied.
        let date = ymd(2025, 3, 10);
        let window = WorkWindow {
            date,
            start: 480,
            end: 720,
        };
        let occupied = merge_intervals(&[occ(date, 500, 540), occ(date, 600, 630)]);
        let free = subtract_occupied(&window, &occupied);

        for minute in window.start..window.end {
            let in_free = free.iter().any(|f| f.start <= minute && minute < f.end);
            let in_occ = occupied
                .iter()
                .any(|o| o.start <= minute && minute < o.end);
            assert!(in_free != in_occ, "minute {} must be exactly one of free/occupied", minute);
        }
    }
}
