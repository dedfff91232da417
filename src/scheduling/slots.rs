//! Slot slicing with grid alignment.

use crate::models::{time_from_minutes, FreeInterval, TimeSlot};

/// Round minutes-since-midnight up to the next multiple of `grid_minutes`.
///
/// Grid 0 means no rounding. Rounding is always upward, for both the first
/// cursor and every post-gap advance, so slots never start before the free
/// interval actually begins. The flip side: when a free interval's length is
/// not a multiple of the grid, the trailing sub-grid minutes are unreachable
/// as slot starts.
pub fn round_up_to_grid(minutes: i32, grid_minutes: i32) -> i32 {
    if grid_minutes == 0 {
        return minutes;
    }
    let remainder = minutes.rem_euclid(grid_minutes);
    if remainder == 0 {
        minutes
    } else {
        minutes + (grid_minutes - remainder)
    }
}

/// Cut a free interval into fixed-duration slots.
///
/// The cursor starts at the grid-aligned interval start; a slot is emitted
/// whenever `cursor + duration` still fits, then the cursor advances past the
/// slot plus the minimum gap and re-aligns upward. Terminates because every
/// iteration advances the cursor by at least `duration_minutes`.
pub fn slice_slots(
    free: &FreeInterval,
    duration_minutes: i32,
    grid_minutes: i32,
    min_gap_minutes: i32,
) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut cursor = round_up_to_grid(free.start, grid_minutes);

    loop {
        let slot_end = cursor + duration_minutes;
        if slot_end > free.end {
            break;
        }

        // Buffered intervals keep free intervals inside [0, 1440); a slot that
        // somehow falls outside simply cannot be represented as wall-clock.
        if let (Some(start), Some(end)) = (time_from_minutes(cursor), time_from_minutes(slot_end)) {
            slots.push(TimeSlot {
                date: free.date,
                start,
                end,
                duration_minutes,
            });
        }

        cursor = round_up_to_grid(cursor + duration_minutes + min_gap_minutes, grid_minutes);
    }

    slots
}
