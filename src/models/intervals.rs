//! Interval value types shared by the scheduling core.
//!
//! Standalone value types shared across the window builder, merger,
//! subtractor, and slicer. All of them are created fresh per request and
//! discarded with the response; nothing is persisted.
//!
//! Interval endpoints are minutes since midnight so that buffer expansion can
//! step outside 00:00–24:00 without wrapping (see [`crate::models::time`]).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A period of a single day during which hearings may be scheduled, e.g. a
/// morning or afternoon session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub date: NaiveDate,
    /// Start, minutes since midnight
    pub start: i32,
    /// End, minutes since midnight (exclusive)
    pub end: i32,
}

/// A time range rendered unavailable by an existing hearing, possibly widened
/// by buffers and merged with neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedInterval {
    pub date: NaiveDate,
    pub start: i32,
    pub end: i32,
}

/// The remainder of a work window after occupied time is subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeInterval {
    pub date: NaiveDate,
    pub start: i32,
    pub end: i32,
}

/// A candidate bookable slot sliced from a free interval. This is the unit
/// returned to callers of the free-slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Always equal to the requested duration; reported for client convenience.
    pub duration_minutes: i32,
}
