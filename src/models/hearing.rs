//! Hearing entity and identifier newtypes.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::time::minutes_of_day;

/// Identifier of a stored hearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HearingId(i64);

impl HearingId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier of a court (vara), the partitioning key for occupancy and
/// conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourtId(i64);

impl CourtId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A scheduled courtroom hearing.
///
/// `end` is derived from start + duration when the hearing is created; the
/// scheduling core only ever reads the fields needed for interval math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    /// Database ID (None until stored)
    pub id: Option<HearingId>,
    /// Case number the hearing belongs to
    pub case_number: String,
    /// Court the hearing is assigned to
    pub court_id: CourtId,
    /// Calendar date of the hearing
    pub date: NaiveDate,
    /// Wall-clock start time
    pub start: NaiveTime,
    /// Wall-clock end time (start + duration)
    pub end: NaiveTime,
}

impl Hearing {
    /// Duration in minutes, derived from the stored start/end pair.
    pub fn duration_minutes(&self) -> i32 {
        minutes_of_day(self.end) - minutes_of_day(self.start)
    }
}
