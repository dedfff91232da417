//! Domain value types for hearing scheduling.
//!
//! Everything here is plain data: hearings as stored, and the interval value
//! types the scheduling core computes with. All temporal fields are calendar
//! dates and wall-clock times in one fixed local civil calendar; no timezone
//! arithmetic happens anywhere in this crate.

pub mod hearing;
pub mod intervals;
pub mod time;

pub use hearing::{CourtId, Hearing, HearingId};
pub use intervals::{FreeInterval, OccupiedInterval, TimeSlot, WorkWindow};
pub use time::{minutes_of_day, time_from_minutes};
