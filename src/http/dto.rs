//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Request bodies are re-exported from the service layer since they already
//! derive Serialize/Deserialize.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// Re-export existing request types that are already serializable
pub use crate::scheduling::ConflictQuery;
pub use crate::services::{FreeSlotRequest, HearingRequest};

use crate::models::{Hearing, TimeSlot};

/// Hearing as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearingDto {
    pub id: Option<i64>,
    pub case_number: String,
    pub court_id: i64,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i32,
}

impl From<Hearing> for HearingDto {
    fn from(h: Hearing) -> Self {
        let duration_minutes = h.duration_minutes();
        Self {
            id: h.id.map(|id| id.value()),
            case_number: h.case_number,
            court_id: h.court_id.value(),
            date: h.date,
            start: h.start,
            end: h.end,
            duration_minutes,
        }
    }
}

/// Response for the free-slot search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSlotResponse {
    /// Available slots, sorted by (date, start)
    pub slots: Vec<TimeSlot>,
    /// Total count
    pub total: usize,
}

/// Query parameters for the quick free-slot search.
///
/// `buffer` applies to both sides; the gap stays at the configured default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuickSlotQuery {
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub court_id: Option<i64>,
    #[serde(default)]
    pub buffer: Option<i32>,
    #[serde(default)]
    pub grid: Option<i32>,
}

/// Response for the advisory conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    /// Whether any conflict was found
    pub conflict: bool,
    /// The colliding hearings (empty when `conflict` is false)
    pub conflicting: Vec<HearingDto>,
}

/// Query parameters for the hearing list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HearingListQuery {
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
    #[serde(default)]
    pub court_id: Option<i64>,
}

/// Hearing list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearingListResponse {
    /// Hearings in the requested range
    pub hearings: Vec<HearingDto>,
    /// Total count
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub repository: String,
}
