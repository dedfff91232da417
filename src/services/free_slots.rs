//! Free-slot search orchestration.
//!
//! Validates the request, builds work windows, performs the one occupancy
//! read for the whole range, then runs the pure pipeline: buffer, merge,
//! subtract, slice, sort.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ServiceError, ServiceResult};
use crate::config::{SchedulingConfig, GRID_MAX_MINUTES, GRID_MIN_MINUTES};
use crate::db::repository::HearingRepository;
use crate::models::{minutes_of_day, CourtId, OccupiedInterval, TimeSlot};
use crate::scheduling::{
    build_work_windows, expand_buffers, merge_intervals, slice_slots, subtract_occupied,
};

/// Free-slot search request.
///
/// Knob fields default to the configured search defaults when omitted;
/// `court_id` absent means "all courts".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSlotRequest {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    #[serde(default)]
    pub court_id: Option<CourtId>,
    pub duration_minutes: i32,
    #[serde(default)]
    pub buffer_before_minutes: Option<i32>,
    #[serde(default)]
    pub buffer_after_minutes: Option<i32>,
    #[serde(default)]
    pub grid_minutes: Option<i32>,
    #[serde(default)]
    pub min_gap_minutes: Option<i32>,
}

fn validate(req: &FreeSlotRequest, grid_minutes: i32, buffers: (i32, i32), gap: i32) -> ServiceResult<()> {
    if req.date_start > req.date_end {
        return Err(ServiceError::Validation(
            "Start date must be on or before end date".to_string(),
        ));
    }

    super::validate_duration(req.duration_minutes)?;

    if !(GRID_MIN_MINUTES..=GRID_MAX_MINUTES).contains(&grid_minutes) {
        return Err(ServiceError::Validation(format!(
            "Grid must be between {} and {} minutes",
            GRID_MIN_MINUTES, GRID_MAX_MINUTES
        )));
    }

    if buffers.0 < 0 || buffers.1 < 0 {
        return Err(ServiceError::Validation(
            "Buffers must not be negative".to_string(),
        ));
    }
    if gap < 0 {
        return Err(ServiceError::Validation(
            "Minimum gap must not be negative".to_string(),
        ));
    }

    Ok(())
}

/// Compute the available time slots for a new hearing.
///
/// An empty slot list is a valid result meaning "no availability". The
/// occupancy read happens exactly once; a failed read propagates instead of
/// being treated as zero occupied intervals.
pub async fn search_free_slots(
    repo: &dyn HearingRepository,
    config: &SchedulingConfig,
    request: &FreeSlotRequest,
) -> ServiceResult<Vec<TimeSlot>> {
    let defaults = &config.search_defaults;
    let buffer_before = request.buffer_before_minutes.unwrap_or(defaults.buffer_before_minutes);
    let buffer_after = request.buffer_after_minutes.unwrap_or(defaults.buffer_after_minutes);
    let grid = request.grid_minutes.unwrap_or(defaults.grid_minutes);
    let gap = request.min_gap_minutes.unwrap_or(defaults.min_gap_minutes);

    validate(request, grid, (buffer_before, buffer_after), gap)?;

    let daily_windows = config
        .working_windows()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    let windows = build_work_windows(request.date_start, request.date_end, &daily_windows);
    debug!("Built {} work windows", windows.len());

    let hearings = repo
        .find_by_date_range(request.date_start, request.date_end, request.court_id)
        .await?;
    debug!("Found {} existing hearings in range", hearings.len());

    let occupied: Vec<OccupiedInterval> = hearings
        .iter()
        .map(|h| OccupiedInterval {
            date: h.date,
            start: minutes_of_day(h.start),
            end: minutes_of_day(h.end),
        })
        .collect();

    let merged = merge_intervals(&expand_buffers(&occupied, buffer_before, buffer_after));
    debug!("{} occupied intervals after buffering and merging", merged.len());

    let mut slots: Vec<TimeSlot> = Vec::new();
    for window in &windows {
        for free in subtract_occupied(window, &merged) {
            slots.extend(slice_slots(&free, request.duration_minutes, grid, gap));
        }
    }

    slots.sort_by_key(|s| (s.date, s.start));
    debug!("Computed {} available slots", slots.len());

    Ok(slots)
}
