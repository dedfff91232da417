//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ConflictCheckResponse, ConflictQuery, FreeSlotRequest, FreeSlotResponse, HealthResponse,
    HearingDto, HearingListQuery, HearingListResponse, HearingRequest, QuickSlotQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{CourtId, HearingId};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Free-Slot Search
// =============================================================================

/// POST /v1/free-slots
///
/// Full free-slot search with all knobs in the JSON body.
pub async fn search_free_slots(
    State(state): State<AppState>,
    Json(request): Json<FreeSlotRequest>,
) -> HandlerResult<FreeSlotResponse> {
    let slots =
        services::search_free_slots(state.repository.as_ref(), &state.config, &request).await?;
    let total = slots.len();

    Ok(Json(FreeSlotResponse { slots, total }))
}

/// GET /v1/free-slots
///
/// Quick search via query string: `date_start`, `date_end`, `duration`
/// required; `court_id`, `buffer` (both sides), `grid` optional.
pub async fn search_free_slots_quick(
    State(state): State<AppState>,
    Query(query): Query<QuickSlotQuery>,
) -> HandlerResult<FreeSlotResponse> {
    let date_start = query
        .date_start
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: date_start".to_string()))?;
    let date_end = query
        .date_end
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: date_end".to_string()))?;
    let duration = query
        .duration
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: duration".to_string()))?;

    let request = FreeSlotRequest {
        date_start,
        date_end,
        court_id: query.court_id.map(CourtId::new),
        duration_minutes: duration,
        buffer_before_minutes: query.buffer,
        buffer_after_minutes: query.buffer,
        grid_minutes: query.grid,
        min_gap_minutes: None,
    };

    let slots =
        services::search_free_slots(state.repository.as_ref(), &state.config, &request).await?;
    let total = slots.len();

    Ok(Json(FreeSlotResponse { slots, total }))
}

// =============================================================================
// Conflict Check (advisory)
// =============================================================================

/// POST /v1/conflicts
///
/// Advisory conflict check; classifies without writing anything. The write
/// path re-checks inside the repository, so this answer may be stale by the
/// time a caller acts on it.
pub async fn check_conflicts(
    State(state): State<AppState>,
    Json(query): Json<ConflictQuery>,
) -> HandlerResult<ConflictCheckResponse> {
    let conflicting = services::check_conflicts(state.repository.as_ref(), &query).await?;

    Ok(Json(ConflictCheckResponse {
        conflict: !conflicting.is_empty(),
        conflicting: conflicting.into_iter().map(Into::into).collect(),
    }))
}

// =============================================================================
// Hearing CRUD
// =============================================================================

/// GET /v1/hearings
///
/// List hearings in a date range, optionally filtered to one court.
pub async fn list_hearings(
    State(state): State<AppState>,
    Query(query): Query<HearingListQuery>,
) -> HandlerResult<HearingListResponse> {
    let date_start = query
        .date_start
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: date_start".to_string()))?;
    let date_end = query
        .date_end
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: date_end".to_string()))?;

    let hearings = services::list_hearings(
        state.repository.as_ref(),
        date_start,
        date_end,
        query.court_id.map(CourtId::new),
    )
    .await?;

    let hearings: Vec<HearingDto> = hearings.into_iter().map(Into::into).collect();
    let total = hearings.len();

    Ok(Json(HearingListResponse { hearings, total }))
}

/// POST /v1/hearings
///
/// Create a hearing. Conflicting proposals are rejected with 409 and the list
/// of colliding hearings.
pub async fn create_hearing(
    State(state): State<AppState>,
    Json(request): Json<HearingRequest>,
) -> Result<(StatusCode, Json<HearingDto>), AppError> {
    let hearing = services::create_hearing(state.repository.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(hearing.into())))
}

/// PUT /v1/hearings/{id}
///
/// Update a hearing, re-checking conflicts while excluding the hearing itself.
pub async fn update_hearing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<HearingRequest>,
) -> HandlerResult<HearingDto> {
    let hearing =
        services::update_hearing(state.repository.as_ref(), HearingId::new(id), &request).await?;
    Ok(Json(hearing.into()))
}

/// DELETE /v1/hearings/{id}
///
/// Delete a hearing.
pub async fn delete_hearing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_hearing(state.repository.as_ref(), HearingId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
