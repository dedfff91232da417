//! High-level business logic.
//!
//! Services validate requests, perform the single repository read or write an
//! operation needs, and run the pure scheduling core over the results. They
//! hold no state of their own; every invocation recomputes from its inputs.

pub mod conflicts;
pub mod free_slots;
pub mod hearings;

pub use conflicts::check_conflicts;
pub use free_slots::{search_free_slots, FreeSlotRequest};
pub use hearings::{create_hearing, delete_hearing, list_hearings, update_hearing, HearingRequest};

use crate::db::repository::RepositoryError;
use crate::models::Hearing;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type distinguishing the outcome classes the API must keep apart:
/// caller mistakes, missing entities, scheduling conflicts, and backend
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request itself is invalid (bad range, out-of-bounds duration, ...).
    #[error("{0}")]
    Validation(String),

    /// The referenced hearing does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The proposed hearing collides with existing ones. A domain-level
    /// rejection, not a failure of the computation.
    #[error("Schedule conflict with {} existing hearing(s)", conflicting.len())]
    Conflict { conflicting: Vec<Hearing> },

    /// The storage backend failed. Never downgraded to an empty result.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { message, .. } => ServiceError::NotFound(message),
            RepositoryError::ScheduleConflict { conflicting, .. } => {
                ServiceError::Conflict { conflicting }
            }
            other => ServiceError::Repository(other),
        }
    }
}

/// Shared duration validation: inclusive bounds from [`crate::config`].
pub(crate) fn validate_duration(duration_minutes: i32) -> ServiceResult<()> {
    use crate::config::{DURATION_MAX_MINUTES, DURATION_MIN_MINUTES};

    if duration_minutes < DURATION_MIN_MINUTES {
        return Err(ServiceError::Validation(format!(
            "Minimum duration is {} minutes",
            DURATION_MIN_MINUTES
        )));
    }
    if duration_minutes > DURATION_MAX_MINUTES {
        return Err(ServiceError::Validation(format!(
            "Maximum duration is {} minutes",
            DURATION_MAX_MINUTES
        )));
    }
    Ok(())
}
