//! Advisory conflict checking.
//!
//! One filtered read plus the pure overlap predicate. The result classifies;
//! it never throws on a conflict. Callers that are about to write should rely
//! on the repository's serialized check instead (see
//! [`crate::db::repository::HearingRepository`]), because an advisory check
//! and a later write are two unsynchronized steps.

use tracing::debug;

use super::ServiceResult;
use crate::db::repository::HearingRepository;
use crate::models::Hearing;
use crate::scheduling::{find_conflicts, ConflictQuery};

/// Return every existing hearing on the query's date and court whose interval
/// overlaps the candidate's, excluding `exclude_hearing_id` if set.
///
/// An empty list is a successful "no conflict" outcome.
pub async fn check_conflicts(
    repo: &dyn HearingRepository,
    query: &ConflictQuery,
) -> ServiceResult<Vec<Hearing>> {
    super::validate_duration(query.duration_minutes)?;

    // One read: the candidate's date, filtered to its court.
    let hearings = repo
        .find_by_date_range(query.date, query.date, Some(query.court_id))
        .await?;

    let conflicting = find_conflicts(query, &hearings);
    debug!(
        "Conflict check for court {} on {}: {} of {} hearings collide",
        query.court_id.value(),
        query.date,
        conflicting.len(),
        hearings.len()
    );

    Ok(conflicting)
}
