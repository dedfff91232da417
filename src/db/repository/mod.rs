//! Repository trait for hearing persistence.
//!
//! The scheduling core never touches storage directly; it consumes plain
//! hearing lists supplied through this trait. One read covers a whole search
//! (a date range with an optional court filter), so query cost is bounded per
//! invocation rather than per day or per window.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{CourtId, Hearing, HearingId};

/// Repository trait for hearing storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
///
/// # Conflict Serialization
/// `insert_hearing` and `update_hearing` perform the overlap check and the
/// write as one step under the implementation's write synchronization (a lock
/// for the in-memory backend, a transaction or exclusion constraint for a SQL
/// one). Two concurrent requests for the same court therefore cannot both
/// pass the check and double-book; the advisory check endpoint stays advisory.
#[async_trait]
pub trait HearingRepository: Send + Sync {
    /// Fetch all hearings whose date falls within `[date_start, date_end]`,
    /// optionally filtered to one court.
    ///
    /// This is the single read behind the free-slot search. A failure here
    /// must propagate; treating it as an empty list would report false
    /// availability.
    async fn find_by_date_range(
        &self,
        date_start: NaiveDate,
        date_end: NaiveDate,
        court_id: Option<CourtId>,
    ) -> RepositoryResult<Vec<Hearing>>;

    /// Fetch one hearing by id.
    async fn find_by_id(&self, id: HearingId) -> RepositoryResult<Option<Hearing>>;

    /// Insert a new hearing, rejecting it with
    /// [`RepositoryError::ScheduleConflict`] when it overlaps an existing
    /// hearing of the same court and date. Returns the assigned id.
    async fn insert_hearing(&self, hearing: Hearing) -> RepositoryResult<HearingId>;

    /// Replace an existing hearing, re-checking conflicts while excluding the
    /// hearing itself. Fails with [`RepositoryError::NotFound`] when the id
    /// does not exist.
    async fn update_hearing(&self, id: HearingId, hearing: Hearing) -> RepositoryResult<()>;

    /// Delete a hearing. Fails with [`RepositoryError::NotFound`] when the id
    /// does not exist.
    async fn delete_hearing(&self, id: HearingId) -> RepositoryResult<()>;

    /// Health check: can the backend be reached?
    async fn health_check(&self) -> RepositoryResult<bool>;
}
