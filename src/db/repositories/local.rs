//! In-memory repository for unit testing and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::db::repository::{ErrorContext, HearingRepository, RepositoryError, RepositoryResult};
use crate::models::{minutes_of_day, CourtId, Hearing, HearingId};
use crate::scheduling::overlaps;

/// In-memory hearing store.
///
/// A single `RwLock` guards the map; conflict checks run inside the write
/// lock of `insert_hearing`/`update_hearing`, which is this backend's
/// equivalent of a database exclusion constraint.
pub struct LocalRepository {
    hearings: RwLock<HashMap<i64, Hearing>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            hearings: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Hearings of the same court and date overlapping `hearing`, skipping
    /// `exclude`. Callers must hold the write lock over `map`.
    fn colliding(
        map: &HashMap<i64, Hearing>,
        hearing: &Hearing,
        exclude: Option<HearingId>,
    ) -> Vec<Hearing> {
        let start = minutes_of_day(hearing.start);
        let end = minutes_of_day(hearing.end);

        let mut found: Vec<Hearing> = map
            .values()
            .filter(|h| h.date == hearing.date && h.court_id == hearing.court_id)
            .filter(|h| match (exclude, h.id) {
                (Some(excluded), Some(id)) => excluded != id,
                _ => true,
            })
            .filter(|h| overlaps(start, end, minutes_of_day(h.start), minutes_of_day(h.end)))
            .cloned()
            .collect();
        found.sort_by_key(|h| (h.start, h.id));
        found
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HearingRepository for LocalRepository {
    async fn find_by_date_range(
        &self,
        date_start: NaiveDate,
        date_end: NaiveDate,
        court_id: Option<CourtId>,
    ) -> RepositoryResult<Vec<Hearing>> {
        let map = self.hearings.read();
        let mut hearings: Vec<Hearing> = map
            .values()
            .filter(|h| h.date >= date_start && h.date <= date_end)
            .filter(|h| court_id.map_or(true, |c| h.court_id == c))
            .cloned()
            .collect();
        hearings.sort_by_key(|h| (h.date, h.start, h.id));
        Ok(hearings)
    }

    async fn find_by_id(&self, id: HearingId) -> RepositoryResult<Option<Hearing>> {
        Ok(self.hearings.read().get(&id.value()).cloned())
    }

    async fn insert_hearing(&self, mut hearing: Hearing) -> RepositoryResult<HearingId> {
        let mut map = self.hearings.write();

        let conflicting = Self::colliding(&map, &hearing, None);
        if !conflicting.is_empty() {
            return Err(RepositoryError::ScheduleConflict {
                conflicting,
                context: ErrorContext::new("insert_hearing").with_entity("hearing"),
            });
        }

        let id = HearingId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        hearing.id = Some(id);
        map.insert(id.value(), hearing);
        Ok(id)
    }

    async fn update_hearing(&self, id: HearingId, mut hearing: Hearing) -> RepositoryResult<()> {
        let mut map = self.hearings.write();

        if !map.contains_key(&id.value()) {
            return Err(RepositoryError::hearing_not_found("update_hearing", id.value()));
        }

        hearing.id = Some(id);
        let conflicting = Self::colliding(&map, &hearing, Some(id));
        if !conflicting.is_empty() {
            return Err(RepositoryError::ScheduleConflict {
                conflicting,
                context: ErrorContext::new("update_hearing")
                    .with_entity("hearing")
                    .with_entity_id(id.value()),
            });
        }

        map.insert(id.value(), hearing);
        Ok(())
    }

    async fn delete_hearing(&self, id: HearingId) -> RepositoryResult<()> {
        let mut map = self.hearings.write();
        if map.remove(&id.value()).is_none() {
            return Err(RepositoryError::hearing_not_found("delete_hearing", id.value()));
        }
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
