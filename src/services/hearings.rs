//! Hearing create/update/delete flows.
//!
//! Validation lives here; the overlap check on the write path lives inside
//! the repository so check and write are one serialized step.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::db::repository::HearingRepository;
use crate::models::{CourtId, Hearing, HearingId};

/// Request body for creating or updating a hearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearingRequest {
    pub case_number: String,
    pub court_id: CourtId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_minutes: i32,
}

impl HearingRequest {
    fn validate(&self) -> ServiceResult<()> {
        if self.case_number.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Case number is required".to_string(),
            ));
        }
        super::validate_duration(self.duration_minutes)?;
        Ok(())
    }

    fn to_hearing(&self) -> ServiceResult<Hearing> {
        // Duration is bounded to 480 minutes, so a same-day end time exists
        // for any start the API can express; overflow past midnight is a
        // caller error.
        let end = self
            .start
            .overflowing_add_signed(Duration::minutes(self.duration_minutes as i64));
        if end.1 != 0 {
            return Err(ServiceError::Validation(
                "Hearing must end on the same day it starts".to_string(),
            ));
        }

        Ok(Hearing {
            id: None,
            case_number: self.case_number.trim().to_string(),
            court_id: self.court_id,
            date: self.date,
            start: self.start,
            end: end.0,
        })
    }
}

/// Create a hearing. Conflicting proposals surface as
/// [`ServiceError::Conflict`] carrying the colliding hearings.
pub async fn create_hearing(
    repo: &dyn HearingRepository,
    request: &HearingRequest,
) -> ServiceResult<Hearing> {
    request.validate()?;
    let mut hearing = request.to_hearing()?;

    let id = repo.insert_hearing(hearing.clone()).await?;
    hearing.id = Some(id);

    info!(
        "Hearing created - ID: {}, case: {}",
        id.value(),
        hearing.case_number
    );
    Ok(hearing)
}

/// Update a hearing, re-checking conflicts while excluding the hearing
/// itself.
pub async fn update_hearing(
    repo: &dyn HearingRepository,
    id: HearingId,
    request: &HearingRequest,
) -> ServiceResult<Hearing> {
    request.validate()?;
    let mut hearing = request.to_hearing()?;

    repo.update_hearing(id, hearing.clone()).await?;
    hearing.id = Some(id);

    info!("Hearing updated - ID: {}", id.value());
    Ok(hearing)
}

/// Delete a hearing by id.
pub async fn delete_hearing(repo: &dyn HearingRepository, id: HearingId) -> ServiceResult<()> {
    repo.delete_hearing(id).await?;
    info!("Hearing deleted - ID: {}", id.value());
    Ok(())
}

/// List hearings in a date range, optionally filtered to one court.
pub async fn list_hearings(
    repo: &dyn HearingRepository,
    date_start: NaiveDate,
    date_end: NaiveDate,
    court_id: Option<CourtId>,
) -> ServiceResult<Vec<Hearing>> {
    if date_start > date_end {
        return Err(ServiceError::Validation(
            "Start date must be on or before end date".to_string(),
        ));
    }
    Ok(repo.find_by_date_range(date_start, date_end, court_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn request(court: i64, date: NaiveDate, start: NaiveTime, duration: i32) -> HearingRequest {
        HearingRequest {
            case_number: "0001234-56.2025.8.26.0100".to_string(),
            court_id: CourtId::new(court),
            date,
            start,
            duration_minutes: duration,
        }
    }

    #[tokio::test]
    async fn test_create_derives_end_time() {
        let repo = LocalRepository::new();
        let hearing = create_hearing(&repo, &request(1, ymd(2025, 3, 10), hm(9, 0), 90))
            .await
            .unwrap();
        assert_eq!(hearing.end, hm(10, 30));
        assert!(hearing.id.is_some());
    }

    #[tokio::test]
    async fn test_create_conflicting_rejected_with_details() {
        let repo = LocalRepository::new();
        let date = ymd(2025, 3, 10);
        create_hearing(&repo, &request(1, date, hm(9, 0), 60)).await.unwrap();

        let err = create_hearing(&repo, &request(1, date, hm(9, 30), 60))
            .await
            .unwrap_err();
        match err {
            ServiceError::Conflict { conflicting } => {
                assert_eq!(conflicting.len(), 1);
                assert_eq!(conflicting[0].start, hm(9, 0));
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_back_to_back_allowed() {
        let repo = LocalRepository::new();
        let date = ymd(2025, 3, 10);
        create_hearing(&repo, &request(1, date, hm(9, 0), 60)).await.unwrap();
        create_hearing(&repo, &request(1, date, hm(10, 0), 60)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_can_keep_own_slot() {
        let repo = LocalRepository::new();
        let date = ymd(2025, 3, 10);
        let created = create_hearing(&repo, &request(1, date, hm(9, 0), 60)).await.unwrap();

        // Same slot, longer duration: only collides with itself, so allowed
        let updated = update_hearing(
            &repo,
            created.id.unwrap(),
            &request(1, date, hm(9, 0), 90),
        )
        .await
        .unwrap();
        assert_eq!(updated.end, hm(10, 30));
    }

    #[tokio::test]
    async fn test_update_missing_hearing_not_found() {
        let repo = LocalRepository::new();
        let err = update_hearing(
            &repo,
            HearingId::new(404),
            &request(1, ymd(2025, 3, 10), hm(9, 0), 60),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_case_number_rejected() {
        let repo = LocalRepository::new();
        let mut req = request(1, ymd(2025, 3, 10), hm(9, 0), 60);
        req.case_number = "   ".to_string();
        let err = create_hearing(&repo, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_midnight_spill_rejected() {
        let repo = LocalRepository::new();
        let err = create_hearing(&repo, &request(1, ymd(2025, 3, 10), hm(23, 30), 60))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_validates_range() {
        let repo = LocalRepository::new();
        let err = list_hearings(&repo, ymd(2025, 3, 11), ymd(2025, 3, 10), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
