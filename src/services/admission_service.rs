//! Contest admission control
//!
//! Gates a user's entry into a timed contest. The guards run in a
//! fixed order and each rejection maps to a distinct error code so the
//! client can render a specific message.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::ContestConfig,
    db::repositories::{ContestRepository, GroupRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::contests::response::AdmissionResponse,
    utils::time::now_ist,
};

/// Admission service for business logic
pub struct AdmissionService;

impl AdmissionService {
    /// Admit the user into the contest, or reject with a specific reason.
    ///
    /// Guard order: user exists, contest exists, not already
    /// participated, in a group, inside the time window, inside the
    /// join window (when enforced), group permitted. On admission the
    /// group's attempt record is created idempotently; concurrent
    /// admissions by members of the same group share one record.
    pub async fn start_contest(
        pool: &PgPool,
        config: &ContestConfig,
        user_id: &Uuid,
        contest_id: i64,
    ) -> AppResult<AdmissionResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let contest = ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if SubmissionRepository::exists_for_contest(pool, user_id, contest_id).await? {
            return Err(AppError::AlreadyParticipated);
        }

        let group_id = user.group_id.ok_or(AppError::NotInGroup)?;

        let now = now_ist().with_timezone(&Utc);
        let join_cutoff = config
            .enforce_join_window
            .then(|| contest.start_time + Duration::minutes(config.join_window_minutes));
        check_window(now, contest.start_time, contest.end_time, join_cutoff)?;

        let permitted = ContestRepository::list_permitted_groups(pool, contest_id).await?;
        if !permitted.is_empty() && !permitted.contains(&group_id) {
            return Err(AppError::NotPermitted);
        }

        let record = GroupRepository::upsert_group_on_contest(pool, &group_id, contest_id).await?;

        // The expiry is always re-derived from contest start + duration;
        // client-side countdown state is advisory only
        let expiry_time = contest.expiry_time();
        let remaining_time_seconds = (expiry_time - now).num_seconds().max(0);

        let questions = ContestRepository::list_questions(pool, contest_id).await?;

        tracing::info!(
            user_id = %user_id,
            group_id = %group_id,
            contest_id = contest_id,
            remaining_time_seconds = remaining_time_seconds,
            "User admitted into contest"
        );

        Ok(AdmissionResponse {
            admitted: true,
            contest_id,
            group_id,
            group_score: record.score,
            remaining_time_seconds,
            questions,
        })
    }
}

/// Pure time-window guard. Both contest boundaries are inclusive:
/// admission at exactly `start` and exactly `end` succeeds.
pub fn check_window(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    join_cutoff: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if now < start {
        return Err(AppError::ContestNotStarted { start_time: start });
    }
    if now > end {
        return Err(AppError::ContestEnded);
    }
    if let Some(cutoff) = join_cutoff {
        if now > cutoff {
            return Err(AppError::JoiningWindowClosed);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_datetime;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = parse_datetime("2024-06-01T10:00:00Z").unwrap();
        (start, start + Duration::hours(2))
    }

    #[test]
    fn test_admission_at_exact_start_and_end() {
        let (start, end) = window();

        assert!(check_window(start, start, end, None).is_ok());
        assert!(check_window(end, start, end, None).is_ok());
    }

    #[test]
    fn test_rejection_one_second_outside_window() {
        let (start, end) = window();
        let one_sec = Duration::seconds(1);

        match check_window(start - one_sec, start, end, None) {
            Err(AppError::ContestNotStarted { start_time }) => assert_eq!(start_time, start),
            other => panic!("expected ContestNotStarted, got {:?}", other),
        }

        assert!(matches!(
            check_window(end + one_sec, start, end, None),
            Err(AppError::ContestEnded)
        ));
    }

    #[test]
    fn test_join_window_enforcement() {
        let (start, end) = window();
        let cutoff = start + Duration::minutes(10);

        // Inside the join window
        assert!(check_window(start + Duration::minutes(5), start, end, Some(cutoff)).is_ok());
        // At the cutoff exactly
        assert!(check_window(cutoff, start, end, Some(cutoff)).is_ok());
        // Past the cutoff but still inside the contest
        assert!(matches!(
            check_window(start + Duration::minutes(11), start, end, Some(cutoff)),
            Err(AppError::JoiningWindowClosed)
        ));
        // Disabled: late joining is fine
        assert!(check_window(start + Duration::minutes(90), start, end, None).is_ok());
    }
}
