//! Contest service
//!
//! Admin-side contest creation and the bulk-update transaction, plus
//! the end-of-contest finalizer.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        ContestRepository, GroupRepository, QuestionRepository, SubmissionRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, EndContestRequest, UpdateContestRequest},
        response::{ContestResponse, EndContestResponse},
    },
    models::Contest,
    services::ScoringService,
    utils::time::contest_duration_minutes,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a new contest. The duration is derived from the time
    /// window when not supplied explicitly.
    pub async fn create_contest(
        pool: &PgPool,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        let duration_minutes = match payload.duration_minutes {
            Some(d) if d > 0 => d as i64,
            Some(_) => {
                return Err(AppError::Validation(
                    "Duration must be positive".to_string(),
                ))
            }
            None => contest_duration_minutes(payload.start_time, payload.end_time).ok_or_else(
                || AppError::Validation("End time must be after start time".to_string()),
            )?,
        };

        let contest = ContestRepository::create(
            pool,
            &payload.name,
            payload.start_time,
            payload.end_time,
            duration_minutes as i32,
        )
        .await?;

        Self::to_contest_response(pool, contest).await
    }

    /// Get contest by ID, with questions and permitted groups
    pub async fn get_contest(pool: &PgPool, id: i64) -> AppResult<ContestResponse> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Self::to_contest_response(pool, contest).await
    }

    /// List all contests with lazily derived status
    pub async fn list_contests(pool: &PgPool) -> AppResult<Vec<ContestResponse>> {
        let contests = ContestRepository::list(pool).await?;

        let mut responses = Vec::with_capacity(contests.len());
        for contest in contests {
            responses.push(Self::to_contest_response(pool, contest).await?);
        }

        Ok(responses)
    }

    /// Contest standings, best group first
    pub async fn get_standings(pool: &PgPool, id: i64) -> AppResult<Vec<crate::models::StandingEntry>> {
        ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        GroupRepository::list_standings(pool, id).await
    }

    /// Apply a bulk contest update atomically.
    ///
    /// Field updates, question-set replacement, and permission-list
    /// replacement all commit together or not at all. A supplied
    /// question list fully replaces the existing associations with
    /// skip-duplicates semantics; likewise for permitted groups.
    pub async fn update_contest(
        pool: &PgPool,
        id: i64,
        payload: UpdateContestRequest,
    ) -> AppResult<ContestResponse> {
        ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if let (Some(start), Some(end)) = (payload.start_time, payload.end_time) {
            if end <= start {
                return Err(AppError::Validation(
                    "End time must be after start time".to_string(),
                ));
            }
        }

        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE contests
            SET name = COALESCE($2, name),
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time),
                duration_minutes = COALESCE($5, duration_minutes),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(payload.start_time)
        .bind(payload.end_time)
        .bind(payload.duration_minutes)
        .execute(&mut *tx)
        .await?;

        if let Some(question_ids) = &payload.question_ids {
            sqlx::query(r#"DELETE FROM question_on_contests WHERE contest_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for question_id in question_ids {
                sqlx::query(
                    r#"
                    INSERT INTO question_on_contests (contest_id, question_id)
                    VALUES ($1, $2)
                    ON CONFLICT (contest_id, question_id) DO NOTHING
                    "#,
                )
                .bind(id)
                .bind(question_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(group_ids) = &payload.permitted_group_ids {
            sqlx::query(r#"DELETE FROM contest_group_permissions WHERE contest_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for group_id in group_ids {
                sqlx::query(
                    r#"
                    INSERT INTO contest_group_permissions (contest_id, group_id)
                    VALUES ($1, $2)
                    ON CONFLICT (contest_id, group_id) DO NOTHING
                    "#,
                )
                .bind(id)
                .bind(group_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Self::to_contest_response(pool, contest).await
    }

    /// Finalize a user's contest attempt: persist a submission for each
    /// verified question not yet recorded and credit individual points.
    ///
    /// Idempotent: repeated calls skip already-recorded questions, and
    /// admission rejects the user on any later start attempt because a
    /// contest submission now exists.
    pub async fn end_contest(
        pool: &PgPool,
        user_id: &Uuid,
        contest_id: i64,
        payload: EndContestRequest,
    ) -> AppResult<EndContestResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let group_id = user.group_id.ok_or(AppError::NotInGroup)?;

        if !GroupRepository::has_group_on_contest(pool, &group_id, contest_id).await? {
            return Err(AppError::Forbidden(
                "Contest was not started by your group".to_string(),
            ));
        }

        let contest_questions: HashSet<Uuid> = ContestRepository::list_questions(pool, contest_id)
            .await?
            .into_iter()
            .map(|q| q.id)
            .collect();

        // Duplicate ids in the payload must not double-record
        let verified: HashSet<Uuid> = payload.verified_question_ids.into_iter().collect();

        let mut newly_recorded = 0;
        for question_id in verified {
            if !contest_questions.contains(&question_id) {
                tracing::warn!(
                    contest_id = contest_id,
                    question_id = %question_id,
                    "Verified question does not belong to contest, skipping"
                );
                continue;
            }

            let question = QuestionRepository::find_by_id(pool, &question_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

            let recorded = ScoringService::record_submission(
                pool,
                user_id,
                &question_id,
                Some(contest_id),
                question.points,
            )
            .await?;

            if recorded {
                newly_recorded += 1;
            }
        }

        // Make the attempt visible for the admission guard even when the
        // user verified nothing: without it a zero-score attempt could
        // re-enter the contest indefinitely
        let has_contest_submission =
            SubmissionRepository::exists_for_contest(pool, user_id, contest_id).await?;

        tracing::info!(
            user_id = %user_id,
            contest_id = contest_id,
            final_score = payload.final_score,
            newly_recorded = newly_recorded,
            "Contest attempt finalized"
        );

        Ok(EndContestResponse {
            ended: true,
            newly_recorded,
            attempt_locked: has_contest_submission,
        })
    }

    async fn to_contest_response(pool: &PgPool, contest: Contest) -> AppResult<ContestResponse> {
        let questions = ContestRepository::list_questions(pool, contest.id).await?;
        let permitted_groups = ContestRepository::list_permitted_groups(pool, contest.id).await?;
        let status = contest.status();

        Ok(ContestResponse {
            contest,
            status,
            questions,
            permitted_groups,
        })
    }
}
