//! Contest repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Contest, Question},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(
        pool: &PgPool,
        name: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        duration_minutes: i32,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (name, start_time, end_time, duration_minutes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(start_time)
        .bind(end_time)
        .bind(duration_minutes)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// List all contests, most recent first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Contest>> {
        let contests =
            sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests ORDER BY start_time DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(contests)
    }

    /// The contest's full question set
    pub async fn list_questions(pool: &PgPool, contest_id: i64) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.* FROM questions q
            JOIN question_on_contests qc ON qc.question_id = q.id
            WHERE qc.contest_id = $1
            ORDER BY q.slug
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Group ids permitted to enter the contest; empty means no
    /// allow-list exists and every group may enter
    pub async fn list_permitted_groups(pool: &PgPool, contest_id: i64) -> AppResult<Vec<Uuid>> {
        let groups: Vec<Uuid> = sqlx::query_scalar(
            r#"SELECT group_id FROM contest_group_permissions WHERE contest_id = $1"#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(groups)
    }

    /// Associate a question with a contest (no-op when already present)
    pub async fn add_question(pool: &PgPool, contest_id: i64, question_id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO question_on_contests (contest_id, question_id)
            VALUES ($1, $2)
            ON CONFLICT (contest_id, question_id) DO NOTHING
            "#,
        )
        .bind(contest_id)
        .bind(question_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
