//! Group repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{GroupOnContest, StandingEntry},
};

/// Repository for group database operations
pub struct GroupRepository;

impl GroupRepository {
    /// Create-or-fetch the attempt record for (group, contest).
    ///
    /// Safe under concurrent admissions by members of the same group:
    /// the insert is keyed on the (group_id, contest_id) unique pair
    /// and loses gracefully to a concurrent winner.
    pub async fn upsert_group_on_contest(
        pool: &PgPool,
        group_id: &Uuid,
        contest_id: i64,
    ) -> AppResult<GroupOnContest> {
        sqlx::query(
            r#"
            INSERT INTO group_on_contests (id, group_id, contest_id, score, rank)
            VALUES ($1, $2, $3, 0, 0)
            ON CONFLICT (group_id, contest_id) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(group_id)
        .bind(contest_id)
        .execute(pool)
        .await?;

        let record = sqlx::query_as::<_, GroupOnContest>(
            r#"SELECT * FROM group_on_contests WHERE group_id = $1 AND contest_id = $2"#,
        )
        .bind(group_id)
        .bind(contest_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Whether the group holds an attempt record for the contest
    pub async fn has_group_on_contest(
        pool: &PgPool,
        group_id: &Uuid,
        contest_id: i64,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM group_on_contests
                WHERE group_id = $1 AND contest_id = $2
            )
            "#,
        )
        .bind(group_id)
        .bind(contest_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Contest standings: every participating group with its score and
    /// rank, best first
    pub async fn list_standings(pool: &PgPool, contest_id: i64) -> AppResult<Vec<StandingEntry>> {
        let standings = sqlx::query_as::<_, StandingEntry>(
            r#"
            SELECT goc.group_id, g.name AS group_name, goc.score, goc.rank
            FROM group_on_contests goc
            JOIN groups g ON g.id = goc.group_id
            WHERE goc.contest_id = $1
            ORDER BY goc.score DESC, goc.id ASC
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(standings)
    }
}
