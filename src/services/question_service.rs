//! Question service
//!
//! Admin-side question editing. A point-value change triggers the full
//! retroactive propagation (user points, group points, per-contest
//! ranks) inside the same transaction as the field update.

use sqlx::{Postgres, Transaction};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::QuestionRepository,
    error::{AppError, AppResult},
    handlers::questions::{request::UpdateQuestionRequest, response::QuestionResponse},
    models::Question,
    services::ScoringService,
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// Get question with its tags
    pub async fn get_question(pool: &PgPool, id: &Uuid) -> AppResult<QuestionResponse> {
        let question = QuestionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        let tags = QuestionRepository::list_tags(pool, id).await?;

        Ok(QuestionResponse { question, tags })
    }

    /// Update a question's editable fields and tag set.
    ///
    /// When `points` changes the whole propagation (step-by-step fan-out
    /// to users, groups, and contest rankings) commits atomically with
    /// the field update; any failure rolls everything back.
    pub async fn update_question(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateQuestionRequest,
    ) -> AppResult<QuestionResponse> {
        let mut tx = ScoringService::begin_propagation_tx(pool).await?;

        // Lock the row and compute the diff from the committed value so
        // concurrent repricings serialize: each one propagates the delta
        // against what the previous commit left behind
        let old_points: i32 =
            sqlx::query_scalar(r#"SELECT points FROM questions WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        let points_difference = payload.points - old_points;

        let updated = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET slug = $2,
                leetcode_url = $3,
                codeforces_url = $4,
                difficulty = $5,
                points = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.slug)
        .bind(&payload.leetcode_url)
        .bind(&payload.codeforces_url)
        .bind(payload.difficulty)
        .bind(payload.points)
        .fetch_one(&mut *tx)
        .await?;

        Self::rewrite_tags(&mut tx, id, &payload.tags).await?;

        if points_difference != 0 {
            tracing::info!(
                question_id = %id,
                old_points = old_points,
                new_points = payload.points,
                "Question repriced, propagating point change"
            );
            ScoringService::propagate_points_change(&mut tx, id, points_difference).await?;
        }

        tx.commit().await?;

        let tags = QuestionRepository::list_tags(pool, id).await?;

        Ok(QuestionResponse {
            question: updated,
            tags,
        })
    }

    /// Replace the question's tag links: delete all existing links,
    /// upsert tags by name, re-link from the supplied list
    async fn rewrite_tags(
        tx: &mut Transaction<'_, Postgres>,
        question_id: &Uuid,
        tag_names: &[String],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM question_tags WHERE question_id = $1"#)
            .bind(question_id)
            .execute(&mut **tx)
            .await?;

        for name in tag_names {
            let tag_id: Uuid = sqlx::query_scalar(
                r#"
                INSERT INTO tags (id, name)
                VALUES ($1, $2)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO question_tags (question_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT (question_id, tag_id) DO NOTHING
                "#,
            )
            .bind(question_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
