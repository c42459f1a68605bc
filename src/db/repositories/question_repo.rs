//! Question repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Question, Tag},
};

/// Repository for question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Find question by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(r#"SELECT * FROM questions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(question)
    }

    /// Tags attached to a question
    pub async fn list_tags(pool: &PgPool, question_id: &Uuid) -> AppResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.* FROM tags t
            JOIN question_tags qt ON qt.tag_id = t.id
            WHERE qt.question_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }
}
