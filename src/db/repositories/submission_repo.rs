//! Submission repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionStatus},
};

/// Which submissions count when checking for an existing credit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionScope {
    /// Any submission for the question, contest-bound or practice
    Any,
    /// Practice submissions only (no contest attached)
    Practice,
    /// Submissions attached to one specific contest
    Contest(i64),
}

impl SubmissionScope {
    /// The contest-column filter this scope implies: `None` means no
    /// filter at all, `Some(v)` means `contest_id IS NOT DISTINCT FROM v`
    pub fn contest_filter(self) -> Option<Option<i64>> {
        match self {
            Self::Any => None,
            Self::Practice => Some(None),
            Self::Contest(id) => Some(Some(id)),
        }
    }
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create an accepted submission. Takes any executor so the insert
    /// can join a larger transaction.
    pub async fn create_accepted<'e, E>(
        executor: E,
        user_id: &Uuid,
        question_id: &Uuid,
        contest_id: Option<i64>,
        score: i32,
    ) -> AppResult<Submission>
    where
        E: PgExecutor<'e>,
    {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (id, user_id, question_id, contest_id, score, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(question_id)
        .bind(contest_id)
        .bind(score)
        .bind(SubmissionStatus::Accepted)
        .fetch_one(executor)
        .await?;

        Ok(submission)
    }

    /// Whether the user already holds a submission for this question
    /// within the given scope
    pub async fn exists_for_question(
        pool: &PgPool,
        user_id: &Uuid,
        question_id: &Uuid,
        scope: SubmissionScope,
    ) -> AppResult<bool> {
        let filter = scope.contest_filter();
        let unscoped = filter.is_none();
        let contest_id = filter.flatten();

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submissions
                WHERE user_id = $1
                  AND question_id = $2
                  AND ($3 OR contest_id IS NOT DISTINCT FROM $4)
            )
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .bind(unscoped)
        .bind(contest_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Whether the user has any submission tied to the contest
    /// (the "already participated" admission guard)
    pub async fn exists_for_contest(
        pool: &PgPool,
        user_id: &Uuid,
        contest_id: i64,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submissions
                WHERE user_id = $1 AND contest_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(contest_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_contest_filter() {
        assert_eq!(SubmissionScope::Any.contest_filter(), None);
        assert_eq!(SubmissionScope::Practice.contest_filter(), Some(None));
        assert_eq!(SubmissionScope::Contest(7).contest_filter(), Some(Some(7)));
    }
}
