//! Practice-mode verification
//!
//! Checks the external judge for an accepted solution and, on success,
//! records the submission and credits individual points. The
//! idempotency check runs before any judge call: an already-credited
//! question is an "already attempted" no-op success, never a re-award.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{QuestionRepository, SubmissionRepository, SubmissionScope, UserRepository},
    error::{AppError, AppResult},
    handlers::questions::response::VerifyResponse,
    judge::JudgeClient,
    services::ScoringService,
};

/// Verification service for business logic
pub struct VerificationService;

impl VerificationService {
    /// Verify the caller's solution to a question against the external
    /// judge and credit points on success.
    ///
    /// Judge failures fail closed to "not solved"; they never surface
    /// as errors in this flow.
    pub async fn verify_and_record(
        pool: &PgPool,
        judge: &JudgeClient,
        user_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<VerifyResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let question = QuestionRepository::find_by_id(pool, question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        // Already credited in any scope, contest or practice: no judge
        // call, no re-award
        if SubmissionRepository::exists_for_question(pool, user_id, question_id, SubmissionScope::Any)
            .await?
        {
            return Ok(VerifyResponse {
                solved: true,
                already_attempted: true,
                points_awarded: None,
            });
        }

        let platform = question.platform().ok_or_else(|| {
            AppError::Validation("Question has no judge platform URL".to_string())
        })?;

        let handle = user.handle_for(platform).ok_or_else(|| {
            AppError::Validation(format!("No {} handle linked to your account", platform))
        })?;

        let solved = judge.verify(platform, &question.slug, handle).await;

        if !solved {
            return Ok(VerifyResponse {
                solved: false,
                already_attempted: false,
                points_awarded: None,
            });
        }

        // Practice mode is out-of-contest: individual points only
        let recorded =
            ScoringService::record_submission(pool, user_id, question_id, None, question.points)
                .await?;

        Ok(VerifyResponse {
            solved: true,
            already_attempted: !recorded,
            points_awarded: recorded.then_some(question.points),
        })
    }
}
