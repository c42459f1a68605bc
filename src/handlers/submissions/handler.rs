//! Submission handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    db::repositories::QuestionRepository,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ScoringService,
    state::AppState,
};

use super::{request::CreateSubmissionRequest, response::RecordSubmissionResponse};

/// Record an accepted submission and credit individual points
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<Json<RecordSubmissionResponse>> {
    payload.validate()?;

    QuestionRepository::find_by_id(state.db(), &payload.question_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    let recorded = ScoringService::record_submission(
        state.db(),
        &auth_user.id,
        &payload.question_id,
        payload.contest_id,
        payload.score,
    )
    .await?;

    Ok(Json(RecordSubmissionResponse { recorded }))
}
