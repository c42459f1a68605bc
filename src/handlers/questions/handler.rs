//! Question handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{QuestionService, VerificationService},
    state::AppState,
};

use super::{
    request::UpdateQuestionRequest,
    response::{QuestionResponse, VerifyResponse},
};

/// Get a question with its tags
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuestionResponse>> {
    let question = QuestionService::get_question(state.db(), &id).await?;
    Ok(Json(question))
}

/// Update a question (admin); a points change fans out to all holders
pub async fn update_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> AppResult<Json<QuestionResponse>> {
    auth_user.require_admin()?;
    payload.validate()?;

    let question = QuestionService::update_question(state.db(), &id, payload).await?;

    Ok(Json(question))
}

/// Verify the caller's solution against the external judge (practice mode)
pub async fn verify_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VerifyResponse>> {
    let result =
        VerificationService::verify_and_record(state.db(), state.judge(), &auth_user.id, &id)
            .await?;

    Ok(Json(result))
}
