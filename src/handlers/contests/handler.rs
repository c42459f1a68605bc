//! Contest handler implementations

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::{Stream, StreamExt};
use validator::Validate;

use crate::{
    db::repositories::{ContestRepository, QuestionRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{AdmissionService, BroadcastService, ContestService},
    state::AppState,
};

use super::{
    request::{CreateContestRequest, EndContestRequest, PushQuestionRequest, UpdateContestRequest},
    response::{AdmissionResponse, ContestResponse, EndContestResponse},
};

/// List all contests
pub async fn list_contests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_contests(state.db()).await?;
    Ok(Json(contests))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.db(), id).await?;
    Ok(Json(contest))
}

/// Contest standings (group scores and ranks)
pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<crate::models::StandingEntry>>> {
    let standings = ContestService::get_standings(state.db(), id).await?;
    Ok(Json(standings))
}

/// Create a new contest (admin)
pub async fn create_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let contest = ContestService::create_contest(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(contest)))
}

/// Apply a bulk contest update atomically (admin)
pub async fn update_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    auth_user.require_admin()?;
    payload.validate()?;

    let contest = ContestService::update_contest(state.db(), id, payload).await?;

    Ok(Json(contest))
}

/// Enter a contest (admission control)
pub async fn start_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<AdmissionResponse>> {
    let admission = AdmissionService::start_contest(
        state.db(),
        &state.config().contest,
        &auth_user.id,
        id,
    )
    .await?;

    Ok(Json(admission))
}

/// Finalize a contest attempt
pub async fn end_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<EndContestRequest>,
) -> AppResult<Json<EndContestResponse>> {
    let result = ContestService::end_contest(state.db(), &auth_user.id, id, payload).await?;
    Ok(Json(result))
}

/// Inject a question into a running contest and broadcast it (admin)
pub async fn push_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<PushQuestionRequest>,
) -> AppResult<StatusCode> {
    auth_user.require_admin()?;

    ContestRepository::find_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

    let question = QuestionRepository::find_by_id(state.db(), &payload.question_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    ContestRepository::add_question(state.db(), id, &question.id).await?;
    BroadcastService::publish_question(state.redis(), id, &question).await?;

    Ok(StatusCode::CREATED)
}

/// Server-sent events stream of question pushes for a contest
pub async fn contest_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let pubsub = BroadcastService::subscribe_questions(state.redis_client(), id).await?;

    let stream = pubsub.into_on_message().map(|msg| {
        let payload: String = msg.get_payload().unwrap_or_default();
        Ok(Event::default().event("question").data(payload))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
