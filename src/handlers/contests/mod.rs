//! Contest lifecycle handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Contest routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handler::create_contest))
        .route("/{id}", put(handler::update_contest))
        .route("/{id}/start", post(handler::start_contest))
        .route("/{id}/end", post(handler::end_contest))
        .route("/{id}/questions", post(handler::push_question))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(handler::list_contests))
        .route("/{id}", get(handler::get_contest))
        .route("/{id}/standings", get(handler::get_standings))
        .route("/{id}/events", get(handler::contest_events))
        .merge(protected)
}
