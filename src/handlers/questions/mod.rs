//! Question handlers

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

/// Question routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/{id}", put(handler::update_question))
        .route("/{id}/verify", post(handler::verify_question))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/{id}", get(handler::get_question))
        .merge(protected)
}
