pub mod health;

use axum::{routing::get, Router};

use crate::card::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/card", get(handlers::handle_card))
        .route("/api/v1/card/random", get(handlers::handle_random_card))
        .with_state(state)
}
