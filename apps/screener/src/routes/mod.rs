pub mod candidates;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(candidates::handle_parse_resume))
        .route("/score-candidate", post(candidates::handle_score_candidate))
        .route(
            "/score-candidate/breakdown",
            post(candidates::handle_score_breakdown),
        )
        .with_state(state)
}
