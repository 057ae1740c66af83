pub mod error;
pub mod exchanges;
pub mod profiles;
pub mod skills;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// All API routes, without transport layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/exchanges", get(exchanges::list_exchanges))
        .route("/api/match/{user_id}", get(exchanges::match_exchanges))
        .route("/api/analyze-skill", post(skills::analyze_skill))
        .route("/api/register", post(profiles::register))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}
