mod games;
mod health;
mod lookup;
mod results;
mod sets;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::live))
        .route("/api/sets", get(sets::list_sets).post(sets::create_set))
        .route("/api/sets/:id", delete(sets::delete_set))
        .route(
            "/api/results",
            get(results::list_results).post(results::save_result),
        )
        .route("/api/cleanup", post(results::cleanup))
        .route("/api/games", get(games::list_games))
        .route("/api/lookup", post(lookup::lookup_word))
        .with_state(state)
}
