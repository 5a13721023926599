use axum::extract::State;
use axum::Json;

use crate::http::state::AppState;

pub(super) async fn traits(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.config.catalog.traits.clone())
}

pub(super) async fn beliefs(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.config.catalog.beliefs.clone())
}

pub(super) async fn industries(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.config.catalog.jobs.clone())
}
