use axum::extract::State;
use axum::Json;

use crate::core::naming::dehumanize;
use crate::core::types::PlaceId;
use crate::http::error::ApiResult;
use crate::http::extract::ApiPath;
use crate::http::state::AppState;
use crate::polls::{
    belief_distribution, place_poll_summary, trait_percentage, BeliefPoll, PlacePollSummary,
    TraitPoll,
};

pub(super) async fn all_polls(
    ApiPath(place_id): ApiPath<String>,
    State(state): State<AppState>,
) -> ApiResult<PlacePollSummary> {
    let world = state.inner.lock().await;
    let summary = place_poll_summary(
        &world.store,
        &state.config.catalog,
        &state.config.polls,
        &PlaceId::new(place_id),
    )?;
    Ok(Json(summary))
}

pub(super) async fn trait_poll(
    ApiPath((place_id, trait_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<TraitPoll> {
    let trait_name = dehumanize(trait_name.trim());
    let world = state.inner.lock().await;
    let share = trait_percentage(
        &world.store,
        &state.config.catalog,
        &PlaceId::new(place_id),
        &trait_name,
    )?;
    Ok(Json(TraitPoll {
        trait_name,
        percentage: Some(share),
    }))
}

pub(super) async fn belief_poll(
    ApiPath((place_id, belief_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<BeliefPoll> {
    let world = state.inner.lock().await;
    let poll = belief_distribution(
        &world.store,
        &state.config.catalog,
        &PlaceId::new(place_id),
        &dehumanize(belief_name.trim()),
    )?;
    Ok(Json(poll))
}
