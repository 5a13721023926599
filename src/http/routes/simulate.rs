use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::generation::{BatchReport, GeneratedPop, GenerationTarget};
use crate::http::error::{ApiResult, HttpApiError};
use crate::http::extract::ApiPath;
use crate::http::state::AppState;
use crate::store::EntityStore;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(super) enum Simulated {
    One(GeneratedPop),
    Batch(BatchReport),
}

pub(super) async fn simulate_one(
    ApiPath(place_id): ApiPath<String>,
    State(state): State<AppState>,
) -> ApiResult<Simulated> {
    let mut world = state.inner.lock().await;
    let world = &mut *world;
    let result = match GenerationTarget::parse(&place_id) {
        GenerationTarget::Place(id) => {
            Simulated::One(world.generator.generate_one(&mut world.store, &id)?)
        }
        target => Simulated::Batch(world.generator.generate_many(&mut world.store, target, 1)?),
    };
    Ok(Json(result))
}

pub(super) async fn simulate_many(
    ApiPath((place_id, count)): ApiPath<(String, usize)>,
    State(state): State<AppState>,
) -> ApiResult<BatchReport> {
    let cap = state.config.server.max_simulate_count;
    if count == 0 || count > cap {
        return Err(HttpApiError::bad_request(format!(
            "count must be between 1 and {}",
            cap
        )));
    }

    let mut world = state.inner.lock().await;
    let world = &mut *world;
    let target = GenerationTarget::parse(&place_id);
    if let GenerationTarget::Place(id) = &target {
        world.store.place_get(id)?;
    }
    let report = world.generator.generate_many(&mut world.store, target, count)?;
    Ok(Json(report))
}
