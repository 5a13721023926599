use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::core::types::PlaceId;
use crate::generation::{seed_places, SeedReport};
use crate::http::error::{ApiResult, HttpApiError};
use crate::http::extract::{ApiJson, ApiPath};
use crate::http::state::AppState;
use crate::population::service::{self, PlaceRequest};
use crate::population::PlaceView;
use crate::store::EntityStore;

#[derive(Debug, Serialize)]
pub(super) struct PlaceCreated {
    message: &'static str,
    place: PlaceView,
}

pub(super) async fn list_places(State(state): State<AppState>) -> ApiResult<Vec<PlaceView>> {
    let world = state.inner.lock().await;
    let places = world.store.place_list()?;
    Ok(Json(places.iter().map(PlaceView::from).collect()))
}

pub(super) async fn create_place(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PlaceRequest>,
) -> Result<(StatusCode, Json<PlaceCreated>), HttpApiError> {
    let mut world = state.inner.lock().await;
    let place = service::create_place(&mut world.store, request)?;
    Ok((
        StatusCode::CREATED,
        Json(PlaceCreated {
            message: "Place created.",
            place: PlaceView::from(&place),
        }),
    ))
}

pub(super) async fn get_place(
    ApiPath(place_id): ApiPath<String>,
    State(state): State<AppState>,
) -> ApiResult<PlaceView> {
    let world = state.inner.lock().await;
    let place = world.store.place_get(&PlaceId::new(place_id))?;
    Ok(Json(PlaceView::from(&place)))
}

pub(super) async fn seed(State(state): State<AppState>) -> Json<SeedReport> {
    let mut world = state.inner.lock().await;
    Json(seed_places(&mut world.store))
}
