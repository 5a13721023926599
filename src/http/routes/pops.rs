use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Message;
use crate::core::types::{PlaceId, PopId};
use crate::http::error::{ApiResult, HttpApiError};
use crate::http::extract::{ApiJson, ApiPath};
use crate::http::state::AppState;
use crate::population::service::{self, BeliefCheck, NewPop, TraitCheck};
use crate::population::{BeliefRecord, Pop, PopDetail, PopRef, TraitRecord};

#[derive(Debug, Default, Deserialize)]
pub(super) struct PopQuery {
    place_id: Option<String>,
}

/// Ids only when filtered by place, `{id, place_id}` pairs otherwise
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(super) enum PopListing {
    Ids(Vec<PopId>),
    Refs(Vec<PopRef>),
}

#[derive(Debug, Serialize)]
pub(super) struct PopCreated {
    message: &'static str,
    pop: Pop,
}

#[derive(Debug, Deserialize)]
pub(super) struct TraitBody {
    trait_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct StrengthBody {
    strength: Option<i32>,
}

/// Parse an optional JSON body; an empty body yields the default
fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, HttpApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| HttpApiError::bad_request(format!("Invalid JSON body: {}", e)))
}

pub(super) async fn list_pops(
    State(state): State<AppState>,
    Query(query): Query<PopQuery>,
) -> ApiResult<PopListing> {
    let world = state.inner.lock().await;
    let listing = match query.place_id {
        Some(place_id) => {
            PopListing::Ids(service::pops_in_place(&world.store, &PlaceId::new(place_id))?)
        }
        None => PopListing::Refs(service::pop_index(&world.store)?),
    };
    Ok(Json(listing))
}

pub(super) async fn create_pop(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewPop>,
) -> ApiResult<PopCreated> {
    let mut world = state.inner.lock().await;
    let world = &mut *world;
    let pop = service::create_pop(
        &mut world.store,
        world.generator.rng_mut(),
        request,
        &state.config.generator,
    )?;
    Ok(Json(PopCreated {
        message: "success",
        pop,
    }))
}

pub(super) async fn get_pop(
    ApiPath(pop_id): ApiPath<String>,
    State(state): State<AppState>,
) -> ApiResult<PopDetail> {
    let world = state.inner.lock().await;
    let detail = service::pop_detail(&world.store, &state.config.catalog, &PopId::new(pop_id))?;
    Ok(Json(detail))
}

pub(super) async fn delete_pop(
    ApiPath(pop_id): ApiPath<String>,
    State(state): State<AppState>,
) -> ApiResult<Message> {
    let mut world = state.inner.lock().await;
    service::delete_pop(&mut world.store, &PopId::new(pop_id))?;
    Ok(Json(Message::new("Pop deleted.")))
}

pub(super) async fn add_trait(
    ApiPath(pop_id): ApiPath<String>,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TraitBody>,
) -> ApiResult<TraitRecord> {
    let trait_name = body.trait_name.unwrap_or_default();
    let mut world = state.inner.lock().await;
    let record = service::add_trait(&mut world.store, &PopId::new(pop_id), &trait_name)?;
    Ok(Json(record))
}

pub(super) async fn check_trait(
    ApiPath((pop_id, trait_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<TraitCheck> {
    let world = state.inner.lock().await;
    let check = service::check_trait(&world.store, &PopId::new(pop_id), &trait_name)?;
    Ok(Json(check))
}

pub(super) async fn remove_trait(
    ApiPath((pop_id, trait_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<Message> {
    let mut world = state.inner.lock().await;
    service::remove_trait(&mut world.store, &PopId::new(pop_id), &trait_name)?;
    Ok(Json(Message::new("Trait deleted.")))
}

pub(super) async fn add_belief(
    ApiPath((pop_id, belief_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<BeliefRecord> {
    let body: StrengthBody = optional_json(&body)?;
    let mut world = state.inner.lock().await;
    let record = service::add_belief(
        &mut world.store,
        &PopId::new(pop_id),
        &belief_name,
        body.strength,
    )?;
    Ok(Json(record))
}

pub(super) async fn change_belief(
    ApiPath((pop_id, belief_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<BeliefRecord> {
    let body: StrengthBody = optional_json(&body)?;
    let mut world = state.inner.lock().await;
    let record = service::change_belief(
        &mut world.store,
        &PopId::new(pop_id),
        &belief_name,
        body.strength,
    )?;
    Ok(Json(record))
}

pub(super) async fn check_belief(
    ApiPath((pop_id, belief_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<BeliefCheck> {
    let world = state.inner.lock().await;
    let check = service::check_belief(&world.store, &PopId::new(pop_id), &belief_name)?;
    Ok(Json(check))
}

pub(super) async fn remove_belief(
    ApiPath((pop_id, belief_name)): ApiPath<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<Message> {
    let mut world = state.inner.lock().await;
    service::remove_belief(&mut world.store, &PopId::new(pop_id), &belief_name)?;
    Ok(Json(Message::new("Belief deleted.")))
}
