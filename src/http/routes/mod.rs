use axum::routing::{get, post};
use axum::Router;

use super::state::AppState;

mod catalog;
mod places;
mod polls;
mod pops;
mod simulate;

pub(super) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/places/", get(places::list_places).post(places::create_place))
        .route("/places/seed/", post(places::seed))
        .route("/places/{place_id}/", get(places::get_place))
        .route("/places/{place_id}/polls/", get(polls::all_polls))
        .route(
            "/places/{place_id}/polls/traits/{trait_name}/",
            get(polls::trait_poll),
        )
        .route(
            "/places/{place_id}/polls/beliefs/{belief_name}/",
            get(polls::belief_poll),
        )
        .route("/pops/", get(pops::list_pops).post(pops::create_pop))
        .route("/pops/{pop_id}/", get(pops::get_pop).delete(pops::delete_pop))
        .route("/pops/{pop_id}/traits/", post(pops::add_trait))
        .route(
            "/pops/{pop_id}/traits/{trait_name}/",
            get(pops::check_trait).delete(pops::remove_trait),
        )
        .route(
            "/pops/{pop_id}/beliefs/{belief_name}/",
            get(pops::check_belief)
                .post(pops::add_belief)
                .put(pops::change_belief)
                .delete(pops::remove_belief),
        )
        .route("/traits/", get(catalog::traits))
        .route("/beliefs/", get(catalog::beliefs))
        .route("/industries/", get(catalog::industries))
        .route("/simulate/pops/{place_id}/", post(simulate::simulate_one))
        .route(
            "/simulate/pops/{place_id}/{count}/",
            post(simulate::simulate_many),
        )
}

#[derive(Debug, serde::Serialize)]
pub(super) struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
