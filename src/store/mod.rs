//! Entity storage for places, pops, traits and beliefs
//!
//! The core only needs insert, point lookup, filter-by-field and delete.
//! `MemoryStore` is the shipped implementation; `snapshot` persists it as JSON.

mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::StoreSnapshot;

use crate::core::error::Result;
use crate::core::types::{Gender, PlaceId, PopId};
use crate::population::{BeliefRecord, Place, Pop, TraitRecord};

/// Fields of a pop about to be created
#[derive(Clone, Debug)]
pub struct PopFields {
    pub id: PopId,
    pub place_id: PlaceId,
    pub population: u32,
    pub gender: Gender,
    pub age: u32,
    pub wealth: u8,
    pub job: String,
}

pub trait EntityStore {
    /// Fails with AlreadyExists when the id is taken
    fn place_create(&mut self, place: Place) -> Result<Place>;
    fn place_get(&self, id: &PlaceId) -> Result<Place>;
    fn place_list(&self) -> Result<Vec<Place>>;

    /// Fails with NotFound if the place is absent, InvalidName for an unknown job
    fn pop_create(&mut self, fields: PopFields) -> Result<Pop>;
    fn pop_get(&self, id: &PopId) -> Result<Pop>;
    fn pop_list(&self) -> Result<Vec<Pop>>;
    fn pop_list_by_place(&self, place_id: &PlaceId) -> Result<Vec<Pop>>;
    /// Removes the pop's traits, then its beliefs, then the pop
    fn pop_delete(&mut self, id: &PopId) -> Result<()>;

    fn trait_attach(&mut self, pop_id: &PopId, name: &str) -> Result<TraitRecord>;
    fn trait_detach(&mut self, pop_id: &PopId, name: &str) -> Result<()>;
    fn trait_has(&self, pop_id: &PopId, name: &str) -> Result<bool>;
    fn trait_list(&self, pop_id: &PopId) -> Result<Vec<TraitRecord>>;

    /// Creates a belief row; AlreadyExists if the pop already holds it
    fn belief_set(&mut self, pop_id: &PopId, name: &str, strength: i32) -> Result<BeliefRecord>;
    /// Changes the strength of an existing belief row
    fn belief_update(&mut self, pop_id: &PopId, name: &str, strength: i32) -> Result<BeliefRecord>;
    fn belief_get(&self, pop_id: &PopId, name: &str) -> Result<BeliefRecord>;
    fn belief_detach(&mut self, pop_id: &PopId, name: &str) -> Result<()>;
    fn belief_list(&self, pop_id: &PopId) -> Result<Vec<BeliefRecord>>;

    /// Belief row for `name` if the pop holds one. Absence is not an error.
    fn belief_find(&self, pop_id: &PopId, name: &str) -> Result<Option<BeliefRecord>> {
        match self.belief_get(pop_id, name) {
            Ok(belief) => Ok(Some(belief)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
