//! Validated create/read/delete operations over an [`EntityStore`]
//!
//! These apply request defaults and name normalization before handing rows to
//! the store. The store itself enforces catalog membership and uniqueness.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{Catalog, GeneratorConfig, UNEMPLOYED};
use crate::core::error::{PopError, Result};
use crate::core::naming::{dehumanize, humanize};
use crate::core::types::{Gender, PlaceId, PopId};
use crate::population::records::DEFAULT_STRENGTH;
use crate::population::{BeliefRecord, BeliefSummary, Place, Pop, PopDetail, PopRef, TraitRecord};
use crate::store::{EntityStore, PopFields};

/// Age drawn for pops created without one
pub const DEFAULT_AGE_RANGE: RangeInclusive<u32> = 18..=60;
/// Wealth tier for pops created without one
pub const DEFAULT_WEALTH: u8 = 1;

const MAX_ID_ATTEMPTS: usize = 16;

/// A place is named either by its id or by a human-readable name, not both
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub two_letter_code: Option<String>,
}

/// Request to create a pop; absent fields take defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPop {
    pub place_id: Option<String>,
    pub population: Option<u32>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub wealth: Option<u8>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitCheck {
    pub result: bool,
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub pop_id: PopId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeliefCheck {
    pub result: bool,
    pub belief: String,
    pub description: String,
    pub pop_id: PopId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<PlaceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn create_place<S: EntityStore + ?Sized>(store: &mut S, request: PlaceRequest) -> Result<Place> {
    let raw = match (non_blank(request.id), non_blank(request.name)) {
        (Some(_), Some(_)) => {
            return Err(PopError::InvalidInput("Must only specify id or name".into()))
        }
        (None, None) => return Err(PopError::InvalidInput("Missing data for place.".into())),
        (Some(id), None) => id,
        (None, Some(name)) => name,
    };

    let place = Place::new(
        PlaceId::new(dehumanize(raw.trim())),
        non_blank(request.two_letter_code),
    );
    let place = store.place_create(place)?;
    debug!("Created place {}", place.id);
    Ok(place)
}

/// Draw an id no existing pop uses
pub fn fresh_pop_id<S: EntityStore + ?Sized, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<PopId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = PopId::generate(rng);
        match store.pop_get(&id) {
            Err(e) if e.is_not_found() => return Ok(id),
            Err(e) => return Err(e),
            Ok(_) => continue,
        }
    }
    Err(PopError::Store("could not allocate an unused pop id".into()))
}

pub fn create_pop<S: EntityStore + ?Sized, R: Rng + ?Sized>(
    store: &mut S,
    rng: &mut R,
    request: NewPop,
    defaults: &GeneratorConfig,
) -> Result<Pop> {
    let place_id = non_blank(request.place_id)
        .ok_or_else(|| PopError::InvalidInput("place_id required".into()))?;

    let age = match request.age {
        Some(age) => age,
        None => rng.gen_range(DEFAULT_AGE_RANGE),
    };

    let fields = PopFields {
        id: fresh_pop_id(store, rng)?,
        place_id: PlaceId::new(place_id),
        population: request.population.unwrap_or(defaults.default_population),
        gender: request.gender.unwrap_or_default(),
        age,
        wealth: request.wealth.unwrap_or(DEFAULT_WEALTH),
        job: request.job.unwrap_or_else(|| UNEMPLOYED.to_string()),
    };

    let pop = store.pop_create(fields)?;
    debug!("Created pop {} in {}", pop.id, pop.place_id);
    Ok(pop)
}

pub fn pop_detail<S: EntityStore + ?Sized>(store: &S, catalog: &Catalog, id: &PopId) -> Result<PopDetail> {
    let pop = store.pop_get(id)?;
    let traits = store
        .trait_list(id)?
        .into_iter()
        .map(|t| t.name)
        .collect();
    let beliefs = store
        .belief_list(id)?
        .into_iter()
        .map(|b| BeliefSummary {
            belief: b.name,
            strength: b.strength,
        })
        .collect();
    let wealth_name = catalog
        .wealth_label(pop.wealth)
        .map(str::to_string)
        .unwrap_or_default();

    Ok(PopDetail {
        id: pop.id,
        place_id: pop.place_id,
        population: pop.population,
        gender: pop.gender,
        age: pop.age,
        wealth: pop.wealth,
        wealth_name,
        job: pop.job,
        traits,
        beliefs,
    })
}

/// Ids of every pop living in `place_id`
pub fn pops_in_place<S: EntityStore + ?Sized>(store: &S, place_id: &PlaceId) -> Result<Vec<PopId>> {
    Ok(store
        .pop_list_by_place(place_id)?
        .into_iter()
        .map(|p| p.id)
        .collect())
}

pub fn pop_index<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<PopRef>> {
    Ok(store.pop_list()?.iter().map(PopRef::from).collect())
}

pub fn delete_pop<S: EntityStore + ?Sized>(store: &mut S, id: &PopId) -> Result<()> {
    store.pop_delete(id)?;
    debug!("Deleted pop {}", id);
    Ok(())
}

fn trait_key(raw: &str) -> Result<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(PopError::InvalidInput("Trait name must be included".into()));
    }
    Ok(name)
}

fn belief_key(raw: &str) -> Result<String> {
    let name = dehumanize(raw.trim());
    if name.is_empty() {
        return Err(PopError::InvalidInput("Belief name must be included".into()));
    }
    Ok(name)
}

pub fn add_trait<S: EntityStore + ?Sized>(store: &mut S, pop_id: &PopId, raw_name: &str) -> Result<TraitRecord> {
    store.pop_get(pop_id)?;
    let name = trait_key(raw_name)?;
    store.trait_attach(pop_id, &name)
}

pub fn remove_trait<S: EntityStore + ?Sized>(store: &mut S, pop_id: &PopId, raw_name: &str) -> Result<()> {
    store.trait_detach(pop_id, &trait_key(raw_name)?)
}

pub fn check_trait<S: EntityStore + ?Sized>(store: &S, pop_id: &PopId, raw_name: &str) -> Result<TraitCheck> {
    let name = trait_key(raw_name)?;
    let result = store.trait_has(pop_id, &name)?;
    Ok(TraitCheck {
        result,
        trait_name: name,
        pop_id: pop_id.clone(),
    })
}

pub fn add_belief<S: EntityStore + ?Sized>(
    store: &mut S,
    pop_id: &PopId,
    raw_name: &str,
    strength: Option<i32>,
) -> Result<BeliefRecord> {
    store.pop_get(pop_id)?;
    let name = belief_key(raw_name)?;
    store.belief_set(pop_id, &name, strength.unwrap_or(DEFAULT_STRENGTH))
}

pub fn change_belief<S: EntityStore + ?Sized>(
    store: &mut S,
    pop_id: &PopId,
    raw_name: &str,
    strength: Option<i32>,
) -> Result<BeliefRecord> {
    let name = belief_key(raw_name)?;
    store.belief_update(pop_id, &name, strength.unwrap_or(DEFAULT_STRENGTH))
}

pub fn remove_belief<S: EntityStore + ?Sized>(store: &mut S, pop_id: &PopId, raw_name: &str) -> Result<()> {
    store.belief_detach(pop_id, &belief_key(raw_name)?)
}

pub fn check_belief<S: EntityStore + ?Sized>(store: &S, pop_id: &PopId, raw_name: &str) -> Result<BeliefCheck> {
    let name = belief_key(raw_name)?;
    let description = humanize(&name);

    match store.belief_find(pop_id, &name)? {
        Some(belief) => {
            let place_id = store.pop_get(pop_id)?.place_id;
            Ok(BeliefCheck {
                result: true,
                belief: name,
                description,
                pop_id: pop_id.clone(),
                place_id: Some(place_id),
                strength: Some(belief.strength),
            })
        }
        None => Ok(BeliefCheck {
            result: false,
            belief: name,
            description,
            pop_id: pop_id.clone(),
            place_id: None,
            strength: None,
        }),
    }
}
