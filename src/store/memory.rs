//! In-memory entity store

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use crate::core::config::{catalog, Catalog};
use crate::core::error::{PopError, Result};
use crate::core::types::{PlaceId, PopId};
use crate::population::records::validate_strength;
use crate::population::{BeliefRecord, Place, Pop, TraitRecord};
use crate::store::{EntityStore, PopFields};

/// Ordered maps keep listings deterministic; the per-pop indexes are hashed.
pub struct MemoryStore {
    catalog: Catalog,
    places: BTreeMap<PlaceId, Place>,
    pops: BTreeMap<PopId, Pop>,
    /// place -> pops living there
    residents: AHashMap<PlaceId, BTreeSet<PopId>>,
    traits: AHashMap<PopId, BTreeSet<String>>,
    beliefs: AHashMap<PopId, BTreeMap<String, i32>>,
}

impl MemoryStore {
    /// Empty store validating against the global catalog
    pub fn new() -> Self {
        Self::with_catalog(catalog().clone())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            places: BTreeMap::new(),
            pops: BTreeMap::new(),
            residents: AHashMap::new(),
            traits: AHashMap::new(),
            beliefs: AHashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn pop_count(&self) -> usize {
        self.pops.len()
    }

    pub fn trait_row_count(&self) -> usize {
        self.traits.values().map(BTreeSet::len).sum()
    }

    pub fn belief_row_count(&self) -> usize {
        self.beliefs.values().map(BTreeMap::len).sum()
    }

    fn require_pop(&self, pop_id: &PopId) -> Result<&Pop> {
        self.pops
            .get(pop_id)
            .ok_or_else(|| PopError::not_found("Pop", pop_id.as_str()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for MemoryStore {
    fn place_create(&mut self, place: Place) -> Result<Place> {
        if self.places.contains_key(&place.id) {
            return Err(PopError::already_exists("Place", place.id.as_str()));
        }
        self.places.insert(place.id.clone(), place.clone());
        Ok(place)
    }

    fn place_get(&self, id: &PlaceId) -> Result<Place> {
        self.places
            .get(id)
            .cloned()
            .ok_or_else(|| PopError::not_found("Place", id.as_str()))
    }

    fn place_list(&self) -> Result<Vec<Place>> {
        Ok(self.places.values().cloned().collect())
    }

    fn pop_create(&mut self, fields: PopFields) -> Result<Pop> {
        if !self.places.contains_key(&fields.place_id) {
            return Err(PopError::not_found("Place", fields.place_id.as_str()));
        }
        if self.pops.contains_key(&fields.id) {
            return Err(PopError::already_exists("Pop", fields.id.as_str()));
        }
        self.catalog.require_job(&fields.job)?;
        if self.catalog.wealth_label(fields.wealth).is_none() {
            return Err(PopError::InvalidInput(format!(
                "wealth {} outside 0..={}",
                fields.wealth,
                self.catalog.wealth_tiers.len().saturating_sub(1)
            )));
        }
        if fields.population == 0 {
            return Err(PopError::InvalidInput("population must be at least 1".into()));
        }

        let pop = Pop {
            id: fields.id,
            place_id: fields.place_id,
            population: fields.population,
            gender: fields.gender,
            age: fields.age,
            wealth: fields.wealth,
            job: fields.job,
        };

        self.residents
            .entry(pop.place_id.clone())
            .or_default()
            .insert(pop.id.clone());
        self.pops.insert(pop.id.clone(), pop.clone());
        Ok(pop)
    }

    fn pop_get(&self, id: &PopId) -> Result<Pop> {
        self.require_pop(id).cloned()
    }

    fn pop_list(&self) -> Result<Vec<Pop>> {
        Ok(self.pops.values().cloned().collect())
    }

    fn pop_list_by_place(&self, place_id: &PlaceId) -> Result<Vec<Pop>> {
        let Some(ids) = self.residents.get(place_id) else {
            return Ok(Vec::new());
        };
        Ok(ids.iter().filter_map(|id| self.pops.get(id)).cloned().collect())
    }

    fn pop_delete(&mut self, id: &PopId) -> Result<()> {
        let place_id = self.require_pop(id)?.place_id.clone();

        // Dependent rows first so nothing ever points at a missing pop
        self.traits.remove(id);
        self.beliefs.remove(id);

        if let Some(ids) = self.residents.get_mut(&place_id) {
            ids.remove(id);
        }
        self.pops.remove(id);
        Ok(())
    }

    fn trait_attach(&mut self, pop_id: &PopId, name: &str) -> Result<TraitRecord> {
        self.require_pop(pop_id)?;
        self.catalog.require_trait(name)?;

        let held = self.traits.entry(pop_id.clone()).or_default();
        if !held.insert(name.to_string()) {
            return Err(PopError::already_exists(
                "Trait",
                format!("{} on pop {}", name, pop_id),
            ));
        }

        Ok(TraitRecord {
            pop_id: pop_id.clone(),
            name: name.to_string(),
        })
    }

    fn trait_detach(&mut self, pop_id: &PopId, name: &str) -> Result<()> {
        let removed = self
            .traits
            .get_mut(pop_id)
            .map(|held| held.remove(name))
            .unwrap_or(false);

        if removed {
            Ok(())
        } else {
            Err(PopError::not_found("Trait", name))
        }
    }

    fn trait_has(&self, pop_id: &PopId, name: &str) -> Result<bool> {
        self.require_pop(pop_id)?;
        Ok(self
            .traits
            .get(pop_id)
            .map(|held| held.contains(name))
            .unwrap_or(false))
    }

    fn trait_list(&self, pop_id: &PopId) -> Result<Vec<TraitRecord>> {
        self.require_pop(pop_id)?;
        Ok(self
            .traits
            .get(pop_id)
            .into_iter()
            .flatten()
            .map(|name| TraitRecord {
                pop_id: pop_id.clone(),
                name: name.clone(),
            })
            .collect())
    }

    fn belief_set(&mut self, pop_id: &PopId, name: &str, strength: i32) -> Result<BeliefRecord> {
        self.require_pop(pop_id)?;
        self.catalog.require_belief(name)?;
        let strength = validate_strength(strength)?;

        let held = self.beliefs.entry(pop_id.clone()).or_default();
        if held.contains_key(name) {
            return Err(PopError::already_exists(
                "Belief",
                format!("{} on pop {}", name, pop_id),
            ));
        }
        held.insert(name.to_string(), strength);

        Ok(BeliefRecord {
            pop_id: pop_id.clone(),
            name: name.to_string(),
            strength,
        })
    }

    fn belief_update(&mut self, pop_id: &PopId, name: &str, strength: i32) -> Result<BeliefRecord> {
        let strength = validate_strength(strength)?;
        let slot = self
            .beliefs
            .get_mut(pop_id)
            .and_then(|held| held.get_mut(name))
            .ok_or_else(|| PopError::not_found("Belief", name))?;
        *slot = strength;

        Ok(BeliefRecord {
            pop_id: pop_id.clone(),
            name: name.to_string(),
            strength,
        })
    }

    fn belief_get(&self, pop_id: &PopId, name: &str) -> Result<BeliefRecord> {
        self.beliefs
            .get(pop_id)
            .and_then(|held| held.get(name))
            .map(|&strength| BeliefRecord {
                pop_id: pop_id.clone(),
                name: name.to_string(),
                strength,
            })
            .ok_or_else(|| PopError::not_found("Belief", name))
    }

    fn belief_detach(&mut self, pop_id: &PopId, name: &str) -> Result<()> {
        let removed = self
            .beliefs
            .get_mut(pop_id)
            .and_then(|held| held.remove(name))
            .is_some();

        if removed {
            Ok(())
        } else {
            Err(PopError::not_found("Belief", name))
        }
    }

    fn belief_list(&self, pop_id: &PopId) -> Result<Vec<BeliefRecord>> {
        self.require_pop(pop_id)?;
        Ok(self
            .beliefs
            .get(pop_id)
            .into_iter()
            .flatten()
            .map(|(name, &strength)| BeliefRecord {
                pop_id: pop_id.clone(),
                name: name.clone(),
                strength,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::types::Gender;

    fn store_with_place() -> MemoryStore {
        let mut store = MemoryStore::with_catalog(Catalog::default());
        store
            .place_create(Place::new(PlaceId::new("ohio"), Some("oh".into())))
            .unwrap();
        store
    }

    fn fields(id: &str) -> PopFields {
        PopFields {
            id: PopId::new(id),
            place_id: PlaceId::new("ohio"),
            population: 1000,
            gender: Gender::Female,
            age: 34,
            wealth: 2,
            job: "farming".into(),
        }
    }

    #[test]
    fn test_duplicate_place_rejected() {
        let mut store = store_with_place();
        let err = store
            .place_create(Place::new(PlaceId::new("ohio"), None))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_pop_requires_existing_place() {
        let mut store = store_with_place();
        let mut f = fields("aaaa0001");
        f.place_id = PlaceId::new("atlantis");
        assert_eq!(store.pop_create(f).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_pop_rejects_unknown_job_and_bad_wealth() {
        let mut store = store_with_place();

        let mut f = fields("aaaa0001");
        f.job = "astronaut".into();
        assert_eq!(store.pop_create(f).unwrap_err().kind(), ErrorKind::InvalidName);

        let mut f = fields("aaaa0002");
        f.wealth = 6;
        assert_eq!(store.pop_create(f).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_trait_uniqueness_and_validation() {
        let mut store = store_with_place();
        let pop = store.pop_create(fields("aaaa0001")).unwrap();

        store.trait_attach(&pop.id, "parent").unwrap();
        assert_eq!(
            store.trait_attach(&pop.id, "parent").unwrap_err().kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            store.trait_attach(&pop.id, "wizard").unwrap_err().kind(),
            ErrorKind::InvalidName
        );
        assert!(store.trait_has(&pop.id, "parent").unwrap());
        assert!(!store.trait_has(&pop.id, "smoker").unwrap());

        store.trait_detach(&pop.id, "parent").unwrap();
        assert!(!store.trait_has(&pop.id, "parent").unwrap());
        assert_eq!(
            store.trait_detach(&pop.id, "parent").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_belief_set_update_and_range() {
        let mut store = store_with_place();
        let pop = store.pop_create(fields("aaaa0001")).unwrap();

        store.belief_set(&pop.id, "environment", 30).unwrap();
        assert_eq!(
            store.belief_set(&pop.id, "environment", 10).unwrap_err().kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            store.belief_set(&pop.id, "astrology", 10).unwrap_err().kind(),
            ErrorKind::InvalidName
        );
        assert_eq!(
            store.belief_set(&pop.id, "law_and_order", 101).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );

        store.belief_update(&pop.id, "environment", -75).unwrap();
        assert_eq!(store.belief_get(&pop.id, "environment").unwrap().strength, -75);
        assert!(store.belief_find(&pop.id, "law_and_order").unwrap().is_none());
    }

    #[test]
    fn test_pop_delete_cascades() {
        let mut store = store_with_place();
        let pop = store.pop_create(fields("aaaa0001")).unwrap();
        store.trait_attach(&pop.id, "parent").unwrap();
        store.trait_attach(&pop.id, "smoker").unwrap();
        store.belief_set(&pop.id, "environment", 90).unwrap();

        store.pop_delete(&pop.id).unwrap();

        assert_eq!(store.trait_row_count(), 0);
        assert_eq!(store.belief_row_count(), 0);
        assert_eq!(store.pop_get(&pop.id).unwrap_err().kind(), ErrorKind::NotFound);
        assert!(store.pop_list_by_place(&PlaceId::new("ohio")).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_pop_is_not_found() {
        let mut store = store_with_place();
        let err = store.pop_delete(&PopId::new("deadbeef")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
