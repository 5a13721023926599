//! JSON snapshots of a store

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::config::Catalog;
use crate::core::error::Result;
use crate::population::{BeliefRecord, Place, Pop, TraitRecord};
use crate::store::{EntityStore, MemoryStore, PopFields};

/// Flat dump of every row in a store
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub places: Vec<Place>,
    pub pops: Vec<Pop>,
    pub traits: Vec<TraitRecord>,
    pub beliefs: Vec<BeliefRecord>,
}

impl StoreSnapshot {
    pub fn capture<S: EntityStore + ?Sized>(store: &S) -> Result<Self> {
        let places = store.place_list()?;
        let pops = store.pop_list()?;

        let mut traits = Vec::new();
        let mut beliefs = Vec::new();
        for pop in &pops {
            traits.extend(store.trait_list(&pop.id)?);
            beliefs.extend(store.belief_list(&pop.id)?);
        }

        Ok(Self {
            places,
            pops,
            traits,
            beliefs,
        })
    }

    /// Replay the rows into `store` in dependency order.
    ///
    /// Every row goes through the store's normal validation, so a snapshot
    /// written under a different catalog fails here instead of loading
    /// names the running config does not know.
    pub fn restore_into<S: EntityStore + ?Sized>(self, store: &mut S) -> Result<()> {
        for place in self.places {
            store.place_create(place)?;
        }
        for pop in self.pops {
            store.pop_create(PopFields {
                id: pop.id,
                place_id: pop.place_id,
                population: pop.population,
                gender: pop.gender,
                age: pop.age,
                wealth: pop.wealth,
                job: pop.job,
            })?;
        }
        for row in self.traits {
            store.trait_attach(&row.pop_id, &row.name)?;
        }
        for row in self.beliefs {
            store.belief_set(&row.pop_id, &row.name, row.strength)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to a sibling temp file, then rename over `path`, so an
    /// interrupted save leaves the previous snapshot intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp = temp_path(path);
        fs::write(&tmp, self.to_json()?)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}

impl MemoryStore {
    /// Build a store from a snapshot file, validating rows against `catalog`
    pub fn load_snapshot(path: &Path, catalog: Catalog) -> Result<Self> {
        let mut store = MemoryStore::with_catalog(catalog);
        StoreSnapshot::load(path)?.restore_into(&mut store)?;
        Ok(store)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        StoreSnapshot::capture(self)?.save(path)
    }
}
