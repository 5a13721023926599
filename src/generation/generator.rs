//! Population generator - creates random pops and attaches their traits

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::config::{Catalog, GeneratorConfig};
use crate::core::error::Result;
use crate::core::types::PlaceId;
use crate::generation::attributes::{generate_attributes, generate_trait_set};
use crate::population::service::fresh_pop_id;
use crate::population::Pop;
use crate::store::{EntityStore, PopFields};

/// Target name meaning "every place"
pub const EVERYWHERE: &str = "everywhere";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "place_id")]
pub enum GenerationTarget {
    Everywhere,
    Place(PlaceId),
}

impl GenerationTarget {
    pub fn parse(raw: &str) -> Self {
        if raw == EVERYWHERE {
            Self::Everywhere
        } else {
            Self::Place(PlaceId::new(raw))
        }
    }
}

/// Result of attaching one generated trait
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitOutcome {
    #[serde(rename = "trait")]
    pub name: String,
    pub attached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A created pop plus what happened to each of its traits
#[derive(Clone, Debug, Serialize)]
pub struct GeneratedPop {
    pub pop: Pop,
    pub traits: Vec<TraitOutcome>,
}

impl GeneratedPop {
    pub fn attached_traits(&self) -> impl Iterator<Item = &str> + '_ {
        self.traits
            .iter()
            .filter(|t| t.attached)
            .map(|t| t.name.as_str())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PlaceBatch {
    pub place_id: PlaceId,
    pub created: usize,
    pub failures: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    pub target: GenerationTarget,
    pub requested_per_place: usize,
    pub places: Vec<PlaceBatch>,
}

impl BatchReport {
    pub fn total_created(&self) -> usize {
        self.places.iter().map(|p| p.created).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.places.iter().map(|p| p.failures.len()).sum()
    }
}

/// Creates random pops against a store.
///
/// Owns its random source, so one generator per caller keeps draws
/// independent; a seeded generator reproduces the same pops.
pub struct PopulationGenerator {
    rng: ChaCha8Rng,
    config: GeneratorConfig,
    catalog: Catalog,
}

impl PopulationGenerator {
    pub fn new(config: GeneratorConfig, catalog: Catalog) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng, config, catalog }
    }

    pub fn with_seed(seed: u64) -> Self {
        let config = GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        };
        Self::new(config, Catalog::default())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Create one random pop in `place_id` and attach a random trait set.
    ///
    /// Fails only if the pop itself cannot be created. Trait attachment is
    /// best-effort: each failure is logged and recorded in the outcome list.
    pub fn generate_one<S: EntityStore + ?Sized>(
        &mut self,
        store: &mut S,
        place_id: &PlaceId,
    ) -> Result<GeneratedPop> {
        let demographics = generate_attributes(&mut self.rng, &self.config, &self.catalog);

        let id = fresh_pop_id(store, &mut self.rng)?;
        let pop = store.pop_create(PopFields {
            id,
            place_id: place_id.clone(),
            population: self.config.default_population,
            gender: demographics.gender,
            age: demographics.age,
            wealth: demographics.wealth,
            job: demographics.job,
        })?;

        let traits = generate_trait_set(&mut self.rng, &self.config, &self.catalog)
            .into_iter()
            .map(|name| match store.trait_attach(&pop.id, &name) {
                Ok(_) => TraitOutcome {
                    name,
                    attached: true,
                    error: None,
                },
                Err(e) => {
                    warn!("Failed to attach trait {} to pop {}: {}", name, pop.id, e);
                    TraitOutcome {
                        name,
                        attached: false,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        debug!("Generated pop {} in {}", pop.id, place_id);
        Ok(GeneratedPop { pop, traits })
    }

    /// Create `count` pops in one place or in every place, sequentially.
    ///
    /// Each pop is independent: a failure is recorded against its place and
    /// the batch carries on. Nothing is rolled back.
    pub fn generate_many<S: EntityStore + ?Sized>(
        &mut self,
        store: &mut S,
        target: GenerationTarget,
        count: usize,
    ) -> Result<BatchReport> {
        let place_ids: Vec<PlaceId> = match &target {
            GenerationTarget::Everywhere => store
                .place_list()?
                .into_iter()
                .map(|p| p.id)
                .collect(),
            GenerationTarget::Place(id) => vec![id.clone()],
        };

        let mut places = Vec::with_capacity(place_ids.len());
        for place_id in place_ids {
            info!("Creating {} pops in {}", count, place_id);
            let mut batch = PlaceBatch {
                place_id: place_id.clone(),
                created: 0,
                failures: Vec::new(),
            };

            for _ in 0..count {
                match self.generate_one(store, &place_id) {
                    Ok(_) => batch.created += 1,
                    Err(e) => {
                        warn!("Failed to generate pop in {}: {}", place_id, e);
                        batch.failures.push(e.to_string());
                    }
                }
            }
            places.push(batch);
        }

        let report = BatchReport {
            target,
            requested_per_place: count,
            places,
        };
        info!(
            "Generation finished: {} created, {} failed",
            report.total_created(),
            report.total_failed()
        );
        Ok(report)
    }
}
