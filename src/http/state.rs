use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::config::AppConfig;
use crate::generation::PopulationGenerator;
use crate::store::MemoryStore;

/// Everything a request may mutate
pub struct World {
    pub store: MemoryStore,
    pub generator: PopulationGenerator,
}

/// Shared handler state. One lock around the world serializes requests.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<Mutex<World>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: MemoryStore) -> Self {
        let generator = PopulationGenerator::new(config.generator.clone(), config.catalog.clone());
        Self {
            inner: Arc::new(Mutex::new(World { store, generator })),
            config: Arc::new(config),
        }
    }

    /// State over an empty store using the config's catalog
    pub fn from_config(config: AppConfig) -> Self {
        let store = MemoryStore::with_catalog(config.catalog.clone());
        Self::new(config, store)
    }
}
