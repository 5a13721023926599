//! Application configuration
//!
//! The fixed name catalogs (traits, beliefs, jobs, wealth tiers) ship as
//! compiled-in defaults and may be overridden by a TOML file at startup.
//! After startup the configuration is immutable and shared by reference.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{PopError, Result};

pub const DEFAULT_TRAITS: [&str; 11] = [
    "parent",
    "gun_owner",
    "military_veteran",
    "married",
    "immigrant",
    "car_owner",
    "cyclist",
    "outdoorsy",
    "alcohol_drinker",
    "smoker",
    "drug_taker",
];

pub const DEFAULT_BELIEFS: [&str; 14] = [
    "law_and_order",
    "strong_military",
    "strong_leadership",
    "environment",
    "balanced_budget",
    "economic_growth",
    "social_equality",
    "universal_health_care",
    "equal_rights",
    "equal_opportunity",
    "individual_liberty",
    "freedom_of_speech",
    "freedom_of_press",
    "individual_freedoms",
];

pub const DEFAULT_JOBS: [&str; 20] = [
    "unemployed",
    "administrative",
    "architecture",
    "engineering",
    "operations",
    "cleaning_and_maintenance",
    "social services",
    "government",
    "technology",
    "education",
    "farming",
    "healthcare",
    "legal",
    "academia",
    "management",
    "construction",
    "military",
    "police",
    "science",
    "retired",
];

pub const DEFAULT_WEALTH_TIERS: [&str; 6] = [
    "destitute",
    "working_poor",
    "struggling_middle_class",
    "comfortable_professionals",
    "wealthy",
    "rich",
];

pub const UNEMPLOYED: &str = "unemployed";
pub const RETIRED: &str = "retired";

/// The fixed name enumerations every pop field is validated against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub traits: Vec<String>,
    pub beliefs: Vec<String>,
    pub jobs: Vec<String>,
    /// Indexed by a pop's wealth value, poorest first
    pub wealth_tiers: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            traits: owned(&DEFAULT_TRAITS),
            beliefs: owned(&DEFAULT_BELIEFS),
            jobs: owned(&DEFAULT_JOBS),
            wealth_tiers: owned(&DEFAULT_WEALTH_TIERS),
        }
    }
}

impl Catalog {
    pub fn is_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t == name)
    }

    pub fn is_belief(&self, name: &str) -> bool {
        self.beliefs.iter().any(|b| b == name)
    }

    pub fn is_job(&self, name: &str) -> bool {
        self.jobs.iter().any(|j| j == name)
    }

    pub fn wealth_label(&self, wealth: u8) -> Option<&str> {
        self.wealth_tiers.get(wealth as usize).map(String::as_str)
    }

    pub fn require_trait(&self, name: &str) -> Result<()> {
        if self.is_trait(name) {
            Ok(())
        } else {
            Err(PopError::invalid_name("Trait", name))
        }
    }

    pub fn require_belief(&self, name: &str) -> Result<()> {
        if self.is_belief(name) {
            Ok(())
        } else {
            Err(PopError::invalid_name("Belief", name))
        }
    }

    pub fn require_job(&self, name: &str) -> Result<()> {
        if self.is_job(name) {
            Ok(())
        } else {
            Err(PopError::invalid_name("Job", name))
        }
    }
}

/// Knobs for procedural pop generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Youngest generated age (inclusive)
    pub min_age: u32,
    /// Oldest generated age (inclusive)
    pub max_age: u32,
    /// Pops strictly older than this are generated as retired.
    ///
    /// With the default age range this never fires; it only matters when
    /// `max_age` is raised above it.
    pub retirement_age: u32,
    /// Highest generated wealth tier (inclusive)
    pub max_wealth: u8,
    /// Bounds on the number of trait draws per pop (inclusive)
    pub min_traits: usize,
    pub max_traits: usize,
    /// Population assigned to pops created without one
    pub default_population: u32,
    /// Fixed seed for reproducible generation; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 70,
            retirement_age: 70,
            max_wealth: 5,
            min_traits: 2,
            max_traits: 5,
            default_population: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Compute a belief distribution for every catalog belief in the
    /// place summary. Off by default: the summary reports an empty list.
    pub include_belief_polls: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// JSON snapshot loaded at startup and written on shutdown
    pub snapshot_path: Option<PathBuf>,
    /// Largest per-place count one simulate request may ask for. Generation
    /// holds the world lock, so this bounds how long other requests wait.
    pub max_simulate_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:6688".to_string(),
            snapshot_path: None,
            max_simulate_count: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: Catalog,
    pub generator: GeneratorConfig,
    pub polls: PollConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        let catalog = &self.catalog;

        if generator.min_age > generator.max_age {
            return Err(PopError::InvalidInput(format!(
                "min_age ({}) must be <= max_age ({})",
                generator.min_age, generator.max_age
            )));
        }

        if generator.max_wealth as usize >= catalog.wealth_tiers.len() {
            return Err(PopError::InvalidInput(format!(
                "max_wealth ({}) has no label; only {} wealth tiers configured",
                generator.max_wealth,
                catalog.wealth_tiers.len()
            )));
        }

        if generator.min_traits > generator.max_traits {
            return Err(PopError::InvalidInput(format!(
                "min_traits ({}) must be <= max_traits ({})",
                generator.min_traits, generator.max_traits
            )));
        }

        if self.server.max_simulate_count == 0 {
            return Err(PopError::InvalidInput("max_simulate_count must be at least 1".into()));
        }

        if generator.default_population == 0 {
            return Err(PopError::InvalidInput("default_population must be at least 1".into()));
        }

        if catalog.traits.is_empty() || catalog.beliefs.is_empty() {
            return Err(PopError::InvalidInput("trait and belief catalogs must not be empty".into()));
        }

        for required in [UNEMPLOYED, RETIRED] {
            if !catalog.is_job(required) {
                return Err(PopError::InvalidInput(format!(
                    "job catalog must contain '{}'",
                    required
                )));
            }
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Shorthand for the global name catalog
pub fn catalog() -> &'static Catalog {
    &config().catalog
}

/// Set the global config (can only be called once, before first use)
///
/// Returns Err if config was already set.
pub fn set_config(config: AppConfig) -> std::result::Result<(), AppConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.traits.len(), 11);
        assert_eq!(catalog.beliefs.len(), 14);
        assert_eq!(catalog.jobs.len(), 20);
        assert_eq!(catalog.wealth_tiers.len(), 6);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_wealth_labels() {
        let catalog = Catalog::default();
        assert_eq!(catalog.wealth_label(0), Some("destitute"));
        assert_eq!(catalog.wealth_label(5), Some("rich"));
        assert_eq!(catalog.wealth_label(6), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [generator]
            seed = 99
            max_traits = 3

            [polls]
            include_belief_polls = true
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.generator.seed, Some(99));
        assert_eq!(config.generator.max_traits, 3);
        assert_eq!(config.generator.min_age, 18);
        assert!(config.polls.include_belief_polls);
        assert_eq!(config.catalog.traits.len(), 11);
    }

    #[test]
    fn test_sample_config_file_parses() {
        let config = AppConfig::from_toml(include_str!("../../data/popsim.toml")).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:6688");
        assert!(config.server.snapshot_path.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_simulate_cap() {
        let mut config = AppConfig::default();
        config.server.max_simulate_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_wealth_without_label() {
        let mut config = AppConfig::default();
        config.generator.max_wealth = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_job_catalog_without_unemployed() {
        let mut config = AppConfig::default();
        config.catalog.jobs.retain(|j| j != UNEMPLOYED);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = AppConfig::from_toml("[generator\nseed = 1").unwrap_err();
        assert!(matches!(err, PopError::ConfigError(_)));
    }
}
