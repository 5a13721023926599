//! Procedural pop generation

pub mod attributes;
pub mod generator;
pub mod seeding;

pub use attributes::{generate_attributes, generate_trait_set, Demographics};
pub use generator::{
    BatchReport, GeneratedPop, GenerationTarget, PlaceBatch, PopulationGenerator, TraitOutcome,
    EVERYWHERE,
};
pub use seeding::{seed_places, SeedReport, US_STATES};
