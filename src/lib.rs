//! Popsim - synthetic population simulator
//!
//! Places hold pops (demographic groups) carrying traits and beliefs. Pops
//! are generated at random and polled for trait prevalence and belief
//! sentiment per place. The `http` module exposes all of it as a REST API.

pub mod core;
pub mod generation;
pub mod http;
pub mod polls;
pub mod population;
pub mod store;
