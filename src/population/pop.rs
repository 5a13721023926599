//! Pop - a synthetic group of people sharing demographics

use serde::{Deserialize, Serialize};

use crate::core::types::{Gender, PlaceId, PopId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pop {
    pub id: PopId,
    pub place_id: PlaceId,
    /// Number of people this record stands for, at least 1
    pub population: u32,
    pub gender: Gender,
    pub age: u32,
    /// Index into the catalog's wealth tiers
    pub wealth: u8,
    pub job: String,
}

/// A belief as shown on a pop's detail view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BeliefSummary {
    pub belief: String,
    pub strength: i32,
}

/// Full view of a pop with its traits and beliefs resolved
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopDetail {
    pub id: PopId,
    pub place_id: PlaceId,
    pub population: u32,
    pub gender: Gender,
    pub age: u32,
    pub wealth: u8,
    pub wealth_name: String,
    pub job: String,
    pub traits: Vec<String>,
    pub beliefs: Vec<BeliefSummary>,
}

/// Compact listing entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopRef {
    pub id: PopId,
    pub place_id: PlaceId,
}

impl From<&Pop> for PopRef {
    fn from(pop: &Pop) -> Self {
        Self {
            id: pop.id.clone(),
            place_id: pop.place_id.clone(),
        }
    }
}
