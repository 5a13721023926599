//! Place - a named location pops live in

use serde::{Deserialize, Serialize};

use crate::core::naming::humanize;
use crate::core::types::PlaceId;

/// A place as stored. The display name is derived from `id`, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub two_letter_code: Option<String>,
}

impl Place {
    pub fn new(id: PlaceId, two_letter_code: Option<String>) -> Self {
        Self { id, two_letter_code }
    }

    pub fn name(&self) -> String {
        humanize(self.id.as_str())
    }
}

/// Outward-facing shape of a place, with its computed name
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaceView {
    pub id: PlaceId,
    pub name: String,
    pub two_letter_code: Option<String>,
}

impl From<&Place> for PlaceView {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name(),
            two_letter_code: place.two_letter_code.clone(),
        }
    }
}
