//! Core type definitions used throughout the codebase

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Builder;

/// Identifier for a place: a lowercase, underscore-separated token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque short token identifying a pop
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopId(pub String);

impl PopId {
    /// Length of a generated pop token in hex characters
    pub const TOKEN_LEN: usize = 8;

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draw a fresh token from the given random source.
    ///
    /// Built from a v4 UUID so the token is uniformly random hex, but the bytes
    /// come from `rng` so seeded runs stay reproducible.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let uuid = Builder::from_random_bytes(rng.gen()).into_uuid();
        let mut token = uuid.simple().to_string();
        token.truncate(Self::TOKEN_LEN);
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}
