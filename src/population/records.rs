//! Trait and belief rows attached to pops
//!
//! Traits are binary: a pop has one or it doesn't. Generally a trait would not
//! change over a pop's life (parent, gun owner).
//!
//! Beliefs carry a signed strength: 100 is full support for an issue, -100 full
//! opposition, 0 neutral.

use serde::{Deserialize, Serialize};

use crate::core::error::{PopError, Result};
use crate::core::naming::humanize;
use crate::core::types::PopId;

pub const STRENGTH_MIN: i32 = -100;
pub const STRENGTH_MAX: i32 = 100;

/// Strength assigned when a belief is added without one
pub const DEFAULT_STRENGTH: i32 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRecord {
    pub pop_id: PopId,
    pub name: String,
}

impl TraitRecord {
    pub fn name_formatted(&self) -> String {
        humanize(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeliefRecord {
    pub pop_id: PopId,
    pub name: String,
    pub strength: i32,
}

impl BeliefRecord {
    pub fn name_formatted(&self) -> String {
        humanize(&self.name)
    }
}

pub fn validate_strength(strength: i32) -> Result<i32> {
    if (STRENGTH_MIN..=STRENGTH_MAX).contains(&strength) {
        Ok(strength)
    } else {
        Err(PopError::InvalidInput(format!(
            "strength {} outside [{}, {}]",
            strength, STRENGTH_MIN, STRENGTH_MAX
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_bounds_inclusive() {
        assert_eq!(validate_strength(-100).unwrap(), -100);
        assert_eq!(validate_strength(100).unwrap(), 100);
        assert!(validate_strength(101).is_err());
        assert!(validate_strength(-101).is_err());
    }

    #[test]
    fn test_formatted_names() {
        let belief = BeliefRecord {
            pop_id: PopId::new("abcd0123"),
            name: "freedom_of_speech".into(),
            strength: 20,
        };
        assert_eq!(belief.name_formatted(), "Freedom Of Speech");
    }
}
