//! Random demographics for new pops

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::core::config::{Catalog, GeneratorConfig, RETIRED, UNEMPLOYED};
use crate::core::types::Gender;

/// One internally consistent set of pop attributes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub gender: Gender,
    pub age: u32,
    pub wealth: u8,
    pub job: String,
}

/// Draw gender, age and wealth uniformly, then pick a job that fits them.
///
/// Job priority: destitute pops are unemployed, pops past retirement age are
/// retired, everyone else draws from the full industry list (which already
/// contains both of those values).
pub fn generate_attributes<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    catalog: &Catalog,
) -> Demographics {
    let gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];
    let age = rng.gen_range(config.min_age..=config.max_age);
    let wealth = rng.gen_range(0..=config.max_wealth);

    let job = if wealth == 0 {
        UNEMPLOYED.to_string()
    } else if age > config.retirement_age {
        RETIRED.to_string()
    } else {
        catalog
            .jobs
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| UNEMPLOYED.to_string())
    };

    Demographics {
        gender,
        age,
        wealth,
        job,
    }
}

/// Draw between `min_traits` and `max_traits` candidate traits, dropping repeats.
///
/// Draws are with replacement and a repeat is simply discarded, so the result
/// can be shorter than the number of draws. Order follows the draws.
pub fn generate_trait_set<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    catalog: &Catalog,
) -> Vec<String> {
    let draws = rng.gen_range(config.min_traits..=config.max_traits);
    let mut traits: Vec<String> = Vec::with_capacity(draws);

    for _ in 0..draws {
        let Some(candidate) = catalog.traits.choose(rng) else {
            break;
        };
        if !traits.contains(candidate) {
            traits.push(candidate.clone());
        }
    }

    traits
}
