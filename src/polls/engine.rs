//! Place-level statistics over individual pop records

use tracing::debug;

use crate::core::config::{Catalog, PollConfig};
use crate::core::error::{PopError, Result};
use crate::core::types::PlaceId;
use crate::polls::output::{
    percentage, BeliefPoll, PlacePollSummary, SentimentDistribution, TraitPoll,
};
use crate::polls::sentiment::{classify, Sentiment};
use crate::population::{Place, Pop};
use crate::store::EntityStore;

/// Look up the place and its pops, failing on an empty place
fn populated_place<S: EntityStore + ?Sized>(store: &S, place_id: &PlaceId) -> Result<(Place, Vec<Pop>)> {
    let place = store.place_get(place_id)?;
    let pops = store.pop_list_by_place(place_id)?;
    if pops.is_empty() {
        return Err(PopError::NoData {
            place_id: place_id.to_string(),
        });
    }
    Ok((place, pops))
}

fn count_trait<S: EntityStore + ?Sized>(store: &S, pops: &[Pop], trait_name: &str) -> Result<usize> {
    let mut holders = 0;
    for pop in pops {
        if store.trait_has(&pop.id, trait_name)? {
            holders += 1;
        }
    }
    Ok(holders)
}

/// Percentage of the place's pops holding `trait_name`, rounded to 2 decimals
pub fn trait_percentage<S: EntityStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
    place_id: &PlaceId,
    trait_name: &str,
) -> Result<f64> {
    let (_, pops) = populated_place(store, place_id)?;
    catalog.require_trait(trait_name)?;

    let holders = count_trait(store, &pops, trait_name)?;
    Ok(percentage(holders, pops.len()))
}

/// Share of the place's pops in each sentiment bucket for `belief_name`.
///
/// Pops without a row for the belief count as neutral, and every bucket is
/// divided by the total number of pops, not by the number of rows.
pub fn belief_distribution<S: EntityStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
    place_id: &PlaceId,
    belief_name: &str,
) -> Result<BeliefPoll> {
    let (_, pops) = populated_place(store, place_id)?;
    catalog.require_belief(belief_name)?;

    let mut counts = [0usize; 7];
    let mut expressed = 0;
    for pop in &pops {
        if let Some(belief) = store.belief_find(&pop.id, belief_name)? {
            counts[classify(belief.strength).index()] += 1;
            expressed += 1;
        }
    }
    counts[Sentiment::Neutral.index()] += pops.len() - expressed;

    debug!(
        "Belief {} in {}: {} of {} pops expressed it",
        belief_name,
        place_id,
        expressed,
        pops.len()
    );

    Ok(BeliefPoll {
        belief_name: belief_name.to_string(),
        poll_result: SentimentDistribution::from_counts(&counts, pops.len()),
    })
}

/// Every catalog trait polled for one place.
///
/// Belief polls are left empty unless `include_belief_polls` is set.
pub fn place_poll_summary<S: EntityStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
    config: &PollConfig,
    place_id: &PlaceId,
) -> Result<PlacePollSummary> {
    let place = store.place_get(place_id)?;
    let pops = store.pop_list_by_place(place_id)?;

    let mut trait_polls = Vec::with_capacity(catalog.traits.len());
    for trait_name in &catalog.traits {
        let share = if pops.is_empty() {
            None
        } else {
            Some(percentage(count_trait(store, &pops, trait_name)?, pops.len()))
        };
        trait_polls.push(TraitPoll {
            trait_name: trait_name.clone(),
            percentage: share,
        });
    }

    let mut belief_polls = Vec::new();
    if config.include_belief_polls && !pops.is_empty() {
        for belief_name in &catalog.beliefs {
            belief_polls.push(belief_distribution(store, catalog, place_id, belief_name)?);
        }
    }

    Ok(PlacePollSummary {
        place_name: place.name(),
        place_id: place.id,
        pop_count: pops.len(),
        trait_polls,
        belief_polls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::types::{Gender, PopId};
    use crate::store::{MemoryStore, PopFields};

    fn place_with_pops(n: usize) -> (MemoryStore, Vec<PopId>) {
        let mut store = MemoryStore::with_catalog(Catalog::default());
        store.place_create(Place::new(PlaceId::new("maine"), None)).unwrap();
        let ids: Vec<PopId> = (0..n)
            .map(|i| {
                store
                    .pop_create(PopFields {
                        id: PopId::new(format!("pop{:05}", i)),
                        place_id: PlaceId::new("maine"),
                        population: 1000,
                        gender: Gender::Female,
                        age: 30,
                        wealth: 3,
                        job: "legal".into(),
                    })
                    .unwrap()
                    .id
            })
            .collect();
        (store, ids)
    }

    #[test]
    fn test_trait_percentage_quarter() {
        let (mut store, ids) = place_with_pops(4);
        store.trait_attach(&ids[0], "cyclist").unwrap();

        let pct = trait_percentage(&store, &Catalog::default(), &PlaceId::new("maine"), "cyclist")
            .unwrap();
        assert_eq!(pct, 25.0);
    }

    #[test]
    fn test_trait_percentage_rounds_thirds() {
        let (mut store, ids) = place_with_pops(3);
        store.trait_attach(&ids[0], "smoker").unwrap();
        store.trait_attach(&ids[1], "smoker").unwrap();

        let pct = trait_percentage(&store, &Catalog::default(), &PlaceId::new("maine"), "smoker")
            .unwrap();
        assert_eq!(pct, 66.67);
    }

    #[test]
    fn test_trait_percentage_errors() {
        let (store, _) = place_with_pops(0);
        let catalog = Catalog::default();

        let empty = trait_percentage(&store, &catalog, &PlaceId::new("maine"), "parent");
        assert_eq!(empty.unwrap_err().kind(), ErrorKind::NoData);

        let missing = trait_percentage(&store, &catalog, &PlaceId::new("vermont"), "parent");
        assert_eq!(missing.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_unknown_trait_name_rejected() {
        let (store, _) = place_with_pops(2);
        let err = trait_percentage(&store, &Catalog::default(), &PlaceId::new("maine"), "wizard")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
    }

    #[test]
    fn test_belief_distribution_folds_silent_pops_into_neutral() {
        let (mut store, ids) = place_with_pops(5);
        store.belief_set(&ids[0], "environment", 90).unwrap();

        let poll = belief_distribution(&store, &Catalog::default(), &PlaceId::new("maine"), "environment")
            .unwrap();
        let dist = &poll.poll_result;

        assert_eq!(poll.belief_name, "environment");
        assert_eq!(dist.passionately_support, 20.0);
        assert_eq!(dist.neutral, 80.0);
        for s in Sentiment::ALL {
            if s != Sentiment::PassionatelySupport && s != Sentiment::Neutral {
                assert_eq!(dist.get(s), 0.0);
            }
        }
    }

    #[test]
    fn test_belief_distribution_ignores_other_beliefs() {
        let (mut store, ids) = place_with_pops(2);
        store.belief_set(&ids[0], "law_and_order", -95).unwrap();
        store.belief_set(&ids[1], "environment", -50).unwrap();

        let poll = belief_distribution(&store, &Catalog::default(), &PlaceId::new("maine"), "environment")
            .unwrap();
        assert_eq!(poll.poll_result.strongly_oppose, 50.0);
        assert_eq!(poll.poll_result.neutral, 50.0);
        assert_eq!(poll.poll_result.passionately_oppose, 0.0);
    }

    #[test]
    fn test_summary_lists_every_trait() {
        let (mut store, ids) = place_with_pops(2);
        store.trait_attach(&ids[0], "parent").unwrap();
        let catalog = Catalog::default();

        let summary =
            place_poll_summary(&store, &catalog, &PollConfig::default(), &PlaceId::new("maine"))
                .unwrap();

        assert_eq!(summary.place_name, "Maine");
        assert_eq!(summary.pop_count, 2);
        assert_eq!(summary.trait_polls.len(), catalog.traits.len());
        assert_eq!(summary.trait_polls[0].trait_name, "parent");
        assert_eq!(summary.trait_polls[0].percentage, Some(50.0));
        assert!(summary.trait_polls[1..].iter().all(|t| t.percentage == Some(0.0)));
        assert!(summary.belief_polls.is_empty());
    }

    #[test]
    fn test_summary_of_empty_place_has_no_percentages() {
        let (store, _) = place_with_pops(0);
        let summary = place_poll_summary(
            &store,
            &Catalog::default(),
            &PollConfig::default(),
            &PlaceId::new("maine"),
        )
        .unwrap();
        assert_eq!(summary.pop_count, 0);
        assert!(summary.trait_polls.iter().all(|t| t.percentage.is_none()));
    }

    #[test]
    fn test_summary_with_belief_polls_enabled() {
        let (store, _) = place_with_pops(3);
        let catalog = Catalog::default();
        let config = PollConfig {
            include_belief_polls: true,
        };

        let summary = place_poll_summary(&store, &catalog, &config, &PlaceId::new("maine")).unwrap();
        assert_eq!(summary.belief_polls.len(), catalog.beliefs.len());
        assert!(summary.belief_polls.iter().all(|b| b.poll_result.neutral == 100.0));
    }
}
