//! Integration tests for the in-memory store: cascading deletes and snapshots

use popsim::core::config::{Catalog, GeneratorConfig};
use popsim::core::error::ErrorKind;
use popsim::population::service::{self, NewPop, PlaceRequest};
use popsim::store::{EntityStore, MemoryStore, StoreSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn store_with_place() -> MemoryStore {
    let mut store = MemoryStore::with_catalog(Catalog::default());
    service::create_place(
        &mut store,
        PlaceRequest {
            name: Some("Rhode Island".into()),
            two_letter_code: Some("ri".into()),
            ..Default::default()
        },
    )
    .unwrap();
    store
}

#[test]
fn test_delete_cascades_to_traits_and_beliefs() {
    let mut store = store_with_place();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let pop = service::create_pop(
        &mut store,
        &mut rng,
        NewPop {
            place_id: Some("rhode_island".into()),
            ..Default::default()
        },
        &GeneratorConfig::default(),
    )
    .unwrap();

    service::add_trait(&mut store, &pop.id, "Married").unwrap();
    service::add_trait(&mut store, &pop.id, "car_owner").unwrap();
    service::add_belief(&mut store, &pop.id, "Freedom Of Speech", Some(70)).unwrap();
    assert_eq!(store.trait_row_count(), 2);
    assert_eq!(store.belief_row_count(), 1);

    service::delete_pop(&mut store, &pop.id).unwrap();

    assert_eq!(store.trait_row_count(), 0);
    assert_eq!(store.belief_row_count(), 0);
    assert_eq!(store.pop_get(&pop.id).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(
        service::delete_pop(&mut store, &pop.id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_snapshot_file_round_trip() {
    let mut store = store_with_place();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let pop = service::create_pop(
        &mut store,
        &mut rng,
        NewPop {
            place_id: Some("rhode_island".into()),
            age: Some(33),
            wealth: Some(4),
            job: Some("science".into()),
            ..Default::default()
        },
        &GeneratorConfig::default(),
    )
    .unwrap();
    service::add_trait(&mut store, &pop.id, "outdoorsy").unwrap();
    service::add_belief(&mut store, &pop.id, "environment", None).unwrap();

    let path = std::env::temp_dir().join(format!("popsim-store-{}.json", pop.id));
    store.save_snapshot(&path).unwrap();
    let restored = MemoryStore::load_snapshot(&path, Catalog::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.place_count(), 1);
    assert_eq!(restored.pop_get(&pop.id).unwrap(), pop);
    assert!(restored.trait_has(&pop.id, "outdoorsy").unwrap());
    assert_eq!(restored.belief_get(&pop.id, "environment").unwrap().strength, 50);
    assert_eq!(
        StoreSnapshot::capture(&restored).unwrap().pops.len(),
        StoreSnapshot::capture(&store).unwrap().pops.len()
    );
}

#[test]
fn test_snapshot_rejects_unknown_names() {
    let mut store = store_with_place();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let pop = service::create_pop(
        &mut store,
        &mut rng,
        NewPop {
            place_id: Some("rhode_island".into()),
            ..Default::default()
        },
        &GeneratorConfig::default(),
    )
    .unwrap();
    service::add_trait(&mut store, &pop.id, "smoker").unwrap();

    let snapshot = StoreSnapshot::capture(&store).unwrap();
    let narrow = Catalog {
        traits: vec!["parent".into()],
        ..Catalog::default()
    };
    let mut target = MemoryStore::with_catalog(narrow);
    let err = snapshot.restore_into(&mut target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidName);
}
