//! Benchmarks for place polling over a generated population

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use popsim::core::config::{Catalog, PollConfig};
use popsim::core::types::PlaceId;
use popsim::generation::{seed_places, GenerationTarget, PopulationGenerator};
use popsim::polls::{belief_distribution, place_poll_summary, trait_percentage};
use popsim::store::{EntityStore, MemoryStore};

fn populated_store(pops: usize) -> MemoryStore {
    let mut store = MemoryStore::with_catalog(Catalog::default());
    seed_places(&mut store);
    let mut generator = PopulationGenerator::with_seed(1);
    generator
        .generate_many(&mut store, GenerationTarget::parse("california"), pops)
        .unwrap();

    let california = PlaceId::new("california");
    for (i, pop) in store.pop_list_by_place(&california).unwrap().iter().enumerate() {
        let strength = (i as i32 * 37) % 201 - 100;
        store.belief_set(&pop.id, "environment", strength).unwrap();
    }
    store
}

fn benchmark_trait_poll(c: &mut Criterion) {
    let store = populated_store(1000);
    let catalog = Catalog::default();
    let california = PlaceId::new("california");

    c.bench_function("trait_percentage_1000_pops", |b| {
        b.iter(|| trait_percentage(&store, &catalog, black_box(&california), "parent"))
    });
}

fn benchmark_belief_poll(c: &mut Criterion) {
    let store = populated_store(1000);
    let catalog = Catalog::default();
    let california = PlaceId::new("california");

    c.bench_function("belief_distribution_1000_pops", |b| {
        b.iter(|| belief_distribution(&store, &catalog, black_box(&california), "environment"))
    });
}

fn benchmark_summary(c: &mut Criterion) {
    let store = populated_store(1000);
    let catalog = Catalog::default();
    let california = PlaceId::new("california");
    let with_beliefs = PollConfig {
        include_belief_polls: true,
    };

    c.bench_function("poll_summary_traits_only", |b| {
        b.iter(|| place_poll_summary(&store, &catalog, &PollConfig::default(), black_box(&california)))
    });

    c.bench_function("poll_summary_with_beliefs", |b| {
        b.iter(|| place_poll_summary(&store, &catalog, &with_beliefs, black_box(&california)))
    });
}

criterion_group!(
    benches,
    benchmark_trait_poll,
    benchmark_belief_poll,
    benchmark_summary
);
criterion_main!(benches);
