//! Headless population batch
//!
//! Seeds the U.S. states, generates pops in one place or everywhere, and
//! prints poll summaries as JSON.

use std::time::Instant;

use clap::Parser;
use popsim::core::config::AppConfig;
use popsim::core::error::Result;
use popsim::core::types::PlaceId;
use popsim::generation::{seed_places, GenerationTarget, PopulationGenerator, EVERYWHERE};
use popsim::polls::{place_poll_summary, PlacePollSummary};
use popsim::store::{EntityStore, MemoryStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pop_batch")]
#[command(about = "Generate pops for seeded places and print their polls")]
struct Args {
    /// Place id to populate, or "everywhere"
    #[arg(long, default_value = EVERYWHERE)]
    place: String,

    /// Pops to create per place
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Include belief sentiment in the summaries
    #[arg(long)]
    beliefs: bool,

    /// Write the resulting store to this snapshot file
    #[arg(long)]
    snapshot: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popsim=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::default();
    config.generator.seed = Some(args.seed.unwrap_or_else(rand::random));
    config.polls.include_belief_polls = args.beliefs;
    config.validate()?;

    let mut store = MemoryStore::with_catalog(config.catalog.clone());
    let seeded = seed_places(&mut store);
    eprintln!("Seeded {} places", seeded.successes);

    let mut generator = PopulationGenerator::new(config.generator.clone(), config.catalog.clone());
    let target = GenerationTarget::parse(&args.place);

    let start = Instant::now();
    let report = generator.generate_many(&mut store, target.clone(), args.count)?;
    let elapsed = start.elapsed();

    eprintln!(
        "Created {} pops ({} failed) in {:.2}ms, seed {:?}",
        report.total_created(),
        report.total_failed(),
        elapsed.as_secs_f64() * 1000.0,
        config.generator.seed,
    );

    let place_ids: Vec<PlaceId> = match target {
        GenerationTarget::Everywhere => store.place_list()?.into_iter().map(|p| p.id).collect(),
        GenerationTarget::Place(id) => vec![id],
    };

    let summaries = place_ids
        .iter()
        .map(|id| place_poll_summary(&store, &config.catalog, &config.polls, id))
        .collect::<Result<Vec<PlacePollSummary>>>()?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    if let Some(path) = args.snapshot {
        store.save_snapshot(&path)?;
        eprintln!("Snapshot written to {}", path.display());
    }
    Ok(())
}
