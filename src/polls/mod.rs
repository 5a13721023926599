//! Population polling: trait prevalence and belief sentiment per place

pub mod engine;
pub mod output;
pub mod sentiment;

pub use engine::{belief_distribution, place_poll_summary, trait_percentage};
pub use output::{BeliefPoll, PlacePollSummary, SentimentDistribution, TraitPoll};
pub use sentiment::{classify, Sentiment};
