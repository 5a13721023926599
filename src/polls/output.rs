//! Poll results

use serde::Serialize;

use crate::core::types::PlaceId;
use crate::polls::sentiment::Sentiment;

/// Round half away from zero to two decimals. Percentages are never
/// negative, so this is round-half-up.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage rounded to two decimals
pub fn percentage(part: usize, whole: usize) -> f64 {
    round2(part as f64 / whole as f64 * 100.0)
}

/// Percentage of a place's pops in each sentiment bucket.
///
/// Each bucket is rounded on its own, so the sum can drift a little from
/// exactly 100.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SentimentDistribution {
    pub passionately_support: f64,
    pub strongly_support: f64,
    pub support: f64,
    pub neutral: f64,
    pub oppose: f64,
    pub strongly_oppose: f64,
    pub passionately_oppose: f64,
}

impl SentimentDistribution {
    /// `counts` is indexed like [`Sentiment::ALL`]
    pub fn from_counts(counts: &[usize; 7], total: usize) -> Self {
        let pct = |s: Sentiment| percentage(counts[s.index()], total);
        Self {
            passionately_support: pct(Sentiment::PassionatelySupport),
            strongly_support: pct(Sentiment::StronglySupport),
            support: pct(Sentiment::Support),
            neutral: pct(Sentiment::Neutral),
            oppose: pct(Sentiment::Oppose),
            strongly_oppose: pct(Sentiment::StronglyOppose),
            passionately_oppose: pct(Sentiment::PassionatelyOppose),
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::PassionatelySupport => self.passionately_support,
            Sentiment::StronglySupport => self.strongly_support,
            Sentiment::Support => self.support,
            Sentiment::Neutral => self.neutral,
            Sentiment::Oppose => self.oppose,
            Sentiment::StronglyOppose => self.strongly_oppose,
            Sentiment::PassionatelyOppose => self.passionately_oppose,
        }
    }

    pub fn total(&self) -> f64 {
        Sentiment::ALL.iter().map(|&s| self.get(s)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BeliefPoll {
    pub belief_name: String,
    pub poll_result: SentimentDistribution,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraitPoll {
    #[serde(rename = "trait")]
    pub trait_name: String,
    /// `None` when the place has no pops to poll
    pub percentage: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacePollSummary {
    pub place_id: PlaceId,
    pub place_name: String,
    pub pop_count: usize,
    pub trait_polls: Vec<TraitPoll>,
    pub belief_polls: Vec<BeliefPoll>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(percentage(1, 8), 12.5);
    }

    #[test]
    fn test_independent_rounding_may_drift() {
        // Three equal thirds each round down to 33.33
        let counts = [1, 0, 0, 1, 0, 0, 1];
        let dist = SentimentDistribution::from_counts(&counts, 3);
        assert_eq!(dist.passionately_support, 33.33);
        assert_eq!(dist.neutral, 33.33);
        assert_eq!(dist.passionately_oppose, 33.33);
        assert!((dist.total() - 99.99).abs() < 1e-9);
    }
}
