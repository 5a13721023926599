//! Belief strength -> sentiment bucket

use serde::{Deserialize, Serialize};

const PASSIONATE_THRESHOLD: i32 = 80;
const STRONG_THRESHOLD: i32 = 40;
const SUPPORT_THRESHOLD: i32 = 10;

/// Seven ordered sentiment buckets, strongest support first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    PassionatelySupport,
    StronglySupport,
    Support,
    Neutral,
    Oppose,
    StronglyOppose,
    PassionatelyOppose,
}

impl Sentiment {
    pub const ALL: [Sentiment; 7] = [
        Sentiment::PassionatelySupport,
        Sentiment::StronglySupport,
        Sentiment::Support,
        Sentiment::Neutral,
        Sentiment::Oppose,
        Sentiment::StronglyOppose,
        Sentiment::PassionatelyOppose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::PassionatelySupport => "passionately_support",
            Sentiment::StronglySupport => "strongly_support",
            Sentiment::Support => "support",
            Sentiment::Neutral => "neutral",
            Sentiment::Oppose => "oppose",
            Sentiment::StronglyOppose => "strongly_oppose",
            Sentiment::PassionatelyOppose => "passionately_oppose",
        }
    }

    /// Position in [`Sentiment::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Classify a strength. Thresholds are strict, so a value sitting exactly on
/// a threshold lands in the weaker bucket.
pub fn classify(strength: i32) -> Sentiment {
    if strength > PASSIONATE_THRESHOLD {
        return Sentiment::PassionatelySupport;
    }
    if strength < -PASSIONATE_THRESHOLD {
        return Sentiment::PassionatelyOppose;
    }
    if strength > STRONG_THRESHOLD {
        return Sentiment::StronglySupport;
    }
    if strength < -STRONG_THRESHOLD {
        return Sentiment::StronglyOppose;
    }
    if strength > SUPPORT_THRESHOLD {
        return Sentiment::Support;
    }
    if strength < -SUPPORT_THRESHOLD {
        return Sentiment::Oppose;
    }
    Sentiment::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_fall_into_weaker_bucket() {
        assert_eq!(classify(81), Sentiment::PassionatelySupport);
        assert_eq!(classify(80), Sentiment::StronglySupport);
        assert_eq!(classify(41), Sentiment::StronglySupport);
        assert_eq!(classify(40), Sentiment::Support);
        assert_eq!(classify(11), Sentiment::Support);
        assert_eq!(classify(10), Sentiment::Neutral);
        assert_eq!(classify(0), Sentiment::Neutral);
        assert_eq!(classify(-10), Sentiment::Neutral);
        assert_eq!(classify(-11), Sentiment::Oppose);
        assert_eq!(classify(-40), Sentiment::Oppose);
        assert_eq!(classify(-41), Sentiment::StronglyOppose);
        assert_eq!(classify(-80), Sentiment::StronglyOppose);
        assert_eq!(classify(-81), Sentiment::PassionatelyOppose);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(100), Sentiment::PassionatelySupport);
        assert_eq!(classify(-100), Sentiment::PassionatelyOppose);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, s) in Sentiment::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert_eq!(
            serde_json::to_string(&Sentiment::StronglyOppose).unwrap(),
            format!("\"{}\"", Sentiment::StronglyOppose.as_str())
        );
    }

    proptest! {
        #[test]
        fn classify_is_monotonic(a in -100i32..=100, b in -100i32..=100) {
            // Higher strength never lands in a bucket further toward "oppose"
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(hi) <= classify(lo));
        }

        #[test]
        fn classify_is_symmetric(s in 0i32..=100) {
            let positive = classify(s).index();
            let negative = classify(-s).index();
            prop_assert_eq!(positive + negative, 2 * Sentiment::Neutral.index());
        }
    }
}
