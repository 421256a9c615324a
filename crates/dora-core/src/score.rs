//! # Score Module
//!
//! Similarity of a profile to each tier's reference profile.
//!
//! A score counts how many of the four inputs exactly equal the tier's
//! expected option. Partial matches and ties are normal: a profile can score
//! against several tiers at once.

use crate::metric::Metric;
use crate::tier::Tier;
use crate::validate::Profile;
use serde::Serialize;

/// Highest possible score (every metric matches).
pub const MAX_SCORE: u8 = 4;

/// Per-tier scores, each in `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
    pub elite: u8,
}

impl Scores {
    /// Build scores from explicit values.
    #[must_use]
    pub fn new(low: u8, medium: u8, high: u8, elite: u8) -> Self {
        Self {
            low,
            medium,
            high,
            elite,
        }
    }

    /// The score for a tier.
    #[must_use]
    pub fn get(&self, tier: Tier) -> u8 {
        match tier {
            Tier::Low => self.low,
            Tier::Medium => self.medium,
            Tier::High => self.high,
            Tier::Elite => self.elite,
        }
    }

    /// Whether the profile matched the tier on at least one metric.
    #[must_use]
    pub fn matches(&self, tier: Tier) -> bool {
        self.get(tier) > 0
    }
}

/// Count the metrics on which `profile` equals `tier`'s criteria.
#[must_use]
pub fn score(profile: &Profile, tier: Tier) -> u8 {
    let criteria = tier.criteria();
    Metric::ALL
        .iter()
        .filter(|metric| profile.get(**metric) == criteria.expected(**metric))
        .count() as u8
}

/// Score a profile against every tier.
#[must_use]
pub fn score_all(profile: &Profile) -> Scores {
    Scores {
        low: score(profile, Tier::Low),
        medium: score(profile, Tier::Medium),
        high: score(profile, Tier::High),
        elite: score(profile, Tier::Elite),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validate::validate;

    fn profile(inputs: [&str; 4]) -> Profile {
        validate(&inputs).unwrap()
    }

    #[test]
    fn elite_profile_scores_only_elite() {
        let p = profile([
            "On demand (multiple deploys per day)",
            "Less than one day",
            "0–15%",
            "Less than one hour",
        ]);
        assert_eq!(score_all(&p), Scores::new(0, 0, 0, 4));
    }

    #[test]
    fn low_profile_scores_four() {
        let p = profile([
            "Between once per month and once every six months",
            "One to six months",
            "46–60%",
            "One week to one month",
        ]);
        assert_eq!(score_all(&p), Scores::new(4, 0, 0, 0));
    }

    #[test]
    fn shared_option_counts_for_both_tiers() {
        let p = profile([
            "Fewer than once per six months",
            "More than six months",
            "76–100%",
            "Less than one day",
        ]);
        let scores = score_all(&p);
        assert_eq!(scores.medium, 1);
        assert_eq!(scores.high, 1);
        assert_eq!(scores.low, 0);
        assert_eq!(scores.elite, 0);
    }

    #[test]
    fn high_profile_also_scores_medium() {
        let p = profile([
            "Between once per day and once per week",
            "One day to one week",
            "16–30%",
            "Less than one day",
        ]);
        assert_eq!(score_all(&p), Scores::new(0, 1, 4, 0));
    }

    #[test]
    fn unmatched_profile_scores_zero() {
        let p = profile([
            "Fewer than once per six months",
            "More than six months",
            "76–100%",
            "More than six months",
        ]);
        let scores = score_all(&p);
        assert!(Tier::ALL.iter().all(|tier| !scores.matches(*tier)));
        assert_eq!(scores, Scores::default());
    }

    #[test]
    fn case_insensitive_input_scores_like_canonical() {
        let canonical = profile([
            "On demand (multiple deploys per day)",
            "Less than one day",
            "0–15%",
            "Less than one hour",
        ]);
        let lowered = profile([
            "on demand (multiple deploys per day)",
            "LESS THAN ONE DAY",
            "0–15%",
            "less than one HOUR",
        ]);
        assert_eq!(score_all(&canonical), score_all(&lowered));
    }
}
