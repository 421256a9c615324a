//! # Category Module
//!
//! Resolution of per-tier scores into a single performance category.
//!
//! Resolution order (first match wins):
//! 1. Low and Medium both matched: between Low and Medium
//! 2. Medium and High both matched: between Medium and High
//! 3. High and Elite both matched: between High and Elite
//! 4. Otherwise the strongest matched tier, checked Elite first
//! 5. Nothing matched: no category
//!
//! Only adjacent pairs form boundaries. Low with High but no Medium falls
//! through to step 4 and reports High.

use crate::score::Scores;
use crate::tier::Tier;
use serde::{Serialize, Serializer};
use std::fmt;

/// Label used when no tier matched.
pub const NO_MATCH_LABEL: &str = "Inputs do not match any performance category.";

/// Adjacent tier pairs checked for a boundary, in priority order.
const BOUNDARIES: [(Tier, Tier); 3] = [
    (Tier::Low, Tier::Medium),
    (Tier::Medium, Tier::High),
    (Tier::High, Tier::Elite),
];

/// Single-tier fallbacks, in priority order.
const FALLBACK_ORDER: [Tier; 4] = [Tier::Elite, Tier::High, Tier::Medium, Tier::Low];

/// The resolved performance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Clearly within one tier.
    Tier(Tier),
    /// Between two adjacent tiers, lower tier first.
    Between(Tier, Tier),
    /// No input matched any tier's criteria.
    NoMatch,
}

impl Category {
    /// The user-facing label.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Tier(tier) => write!(f, "{tier}"),
            Category::Between(lower, upper) => write!(f, "Between {lower} and {upper}"),
            Category::NoMatch => f.write_str(NO_MATCH_LABEL),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolve scores into a category.
#[must_use]
pub fn resolve(scores: &Scores) -> Category {
    if let Some((lower, upper)) = BOUNDARIES
        .iter()
        .find(|(lower, upper)| scores.matches(*lower) && scores.matches(*upper))
    {
        return Category::Between(*lower, *upper);
    }

    FALLBACK_ORDER
        .iter()
        .find(|tier| scores.matches(**tier))
        .map_or(Category::NoMatch, |tier| Category::Tier(*tier))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tiers() {
        assert_eq!(resolve(&Scores::new(4, 0, 0, 0)), Category::Tier(Tier::Low));
        assert_eq!(resolve(&Scores::new(0, 2, 0, 0)), Category::Tier(Tier::Medium));
        assert_eq!(resolve(&Scores::new(0, 0, 3, 0)), Category::Tier(Tier::High));
        assert_eq!(resolve(&Scores::new(0, 0, 0, 4)), Category::Tier(Tier::Elite));
    }

    #[test]
    fn adjacent_boundaries() {
        assert_eq!(
            resolve(&Scores::new(1, 1, 0, 0)),
            Category::Between(Tier::Low, Tier::Medium)
        );
        assert_eq!(
            resolve(&Scores::new(0, 1, 1, 0)),
            Category::Between(Tier::Medium, Tier::High)
        );
        assert_eq!(
            resolve(&Scores::new(0, 0, 1, 4)),
            Category::Between(Tier::High, Tier::Elite)
        );
    }

    #[test]
    fn lowest_boundary_wins() {
        assert_eq!(
            resolve(&Scores::new(1, 1, 1, 1)),
            Category::Between(Tier::Low, Tier::Medium)
        );
        assert_eq!(
            resolve(&Scores::new(0, 1, 1, 1)),
            Category::Between(Tier::Medium, Tier::High)
        );
    }

    #[test]
    fn non_adjacent_falls_through_to_strongest() {
        assert_eq!(resolve(&Scores::new(1, 0, 1, 0)), Category::Tier(Tier::High));
        assert_eq!(resolve(&Scores::new(2, 0, 0, 1)), Category::Tier(Tier::Elite));
        assert_eq!(resolve(&Scores::new(1, 2, 0, 1)), Category::Between(Tier::Low, Tier::Medium));
    }

    #[test]
    fn nothing_matched() {
        assert_eq!(resolve(&Scores::default()), Category::NoMatch);
        assert_eq!(Category::NoMatch.label(), NO_MATCH_LABEL);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::Tier(Tier::Elite).label(), "Elite");
        assert_eq!(
            Category::Between(Tier::Medium, Tier::High).label(),
            "Between Medium and High"
        );
    }
}
