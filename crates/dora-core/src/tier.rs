//! # Tier Module
//!
//! Performance tiers and the reference profile each tier expects.

use crate::metric::Metric;
use std::fmt;

/// DORA performance tiers.
/// Variant order defines the `Ord` derivation: Low < Medium < High < Elite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
    Elite,
}

impl Tier {
    /// All tiers, weakest first.
    pub const ALL: [Tier; 4] = [Tier::Low, Tier::Medium, Tier::High, Tier::Elite];

    /// Display name of the tier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
            Tier::Elite => "Elite",
        }
    }

    /// The reference profile for this tier.
    #[must_use]
    pub fn criteria(self) -> &'static TierCriteria {
        match self {
            Tier::Low => &LOW_CRITERIA,
            Tier::Medium => &MEDIUM_CRITERIA,
            Tier::High => &HIGH_CRITERIA,
            Tier::Elite => &ELITE_CRITERIA,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TIER CRITERIA
// =============================================================================

/// Exactly one expected option per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCriteria {
    pub deployment_frequency: &'static str,
    pub lead_time: &'static str,
    pub change_fail_percentage: &'static str,
    pub time_to_restore: &'static str,
}

impl TierCriteria {
    /// Expected option for a metric.
    #[must_use]
    pub fn expected(&self, metric: Metric) -> &'static str {
        match metric {
            Metric::DeploymentFrequency => self.deployment_frequency,
            Metric::LeadTime => self.lead_time,
            Metric::ChangeFailPercentage => self.change_fail_percentage,
            Metric::TimeToRestore => self.time_to_restore,
        }
    }
}

pub const LOW_CRITERIA: TierCriteria = TierCriteria {
    deployment_frequency: "Between once per month and once every six months",
    lead_time: "One to six months",
    change_fail_percentage: "46–60%",
    time_to_restore: "One week to one month",
};

pub const MEDIUM_CRITERIA: TierCriteria = TierCriteria {
    deployment_frequency: "Between once per week and once per month",
    lead_time: "One week to one month",
    change_fail_percentage: "31–45%",
    time_to_restore: "Less than one day",
};

/// High must not share any option with Elite, or the Elite reference profile
/// would resolve to "Between High and Elite".
pub const HIGH_CRITERIA: TierCriteria = TierCriteria {
    deployment_frequency: "Between once per day and once per week",
    lead_time: "One day to one week",
    change_fail_percentage: "16–30%",
    time_to_restore: "Less than one day",
};

pub const ELITE_CRITERIA: TierCriteria = TierCriteria {
    deployment_frequency: "On demand (multiple deploys per day)",
    lead_time: "Less than one day",
    change_fail_percentage: "0–15%",
    time_to_restore: "Less than one hour",
};
