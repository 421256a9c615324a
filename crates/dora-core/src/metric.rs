//! # Metric Module
//!
//! The four DORA metrics and their fixed option enumerations.
//!
//! Every metric accepts exactly six options, ordered from the weakest to the
//! strongest delivery performance. Matching is case-insensitive; the strings
//! below are the canonical spellings used for scoring and display.

use std::fmt;

// =============================================================================
// OPTION TABLES
// =============================================================================

/// Valid options for deployment frequency.
pub const DEPLOYMENT_FREQUENCY_OPTIONS: [&str; 6] = [
    "Fewer than once per six months",
    "Between once per month and once every six months",
    "Between once per week and once per month",
    "Between once per day and once per week",
    "Between once per hour and once per day",
    "On demand (multiple deploys per day)",
];

/// Valid options for lead time for changes.
pub const LEAD_TIME_OPTIONS: [&str; 6] = [
    "More than six months",
    "One to six months",
    "One week to one month",
    "One day to one week",
    "Less than one day",
    "Less than one hour",
];

/// Valid options for change failure percentage.
///
/// The ranges use an en dash (U+2013), not a hyphen.
pub const CHANGE_FAIL_PERCENTAGE_OPTIONS: [&str; 6] =
    ["0–15%", "16–30%", "31–45%", "46–60%", "61–75%", "76–100%"];

/// Valid options for time to restore service.
pub const TIME_TO_RESTORE_OPTIONS: [&str; 6] = [
    "More than six months",
    "One to six months",
    "One week to one month",
    "One day to one week",
    "Less than one day",
    "Less than one hour",
];

// =============================================================================
// METRIC
// =============================================================================

/// One of the four DORA metrics.
///
/// Variant order is the positional argument order on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    DeploymentFrequency,
    LeadTime,
    ChangeFailPercentage,
    TimeToRestore,
}

impl Metric {
    /// All metrics in positional order.
    pub const ALL: [Metric; 4] = [
        Metric::DeploymentFrequency,
        Metric::LeadTime,
        Metric::ChangeFailPercentage,
        Metric::TimeToRestore,
    ];

    /// The canonical option strings for this metric.
    #[must_use]
    pub fn options(self) -> &'static [&'static str; 6] {
        match self {
            Metric::DeploymentFrequency => &DEPLOYMENT_FREQUENCY_OPTIONS,
            Metric::LeadTime => &LEAD_TIME_OPTIONS,
            Metric::ChangeFailPercentage => &CHANGE_FAIL_PERCENTAGE_OPTIONS,
            Metric::TimeToRestore => &TIME_TO_RESTORE_OPTIONS,
        }
    }

    /// Field name used when reporting an invalid value.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Metric::DeploymentFrequency => "Deployment Frequency",
            Metric::LeadTime => "Lead Time",
            Metric::ChangeFailPercentage => "Change Fail Percentage",
            Metric::TimeToRestore => "Time to Restore",
        }
    }

    /// Heading used in the option listing.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Metric::DeploymentFrequency => "Deployment frequency",
            Metric::LeadTime => "Lead time",
            Metric::ChangeFailPercentage => "Change fail percentage",
            Metric::TimeToRestore => "Time to restore",
        }
    }

    /// Zero-based position on the command line.
    #[must_use]
    pub fn position(self) -> usize {
        self as usize
    }

    /// Resolve a raw input to its canonical option, ignoring case.
    ///
    /// Returns `None` if the input is not one of this metric's options.
    #[must_use]
    pub fn canonicalize(self, raw: &str) -> Option<&'static str> {
        let needle = raw.to_lowercase();
        self.options()
            .iter()
            .copied()
            .find(|option| option.to_lowercase() == needle)
    }

    /// Check whether a raw input is a valid option for this metric.
    #[must_use]
    pub fn accepts(self, raw: &str) -> bool {
        self.canonicalize(raw).is_some()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

// =============================================================================
// TESTS
// =============================================================================
