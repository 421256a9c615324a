//! # Validate Module
//!
//! Input validation for the four positional inputs.
//!
//! Validation is pure. A successful run yields a [`Profile`] holding the
//! canonical spelling of every input, so later stages never see user casing.

use crate::error::{DoraError, InvalidInput, INPUT_COUNT};
use crate::metric::Metric;
use serde::Serialize;

/// The four validated inputs, in canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub deployment_frequency: &'static str,
    pub lead_time: &'static str,
    pub change_fail_percentage: &'static str,
    pub time_to_restore: &'static str,
}

impl Profile {
    /// The canonical input for a metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> &'static str {
        match metric {
            Metric::DeploymentFrequency => self.deployment_frequency,
            Metric::LeadTime => self.lead_time,
            Metric::ChangeFailPercentage => self.change_fail_percentage,
            Metric::TimeToRestore => self.time_to_restore,
        }
    }

    /// Iterate `(metric, input)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &'static str)> {
        let profile = *self;
        Metric::ALL
            .into_iter()
            .map(move |metric| (metric, profile.get(metric)))
    }
}

/// List the inputs that are not valid for their metric, in positional order.
#[must_use]
pub fn invalid_inputs<S: AsRef<str>>(inputs: &[S; INPUT_COUNT]) -> Vec<InvalidInput> {
    Metric::ALL
        .iter()
        .zip(inputs)
        .filter(|(metric, raw)| !metric.accepts(raw.as_ref()))
        .map(|(metric, raw)| InvalidInput::new(*metric, raw.as_ref()))
        .collect()
}

/// Validate four raw inputs and resolve them to a [`Profile`].
///
/// Returns `DoraError::InvalidOptionValue` listing every rejected input.
pub fn validate<S: AsRef<str>>(inputs: &[S; INPUT_COUNT]) -> Result<Profile, DoraError> {
    let canonical = |metric: Metric| metric.canonicalize(inputs[metric.position()].as_ref());

    match (
        canonical(Metric::DeploymentFrequency),
        canonical(Metric::LeadTime),
        canonical(Metric::ChangeFailPercentage),
        canonical(Metric::TimeToRestore),
    ) {
        (
            Some(deployment_frequency),
            Some(lead_time),
            Some(change_fail_percentage),
            Some(time_to_restore),
        ) => Ok(Profile {
            deployment_frequency,
            lead_time,
            change_fail_percentage,
            time_to_restore,
        }),
        _ => Err(DoraError::InvalidOptionValue(invalid_inputs(inputs))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
