//! # Classifier Module
//!
//! Entry point tying validation, scoring and resolution together.

use crate::category::{resolve, Category};
use crate::error::{DoraError, INPUT_COUNT};
use crate::score::{score_all, Scores};
use crate::validate::{validate, Profile};
use serde::Serialize;

/// Result of a successful classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The resolved category.
    pub category: Category,
    /// Per-tier similarity scores.
    pub scores: Scores,
    /// The validated inputs, in canonical spelling.
    pub inputs: Profile,
}

impl Classification {
    /// Score and resolve an already validated profile.
    #[must_use]
    pub fn from_profile(profile: Profile) -> Self {
        let scores = score_all(&profile);
        Self {
            category: resolve(&scores),
            scores,
            inputs: profile,
        }
    }
}

/// Classify raw positional inputs.
///
/// Fails with `WrongArgumentCount` unless exactly four inputs are given, and
/// with `InvalidOptionValue` if any input is not a valid option.
pub fn classify<S: AsRef<str>>(inputs: &[S]) -> Result<Classification, DoraError> {
    let inputs: &[S; INPUT_COUNT] = inputs.try_into().map_err(|_| DoraError::WrongArgumentCount {
        expected: INPUT_COUNT,
        actual: inputs.len(),
    })?;

    let profile = validate(inputs)?;
    Ok(Classification::from_profile(profile))
}

// =============================================================================
// TESTS
// =============================================================================
