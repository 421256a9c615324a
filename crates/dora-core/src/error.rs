//! # Error Module
//!
//! The two user-facing failures of a classification run.

use crate::metric::Metric;
use std::fmt;
use thiserror::Error;

/// Number of positional inputs a classification needs.
pub const INPUT_COUNT: usize = 4;

/// Errors from dora-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DoraError {
    /// Not exactly four inputs were supplied.
    #[error("expected exactly {expected} arguments, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },

    /// One or more inputs are not in their metric's option set.
    #[error("The following inputs are invalid: {}", join_invalid(.0))]
    InvalidOptionValue(Vec<InvalidInput>),
}

/// A rejected input and the metric it was given for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub metric: Metric,
    pub value: String,
}

impl InvalidInput {
    #[must_use]
    pub fn new(metric: Metric, value: impl Into<String>) -> Self {
        Self {
            metric,
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.metric.field_name(), self.value)
    }
}

/// Join invalid inputs as `Field: value, Field: value`.
#[must_use]
pub fn join_invalid(inputs: &[InvalidInput]) -> String {
    inputs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
