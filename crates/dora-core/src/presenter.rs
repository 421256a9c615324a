//! # Presenter Module
//!
//! Plain-text formatting for classification results and diagnostics.
//!
//! Pure string assembly only. Printing and exit codes stay in the app layer.

use crate::category::Category;
use crate::classifier::Classification;
use crate::error::{join_invalid, DoraError};
use crate::metric::Metric;
use crate::score::{Scores, MAX_SCORE};
use crate::tier::Tier;

/// Usage line shown when the argument count is wrong.
pub const USAGE: &str = "Please provide exactly 4 arguments: Deployment frequency, Lead time, Change fail percentage, Time to restore.";

/// Header of the option listing.
pub const OPTIONS_HEADER: &str = "Here are the possible options for each argument:";

/// Every valid option, grouped by metric in positional order.
///
/// ```text
/// Here are the possible options for each argument:
/// 1. Deployment frequency:
///    - Fewer than once per six months
///    ...
/// ```
#[must_use]
pub fn options_listing() -> String {
    let mut output = String::new();
    output.push_str(OPTIONS_HEADER);
    output.push('\n');

    for metric in Metric::ALL {
        output.push_str(&format!("{}. {}:\n", metric.position() + 1, metric.heading()));
        for option in metric.options() {
            output.push_str(&format!("   - {option}\n"));
        }
    }

    output
}

/// Diagnostic plus option listing for a failed run.
#[must_use]
pub fn render_error(error: &DoraError) -> String {
    let headline = match error {
        DoraError::WrongArgumentCount { .. } => USAGE.to_string(),
        DoraError::InvalidOptionValue(invalid) => {
            format!("The following inputs are invalid: {}", join_invalid(invalid))
        }
    };

    format!("{headline}\n{}", options_listing())
}

/// The result line, e.g. `Performance Category: Elite`.
#[must_use]
pub fn render_category(category: &Category) -> String {
    format!("Performance Category: {category}")
}

/// One line per tier with its score.
#[must_use]
pub fn render_scores(scores: &Scores) -> String {
    Tier::ALL
        .iter()
        .map(|tier| format!("  {:<6} {}/{MAX_SCORE}\n", tier.name(), scores.get(*tier)))
        .collect()
}

/// Result line followed by the canonical inputs and per-tier scores.
#[must_use]
pub fn render_detailed(classification: &Classification) -> String {
    let mut output = render_category(&classification.category);
    output.push_str("\n\nInputs:\n");
    for (metric, value) in classification.inputs.iter() {
        output.push_str(&format!("  {}: {}\n", metric.field_name(), value));
    }
    output.push_str("\nScores:\n");
    output.push_str(&render_scores(&classification.scores));
    output
}

// =============================================================================
// TESTS
// =============================================================================
