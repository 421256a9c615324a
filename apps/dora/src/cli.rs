//! # CLI Module
//!
//! Argument parsing and command handlers for the `dora` binary.
//!
//! Handlers return the text to print instead of printing it, so tests can
//! drive them directly. The argument count is checked by the handler rather
//! than by clap, which keeps the usage diagnostic and option listing in one
//! place.

use clap::{ArgAction, Parser};
use dora_core::presenter::{options_listing, render_category, render_detailed, render_error};
use dora_core::{classify, Classification, DoraError};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Classify delivery performance into a DORA tier.
#[derive(Parser, Debug)]
#[command(
    name = "dora",
    author,
    version,
    about = "Classify software delivery performance into a DORA tier",
    long_about = None,
    after_help = options_listing()
)]
pub struct Cli {
    /// Deployment frequency, lead time, change fail percentage and time to
    /// restore, in that order
    ///
    /// Values starting with `-` (e.g. `-5`) are taken as inputs so they reach
    /// validation instead of failing as unknown flags.
    #[arg(value_name = "INPUT", num_args = 0.., allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Print the classification as JSON
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,

    /// Also print the canonical inputs and per-tier scores
    #[arg(short, long)]
    pub detailed: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failures of a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The inputs were rejected; the user needs the usage text.
    #[error(transparent)]
    Rejected(#[from] DoraError),

    /// The classification could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Text to show the user for this failure.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            CliError::Rejected(err) => render_error(err),
            CliError::Json(err) => format!("error: {err}\n"),
        }
    }

    /// Process exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Rejected(_) => 2,
            CliError::Json(_) => 1,
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Classify the positional inputs and render the result.
pub fn cmd_classify(inputs: &[String], json: bool, detailed: bool) -> Result<String, CliError> {
    debug!(count = inputs.len(), "classifying inputs");

    let classification = classify(inputs).inspect_err(|err| match err {
        DoraError::WrongArgumentCount { expected, actual } => {
            info!(expected, actual, "wrong number of arguments");
        }
        DoraError::InvalidOptionValue(invalid) => {
            for input in invalid {
                info!(metric = %input.metric, value = %input.value, "invalid option");
            }
        }
    })?;

    log_classification(&classification);

    if json {
        Ok(serde_json::to_string_pretty(&classification)?)
    } else if detailed {
        Ok(render_detailed(&classification))
    } else {
        Ok(render_category(&classification.category))
    }
}

fn log_classification(classification: &Classification) {
    let scores = &classification.scores;
    debug!(
        low = scores.low,
        medium = scores.medium,
        high = scores.high,
        elite = scores.elite,
        "tier scores"
    );
    info!(category = %classification.category, "classified");
}
