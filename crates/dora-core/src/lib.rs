//! # DORA Core
//!
//! Deterministic classifier for DORA software delivery performance.
//!
//! Four categorical inputs (deployment frequency, lead time for changes,
//! change failure percentage, time to restore service) are validated against
//! fixed option sets, scored against each tier's reference profile and
//! resolved into a performance category.
//!
//! ```text
//! raw inputs ──► validate ──► Profile ──► score_all ──► Scores ──► resolve ──► Category
//! ```
//!
//! ## Example
//!
//! ```
//! use dora_core::{classify, Category, Tier};
//!
//! let result = classify(&[
//!     "On demand (multiple deploys per day)",
//!     "Less than one day",
//!     "0–15%",
//!     "Less than one hour",
//! ])?;
//! assert_eq!(result.category, Category::Tier(Tier::Elite));
//! # Ok::<(), dora_core::DoraError>(())
//! ```
//!
//! This crate performs no I/O. Printing and exit codes live in `apps/dora`.

pub mod category;
pub mod classifier;
pub mod error;
pub mod metric;
pub mod presenter;
pub mod score;
pub mod tier;
pub mod validate;

pub use category::{resolve, Category, NO_MATCH_LABEL};
pub use classifier::{classify, Classification};
pub use error::{DoraError, InvalidInput, INPUT_COUNT};
pub use metric::Metric;
pub use score::{score, score_all, Scores, MAX_SCORE};
pub use tier::{Tier, TierCriteria};
pub use validate::{invalid_inputs, validate, Profile};
