//! # DORA Library
//!
//! This library exposes the CLI module for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export dora_core for convenience
pub use dora_core;
