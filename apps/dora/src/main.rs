//! # DORA Binary
//!
//! Entry point for the `dora` command.

use clap::Parser;
use dora::cli::{cmd_classify, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cmd_classify(&cli.inputs, cli.json, cli.detailed) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Diagnostics go to stdout alongside normal output; logs use stderr.
            print!("{}", err.render());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
