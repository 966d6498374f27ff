// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-format - commit message checker
//!
//! Checks spelling, line length and template structure of branch commits.

use commit_format::cli::{run, Cli};
use commit_format::version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse_compat();

    // Set up logging
    setup_logging(cli.verbose);

    // Run the checks
    match run(cli) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up logging/tracing.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("commit_format=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if verbose {
        tracing::debug!("commit-format {}", version::version_string());
    }
}
