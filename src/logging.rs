//! Logging initialization.
//!
//! Uses the `tracing` ecosystem. Diagnostics go to stderr so that stdout
//! carries only prompts and status lines.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when RUST_LOG is unset. Quiet by default so stderr only
/// carries the final error line.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `verbose` - If true, enables DEBUG level logging; otherwise WARN level.
/// * `json_format` - If true, outputs structured JSON logs; otherwise compact text.
///
/// The RUST_LOG environment variable overrides the level.
pub fn init(verbose: bool, json_format: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
