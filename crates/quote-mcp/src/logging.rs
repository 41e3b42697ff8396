//! Logging and tracing utilities

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the server process.
///
/// Output goes to stderr: stdout carries the protocol stream.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
