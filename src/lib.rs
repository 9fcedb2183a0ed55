// src/lib.rs
pub mod backup;
pub mod cli;
pub mod health;
pub mod report;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for a probe binary.
///
/// Diagnostics go to stderr so stdout carries only the status lines consumed
/// by the invoking scheduler. The filter comes from `RUST_LOG`, defaulting to
/// `ops_probes=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ops_probes=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
