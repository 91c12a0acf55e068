//! Decoy harness binary.
//!
//! Runs one self-driving decoy session with the fixed default
//! configuration. The event stream goes to stdout as JSON lines;
//! diagnostics go to stderr, filtered by `RUST_LOG`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use decoy_harness::config::HarnessConfig;
use decoy_harness::session::ProbeSession;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut session = ProbeSession::new(HarnessConfig::default());
    let report = session.run().await;

    info!(
        sessions = report.sessions,
        failures = report.failures,
        binary = %report.final_binary,
        "decoy session complete"
    );
    Ok(())
}
