//! Tracing setup
//!
//! Logs go to stderr so they never interleave with tables on stdout.
//!
//! Usage:
//!   staffdesk                           # info and above
//!   RUST_LOG=staffdesk=debug staffdesk  # statement-level detail

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `fallback` is used when `RUST_LOG` is unset or cannot be parsed.
pub fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}
