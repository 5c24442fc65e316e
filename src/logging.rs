use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a log filter when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "PSCAN_LOGLEVEL";

/// Install a stderr `tracing` subscriber.
///
/// Filter precedence: `RUST_LOG`, then `PSCAN_LOGLEVEL`, then a crate-level
/// default of `debug` when `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_this_crate() {
        assert_eq!(default_filter(false), "pscan_rs=warn");
        assert_eq!(default_filter(true), "pscan_rs=debug");
    }
}
