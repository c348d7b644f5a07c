//! Tracing subscriber initialization.
//!
//! Logs go to stderr so they never mix with rendered results on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "sgpi=debug,sgpi_core=debug" } else { "warn" }
}

/// Install the global subscriber. Respects `RUST_LOG`.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Could not initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_levels_only() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("sgpi_core=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
