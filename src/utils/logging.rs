// ui5-nwabap-deployer/src/utils/logging.rs
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "ui5_nwabap_deployer=info";
const VERBOSE_LOG_FILTER: &str = "ui5_nwabap_deployer=debug";

/// Initializes tracing output on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` switches between the
/// info and debug filters.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
