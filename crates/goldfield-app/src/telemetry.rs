//! Logging bootstrap.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default directives when neither `--log-filter` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info,goldfield_sim=info";

/// Build the filter: explicit directives win over `RUST_LOG`.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for snapshot JSON.
pub fn init(directives: Option<&str>) -> anyhow::Result<()> {
    let filter = env_filter(directives)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
