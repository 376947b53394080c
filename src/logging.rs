use tracing_subscriber::EnvFilter;

use crate::error::{Result, ToolError};

/// Filter applied when `RUST_LOG` is unset. Console output of the utilities is
/// plain text, so diagnostics stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a global `tracing` subscriber writing to stderr.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}
