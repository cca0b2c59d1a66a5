//! Tracing setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use vitals_core::VitalsError;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// The dashboard owns the terminal, so `log_file` lets diagnostics go
/// somewhere readable. Without it, output goes to stderr. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                VitalsError::Config(format!("cannot open log file {}: {e}", path.display()))
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("tracing already initialized: {e}"))?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("tracing already initialized: {e}"))?;
        }
    }
    Ok(())
}
