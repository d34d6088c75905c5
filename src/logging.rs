//! Tracing setup. The game owns the terminal, so log lines only go to a file.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to `path`, filtered by `RUST_LOG` (default `info`).
///
/// Without a path nothing is installed and tracing macros are no-ops. Fails if a
/// global subscriber is already set.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
