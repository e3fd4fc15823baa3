//! Logging setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records can't
//! go to stderr. They are written to the configured log file instead; with no
//! file configured, logging stays off.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the global logger.
///
/// The level comes from `RUST_LOG` (default `info`).
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;

    Ok(())
}
