//! File-backed logging setup.
//!
//! The terminal owns stdout while the UI runs, so logs are written to a file
//! under the data directory. `HNS_LOG` overrides the configured level using
//! the standard `EnvFilter` directive syntax.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

const LOG_FILE: &str = "hns.log";
const LOG_ENV: &str = "HNS_LOG";

/// Install the global subscriber and return the log file path.
pub(crate) fn initialize(level: &str) -> Result<PathBuf> {
	let dir = crate::app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let path = dir.join(LOG_FILE);
	let file = File::create(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

	fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

	Ok(path)
}
