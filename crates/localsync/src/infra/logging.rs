use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Log file name inside the `localsync` home directory.
pub const LOG_FILE: &str = "localsync.log";
const DEFAULT_FILTER: &str = "info";

/// Returns the default log file location, `~/.localsync/localsync.log`.
pub fn default_log_path(home: &Path) -> PathBuf {
    home.join(LOG_FILE)
}

/// Installs the global `tracing` subscriber writing to `log_path`.
///
/// The TUI owns stdout, so events only ever go to the file. Filtering
/// follows `RUST_LOG` and falls back to `info`.
///
/// # Errors
/// Returns an error if the log directory or file cannot be created, or if a
/// global subscriber was already installed.
pub fn init(log_path: &Path) -> io::Result<()> {
    let log_file = open_log_file(log_path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(io::Error::other)
}

fn open_log_file(log_path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(log_path)
}
