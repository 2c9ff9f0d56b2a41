//! Ring rotation policy: which slot receives the next write
//!
//! The newest slot keeps receiving writes until it reaches capacity. After that
//! the lowest-index vacant slot is started, and once every slot is occupied the
//! least recently modified slot is truncated and reused.

use ringlog_core::{Error, FileLogConfig, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::log_file::{self, LogFile};

/// Outcome of the rotation policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// Append to the newest slot, it is still under capacity
    Continue(LogFile),
    /// Start the slot at this path, which has no file yet
    Vacant(PathBuf),
    /// Truncate the oldest slot and reuse it
    Recycle(LogFile),
}

impl Rotation {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Rotation::Continue(file) | Rotation::Recycle(file) => file.path(),
            Rotation::Vacant(path) => path,
        }
    }
}

/// Decide the next write target from the slots that currently exist
pub fn plan(config: &FileLogConfig, existing: &[LogFile]) -> Result<Rotation> {
    if let Some(newest) = log_file::newest(existing) {
        if newest.size() < config.file_size {
            return Ok(Rotation::Continue(newest.clone()));
        }
    }

    let vacant = config
        .log_file_paths()
        .into_iter()
        .find(|path| existing.iter().all(|file| file.path() != path.as_path()));
    if let Some(path) = vacant {
        return Ok(Rotation::Vacant(path));
    }

    match log_file::oldest(existing) {
        Some(oldest) => Ok(Rotation::Recycle(oldest.clone())),
        None => Err(Error::NoLogFileAvailable(config.to_string())),
    }
}

/// Pick the slot for the next write, preparing it on disk
///
/// Creates the ring directory when missing. Vacant slots are created empty and
/// recycled slots are truncated before they are returned.
pub fn select_log_file(config: &FileLogConfig) -> Result<LogFile> {
    ensure_log_dir(config)?;

    let existing = log_file::existing_log_files(config)?;
    match plan(config, &existing)? {
        Rotation::Continue(file) => {
            debug!("Continuing log file: {}", file.path().display());
            Ok(file)
        }
        Rotation::Vacant(path) => {
            debug!("Starting vacant log file: {}", path.display());
            log_file::recycle(&path)
        }
        Rotation::Recycle(file) => {
            debug!("Recycling oldest log file: {}", file.path().display());
            log_file::recycle(file.path())
        }
    }
}

/// Ensure the ring directory exists
pub fn ensure_log_dir(config: &FileLogConfig) -> Result<()> {
    if !config.directory.exists() {
        fs::create_dir_all(&config.directory)?;
    }
    Ok(())
}
