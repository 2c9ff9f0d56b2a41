//! Export assembly: concatenate the ring into a single file, oldest first

use ringlog_core::{Error, FileLogConfig, LogAssembler, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::log_file;

/// Concatenates every existing ring slot into one artifact
///
/// Slots are read in ascending modification order and copied byte for byte,
/// with nothing inserted between them. The ring itself is never modified.
#[derive(Debug, Clone)]
pub struct FileLogAssembler {
    config: FileLogConfig,
}

impl FileLogAssembler {
    pub fn new(config: FileLogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FileLogConfig {
        &self.config
    }
}

impl LogAssembler for FileLogAssembler {
    fn assemble(&self, destination: &Path) -> Result<()> {
        let log_files = log_file::sorted_log_files_by_date(&self.config)?;

        if log_files.is_empty() {
            return Err(Error::LogNotFound(self.config.to_string()));
        }

        log_file::remove_file_if_exists(destination)?;
        log_file::create_empty_file_if_missing(destination)?;

        let mut output = OpenOptions::new().append(true).open(destination)?;

        for log_file in &log_files {
            debug!("Assembling {}", log_file.path().display());
            let mut input = File::open(log_file.path())?;
            io::copy(&mut input, &mut output)?;
        }
        output.flush()?;

        info!(
            "Assembled {} log file(s) into {}",
            log_files.len(),
            destination.display()
        );
        Ok(())
    }
}
