//! Command implementations

pub mod export;
pub mod files;
pub mod write;

use anyhow::Result;
use ringlog_core::LoggerConfig;
use tracing::debug;

use crate::cli::Cli;

/// Config file contents with command-line overrides applied
pub fn load_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load_from(path)?,
        None => LoggerConfig::load()?,
    };

    if let Some(dir) = &cli.dir {
        config.file.directory = Some(dir.clone());
    }
    if let Some(files) = cli.files {
        config.file.file_count = files;
    }
    if let Some(size) = cli.size {
        config.file.file_size = size;
    }

    debug!("Using ring {}", config.file_log_config());
    Ok(config)
}
