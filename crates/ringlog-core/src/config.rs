//! Configuration for ringlog
//!
//! `FileLogConfig` describes one rotating ring of log files and is shared,
//! read-only, by the file sink and the export assembler. `LoggerConfig` is the
//! optional TOML file that wires up a complete logging pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::*;
use crate::error::Result;
use crate::types::MessageKind;

/// Location and bounds of a rotating ring of log files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogConfig {
    /// Directory holding the ring slots
    pub directory: PathBuf,
    /// Number of ring slots
    pub file_count: usize,
    /// Soft capacity of one slot in bytes
    pub file_size: u64,
}

impl FileLogConfig {
    pub fn new(directory: impl Into<PathBuf>, file_count: usize, file_size: u64) -> Self {
        Self {
            directory: directory.into(),
            file_count,
            file_size,
        }
    }

    /// Candidate slot paths, ordered by index
    pub fn log_file_paths(&self) -> Vec<PathBuf> {
        (0..self.file_count)
            .map(|index| self.directory.join(log_file_name(index)))
            .collect()
    }
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self::new(logs_dir(), DEFAULT_FILE_COUNT, DEFAULT_FILE_SIZE)
    }
}

impl fmt::Display for FileLogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} files {} bytes each",
            self.directory.display(),
            self.file_count,
            self.file_size
        )
    }
}

fn default_file_count() -> usize {
    DEFAULT_FILE_COUNT
}

fn default_file_size() -> u64 {
    DEFAULT_FILE_SIZE
}

fn default_true() -> bool {
    true
}

/// `[file]` section of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSection {
    /// Ring directory (default: platform data dir)
    pub directory: Option<PathBuf>,
    #[serde(default = "default_file_count")]
    pub file_count: usize,
    #[serde(default = "default_file_size")]
    pub file_size: u64,
    #[serde(default)]
    pub include_source: bool,
    /// Kinds written to the ring (empty = all kinds)
    #[serde(default)]
    pub kinds: Vec<MessageKind>,
}

impl Default for FileSection {
    fn default() -> Self {
        Self {
            directory: None,
            file_count: DEFAULT_FILE_COUNT,
            file_size: DEFAULT_FILE_SIZE,
            include_source: false,
            kinds: Vec::new(),
        }
    }
}

/// `[console]` section of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub include_source: bool,
    /// Kinds printed to stdout (empty = all kinds)
    #[serde(default)]
    pub kinds: Vec<MessageKind>,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            enabled: true,
            include_source: false,
            kinds: Vec::new(),
        }
    }
}

/// Logger configuration file (ringlog.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggerConfig {
    #[serde(default)]
    pub file: FileSection,
    #[serde(default)]
    pub console: ConsoleSection,
}

impl LoggerConfig {
    /// Load config from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path())
    }

    /// Load config from a specific path, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Logger config not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: LoggerConfig = toml::from_str(&content)?;

        debug!("Loaded logger config from {:?}", path);
        Ok(config)
    }

    /// Ring configuration described by the `[file]` section
    pub fn file_log_config(&self) -> FileLogConfig {
        FileLogConfig::new(
            self.file.directory.clone().unwrap_or_else(logs_dir),
            self.file.file_count,
            self.file.file_size,
        )
    }
}
