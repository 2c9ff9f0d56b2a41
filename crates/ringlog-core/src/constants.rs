//! Constants and default values for ringlog

use std::path::PathBuf;

/// Application directory name under the platform data dir
pub const RINGLOG_DIR: &str = "ringlog";

/// Default config file name
pub const CONFIG_FILE: &str = "ringlog.toml";

/// Default log directory name
pub const LOGS_DIR: &str = "Log";

/// Prefix of every ring slot file name (`log0.txt`, `log1.txt`, ...)
pub const LOG_FILE_PREFIX: &str = "log";

/// Extension of every ring slot file name
pub const LOG_FILE_EXTENSION: &str = "txt";

/// Default number of ring slots
pub const DEFAULT_FILE_COUNT: usize = 10;

/// Default capacity of one ring slot in bytes
pub const DEFAULT_FILE_SIZE: u64 = 500_000;

/// Get the ringlog data directory
pub fn ringlog_home() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(RINGLOG_DIR))
        .unwrap_or_else(|| PathBuf::from(RINGLOG_DIR))
}

/// Get the default log directory
pub fn logs_dir() -> PathBuf {
    ringlog_home().join(LOGS_DIR)
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    ringlog_home().join(CONFIG_FILE)
}

/// File name of the ring slot at `index`
pub fn log_file_name(index: usize) -> String {
    format!("{}{}.{}", LOG_FILE_PREFIX, index, LOG_FILE_EXTENSION)
}
