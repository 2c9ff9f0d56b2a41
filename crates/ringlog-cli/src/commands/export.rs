//! Export command implementation

use anyhow::{Context, Result};
use ringlog::Logging;
use ringlog_core::LoggerConfig;
use std::path::Path;

use crate::output::print_exported;

pub async fn execute(config: &LoggerConfig, dest: &Path) -> Result<()> {
    let dest = if dest.is_absolute() {
        dest.to_path_buf()
    } else {
        std::env::current_dir()?.join(dest)
    };
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid export destination: {}", dest.display()))?;
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));

    let logging = Logging::from_config(config)?.with_export_dir(dir);
    let path = logging.exporter().export(file_name).await?;

    print_exported(&path);
    Ok(())
}
