//! Files command implementation

use anyhow::Result;
use ringlog_core::LoggerConfig;
use ringlog_file::log_file;

use crate::output::print_slots_table;

pub fn execute(config: &LoggerConfig) -> Result<()> {
    let file_config = config.file_log_config();
    let slots = log_file::slots(&file_config)?;

    print_slots_table(&file_config, &slots);
    Ok(())
}
