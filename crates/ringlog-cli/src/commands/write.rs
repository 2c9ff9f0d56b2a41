//! Write command implementation

use anyhow::Result;
use ringlog::Logging;
use ringlog_core::LoggerConfig;

use crate::cli::WriteArgs;

pub fn execute(config: &LoggerConfig, args: WriteArgs) -> Result<()> {
    let logging = Logging::from_config(config)?;
    let text = args.message.join(" ");

    ringlog::log_at!(logging, args.kind, args.sync, "{}", text);

    // Entries still queued would be lost at exit
    logging.flush()?;
    Ok(())
}
