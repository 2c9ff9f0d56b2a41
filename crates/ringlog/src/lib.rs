//! ringlog - Leveled logging to the console and a rotating ring of files
//!
//! Messages go through a [`LogDispatcher`], which stamps them and delivers
//! them on a single [`LogQueue`] worker to every registered destination. The
//! standard pipeline built by [`LoggerFactory`] prints to stdout and appends
//! to a bounded ring of files, which [`LogExporter`] can concatenate on demand.
//!
//! ```no_run
//! use ringlog::{info, Logging};
//!
//! let logging = Logging::set_up_default()?;
//! info!(logging, "started with {} workers", 4);
//! let bytes = logging.exporter().export_bytes()?;
//! # Ok::<(), ringlog::Error>(())
//! ```

mod dispatcher;
mod exporter;
mod factory;
mod formatter;
mod logger;
#[cfg(test)]
pub mod mock;
mod queue;
mod writer;

pub use dispatcher::{Clock, Filter, LogDispatcher};
pub use exporter::LogExporter;
pub use factory::{LoggerFactory, Logging};
pub use formatter::{FormatterConfig, KindLabels, LogEntryFormatter, StandardLogEntryFormatter};
pub use logger::Logger;
pub use queue::LogQueue;
pub use writer::{ConsoleLogOutput, FormattedLogWriter, LogDestination};

pub use ringlog_core::{
    Error, FileLogConfig, FormattedLogOutput, LogAssembler, LogEntry, LoggerConfig, Message,
    MessageKind, Result, Source,
};
pub use ringlog_file::{FileLogAssembler, FileLogOutput};
