//! Wiring of the standard pipeline: console + file ring, plus exporter

use ringlog_core::{
    FileLogConfig, LoggerConfig, Message, MessageKind, Result, Source, DEFAULT_FILE_COUNT,
    DEFAULT_FILE_SIZE,
};
use ringlog_file::{FileLogAssembler, FileLogOutput};
use std::sync::Arc;
use tracing::info;

use crate::dispatcher::LogDispatcher;
use crate::exporter::LogExporter;
use crate::formatter::{FormatterConfig, StandardLogEntryFormatter};
use crate::logger::Logger;
use crate::queue::LogQueue;
use crate::writer::{ConsoleLogOutput, FormattedLogWriter, LogDestination};

/// Builds dispatcher/exporter pairs sharing one queue
pub struct LoggerFactory;

impl LoggerFactory {
    /// Console and file destinations accepting every kind
    pub fn make(queue: LogQueue, file_config: FileLogConfig) -> (Arc<LogDispatcher>, LogExporter) {
        let mut config = LoggerConfig::default();
        config.file.directory = Some(file_config.directory);
        config.file.file_count = file_config.file_count;
        config.file.file_size = file_config.file_size;
        Self::from_config(queue, &config)
    }

    /// Destinations as described by a [`LoggerConfig`]
    pub fn from_config(queue: LogQueue, config: &LoggerConfig) -> (Arc<LogDispatcher>, LogExporter) {
        let file_config = config.file_log_config();
        let dispatcher = LogDispatcher::new(queue.clone());

        if config.console.enabled {
            let console = FormattedLogWriter::new(
                StandardLogEntryFormatter::new(
                    FormatterConfig::console().with_source(config.console.include_source),
                ),
                ConsoleLogOutput::new(),
            );
            add_route(&dispatcher, console, &config.console.kinds);
        }

        let file = FormattedLogWriter::new(
            StandardLogEntryFormatter::new(
                FormatterConfig::file().with_source(config.file.include_source),
            ),
            FileLogOutput::new(file_config.clone()),
        );
        add_route(&dispatcher, file, &config.file.kinds);

        info!("Logging to {}", file_config);

        let exporter = LogExporter::new(queue, FileLogAssembler::new(file_config));
        (Arc::new(dispatcher), exporter)
    }
}

fn add_route<D>(dispatcher: &LogDispatcher, destination: D, kinds: &[MessageKind])
where
    D: LogDestination + 'static,
{
    if kinds.is_empty() {
        dispatcher.add(destination);
    } else {
        dispatcher.add_for_kinds(destination, kinds);
    }
}

/// Explicit logging handle created once at startup and passed to whoever logs
#[derive(Clone)]
pub struct Logging {
    logger: Arc<LogDispatcher>,
    exporter: LogExporter,
}

impl Logging {
    pub fn new(file_config: FileLogConfig) -> Result<Self> {
        let queue = LogQueue::new("Logger")?;
        let (logger, exporter) = LoggerFactory::make(queue, file_config);
        Ok(Self { logger, exporter })
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let queue = LogQueue::new("Logger")?;
        let (logger, exporter) = LoggerFactory::from_config(queue, config);
        Ok(Self { logger, exporter })
    }

    /// Ring of 10 files of 500 kB each in the platform data directory
    pub fn set_up_default() -> Result<Self> {
        Self::new(FileLogConfig::new(
            ringlog_core::logs_dir(),
            DEFAULT_FILE_COUNT,
            DEFAULT_FILE_SIZE,
        ))
    }

    /// Place export files in `dir` instead of the system temp dir
    pub fn with_export_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.exporter = self.exporter.with_output_dir(dir);
        self
    }

    pub fn logger(&self) -> &Arc<LogDispatcher> {
        &self.logger
    }

    pub fn exporter(&self) -> &LogExporter {
        &self.exporter
    }

    /// Block until every entry logged so far has been delivered
    pub fn flush(&self) -> Result<()> {
        self.logger.queue().wait()
    }
}

impl Logger for Logging {
    fn log(&self, message: Message, source: Option<Source>, sync: bool) {
        self.logger.log(message, source, sync);
    }
}
