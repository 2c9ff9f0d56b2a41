//! Destinations: where the dispatcher delivers entries

use ringlog_core::{FormattedLogOutput, LogEntry, Result};
use std::io::{self, Write};

use crate::formatter::LogEntryFormatter;

/// Receives structured entries from the dispatcher
pub trait LogDestination: Send {
    fn receive(&mut self, entry: &LogEntry) -> Result<()>;
}

impl<T: LogDestination + ?Sized> LogDestination for Box<T> {
    fn receive(&mut self, entry: &LogEntry) -> Result<()> {
        (**self).receive(entry)
    }
}

/// Formats each entry and hands the line to an output
pub struct FormattedLogWriter<F, O> {
    formatter: F,
    output: O,
}

impl<F, O> FormattedLogWriter<F, O>
where
    F: LogEntryFormatter,
    O: FormattedLogOutput,
{
    pub fn new(formatter: F, output: O) -> Self {
        Self { formatter, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

impl<F, O> LogDestination for FormattedLogWriter<F, O>
where
    F: LogEntryFormatter,
    O: FormattedLogOutput,
{
    fn receive(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        self.output.receive(&line)
    }
}

/// Prints formatted lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleLogOutput;

impl ConsoleLogOutput {
    pub fn new() -> Self {
        Self
    }
}

impl FormattedLogOutput for ConsoleLogOutput {
    fn receive(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}
