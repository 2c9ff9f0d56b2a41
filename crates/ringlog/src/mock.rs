//! Mock implementations for testing

use parking_lot::Mutex;
use ringlog_core::{
    Error, FormattedLogOutput, LogAssembler, LogEntry, Message, Result, Source,
};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::formatter::LogEntryFormatter;
use crate::logger::Logger;
use crate::writer::LogDestination;

/// A logger that records every call
#[derive(Default)]
pub struct MockLogger {
    calls: Mutex<Vec<(Message, Option<Source>, bool)>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(Message, Option<Source>, bool)> {
        self.calls.lock().clone()
    }
}

impl Logger for MockLogger {
    fn log(&self, message: Message, source: Option<Source>, sync: bool) {
        self.calls.lock().push((message, source, sync));
    }
}

/// A destination that records received entries; clones share the record
#[derive(Clone, Default)]
pub struct MockDestination {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    /// Number of leading calls that fail
    failures: Arc<AtomicUsize>,
}

impl MockDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `count` calls, then record as usual
    pub fn failing_first(count: usize) -> Self {
        Self {
            failures: Arc::new(AtomicUsize::new(count)),
            ..Default::default()
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl LogDestination for MockDestination {
    fn receive(&mut self, entry: &LogEntry) -> Result<()> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::config("Mock failure"));
        }
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}

/// A formatted output that records lines; clones share the record
#[derive(Clone, Default)]
pub struct MockOutput {
    lines: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl FormattedLogOutput for MockOutput {
    fn receive(&mut self, line: &str) -> Result<()> {
        if self.should_fail {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Mock failure",
            )));
        }
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

/// A formatter driven by a closure
pub struct MockFormatter {
    handler: Box<dyn Fn(&LogEntry) -> String + Send + Sync>,
}

impl MockFormatter {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&LogEntry) -> String + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl LogEntryFormatter for MockFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        (self.handler)(entry)
    }
}

/// An assembler that writes fixed text, or fails like an empty ring
pub struct MockAssembler {
    text: Option<String>,
}

impl MockAssembler {
    pub fn writing(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

impl LogAssembler for MockAssembler {
    fn assemble(&self, destination: &Path) -> Result<()> {
        match &self.text {
            Some(text) => Ok(std::fs::write(destination, text)?),
            None => Err(Error::LogNotFound("mock".to_string())),
        }
    }
}
