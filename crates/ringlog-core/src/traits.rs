//! Boundary traits shared by the file sink and the logging pipeline

use std::path::Path;

use crate::error::Result;

/// A destination for already formatted lines
pub trait FormattedLogOutput: Send {
    /// Persist one formatted line. The output appends its own line terminator.
    fn receive(&mut self, line: &str) -> Result<()>;
}

/// Produces a single export artifact from the persisted log
pub trait LogAssembler: Send + Sync {
    /// Write the assembled log to `destination`, replacing anything already there
    fn assemble(&self, destination: &Path) -> Result<()>;
}

impl<T: FormattedLogOutput + ?Sized> FormattedLogOutput for Box<T> {
    fn receive(&mut self, line: &str) -> Result<()> {
        (**self).receive(line)
    }
}

impl<T: LogAssembler + ?Sized> LogAssembler for std::sync::Arc<T> {
    fn assemble(&self, destination: &Path) -> Result<()> {
        (**self).assemble(destination)
    }
}
