//! Export of the persisted log into a standalone file or byte buffer

use ringlog_core::{Error, LogAssembler, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::queue::LogQueue;

/// Runs a [`LogAssembler`] on the log queue
///
/// Sharing the dispatcher's queue means an export never overlaps a write to
/// the files it reads.
#[derive(Clone)]
pub struct LogExporter {
    queue: LogQueue,
    assembler: Arc<dyn LogAssembler>,
    output_dir: PathBuf,
}

impl LogExporter {
    pub fn new<A>(queue: LogQueue, assembler: A) -> Self
    where
        A: LogAssembler + 'static,
    {
        Self {
            queue,
            assembler: Arc::new(assembler),
            output_dir: std::env::temp_dir(),
        }
    }

    /// Directory receiving export files (default: the system temp dir)
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Assemble into `output_dir/file_name` on the queue, then call `completion`
    /// with the resulting path. The callback runs on the queue thread.
    pub fn export_with<F>(&self, file_name: &str, completion: F) -> Result<()>
    where
        F: FnOnce(Result<PathBuf>) + Send + 'static,
    {
        let assembler = self.assembler.clone();
        let path = self.output_dir.join(file_name);

        self.queue.execute(move || {
            debug!("Exporting log to {}", path.display());
            let result = assembler.assemble(&path).map(|_| path);
            completion(result);
        })
    }

    /// Assemble into `output_dir/file_name`, blocking until done
    pub fn export_to_file(&self, file_name: &str) -> Result<PathBuf> {
        let assembler = self.assembler.clone();
        let path = self.output_dir.join(file_name);

        self.queue
            .execute_sync(move || assembler.assemble(&path).map(|_| path))?
    }

    /// Assemble into a uniquely named file and return its contents
    ///
    /// The intermediate file is removed afterwards.
    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        let file_name = uuid::Uuid::new_v4().to_string();
        let path = self.export_to_file(&file_name)?;

        let data = fs::read(&path)?;
        if let Err(e) = fs::remove_file(&path) {
            warn!("Failed to remove export file {}: {}", path.display(), e);
        }
        Ok(data)
    }

    /// Async form of [`LogExporter::export_to_file`]
    pub async fn export(&self, file_name: &str) -> Result<PathBuf> {
        let (tx, rx) = oneshot::channel();
        self.export_with(file_name, move |result| {
            let _ = tx.send(result);
        })?;
        rx.await.map_err(|_| Error::QueueClosed)?
    }
}
