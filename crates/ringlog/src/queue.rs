//! Serial execution context shared by the dispatcher and the exporter

use crossbeam_channel::{bounded, unbounded, Sender};
use parking_lot::Mutex;
use ringlog_core::{Error, Result};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A single worker thread running submitted jobs one at a time, in order
///
/// Cloning shares the same worker. The worker exits once every clone is
/// dropped and the jobs already queued have run.
#[derive(Clone)]
pub struct LogQueue {
    inner: Arc<Inner>,
}

struct Inner {
    label: String,
    tx: Mutex<Option<Sender<Job>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl LogQueue {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let (tx, rx) = unbounded::<Job>();

        let worker = thread::Builder::new()
            .name(label.clone())
            .spawn(move || {
                while let Ok(job) = rx.recv() {
                    job();
                }
            })?;

        debug!("Started log queue '{}'", label);

        Ok(Self {
            inner: Arc::new(Inner {
                label,
                tx: Mutex::new(Some(tx)),
                worker: Mutex::new(Some(worker)),
            }),
        })
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Queue `job` without waiting for it
    pub fn execute<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let guard = self.inner.tx.lock();
        let tx = guard.as_ref().ok_or(Error::QueueClosed)?;
        tx.send(Box::new(job)).map_err(|_| Error::QueueClosed)
    }

    /// Queue `job` and block until it has run, returning its result
    ///
    /// Must not be called from a job running on this queue.
    pub fn execute_sync<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (done_tx, done_rx) = bounded(1);
        self.execute(move || {
            let _ = done_tx.send(job());
        })?;
        done_rx.recv().map_err(|_| Error::QueueClosed)
    }

    /// Block until every job queued before this call has run
    pub fn wait(&self) -> Result<()> {
        self.execute_sync(|| ())
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit
        self.tx.lock().take();
        if let Some(worker) = self.worker.lock().take() {
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                warn!("Log queue '{}' worker panicked", self.label);
            }
        }
    }
}
