//! File sink that appends formatted lines to the ring

use ringlog_core::{Error, FileLogConfig, FormattedLogOutput, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::rotation;

/// Log sink writing into a rotating ring of files
///
/// Holds at most one open file. The running `size` starts at the size the
/// file had when it was opened and grows by every line written, so rotation is
/// decided from this count rather than from a fresh stat.
pub struct FileLogOutput {
    config: FileLogConfig,
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    size: u64,
}

impl FileLogOutput {
    /// Create a sink for `config`. Nothing is opened until the first line arrives.
    pub fn new(config: FileLogConfig) -> Self {
        Self {
            config,
            writer: None,
            path: None,
            size: 0,
        }
    }

    pub fn config(&self) -> &FileLogConfig {
        &self.config
    }

    /// Path of the currently open slot
    pub fn current_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Counted size of the currently open slot
    pub fn current_size(&self) -> u64 {
        self.size
    }

    /// Write one line followed by a newline, then flush
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let message = format!("{}\n", line);
        let bytes = message.as_bytes();

        let writer = self.open_file_if_needed()?;
        if let Err(e) = writer.write_all(bytes).and_then(|_| writer.flush()) {
            // The failed line must not reach the file on a later flush
            self.discard();
            return Err(e.into());
        }

        self.size += bytes.len() as u64;
        Ok(())
    }

    /// Drop the open handle together with any bytes still buffered, so the
    /// next line re-runs rotation against the file's real size
    fn discard(&mut self) {
        if let Some(writer) = self.writer.take() {
            let (_file, unwritten) = writer.into_parts();
            if let Ok(bytes) = unwritten {
                debug!("Discarded {} unwritten bytes", bytes.len());
            }
        }
        self.path = None;
        self.size = 0;
    }

    fn open_file_if_needed(&mut self) -> Result<&mut BufWriter<File>> {
        if self.writer.is_none() || self.size >= self.config.file_size {
            self.close()?;
            self.open_next_file()?;
        }

        self.writer
            .as_mut()
            .ok_or_else(|| Error::NoLogFileAvailable(self.config.to_string()))
    }

    fn open_next_file(&mut self) -> Result<()> {
        let log_file = rotation::select_log_file(&self.config)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file.path())?;

        debug!(
            "Opened log file {} at {} bytes",
            log_file.path().display(),
            log_file.size()
        );

        self.size = log_file.size();
        self.path = Some(log_file.path().to_path_buf());
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    /// Flush and release the open file, if any
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        self.path = None;
        Ok(())
    }
}

impl FormattedLogOutput for FileLogOutput {
    fn receive(&mut self, line: &str) -> Result<()> {
        self.write_line(line)
    }
}

impl Drop for FileLogOutput {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            debug!("Failed to flush log file on drop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_file;
    use std::fs;
    use tempfile::TempDir;

    fn output(dir: &TempDir) -> FileLogOutput {
        FileLogOutput::new(FileLogConfig::new(dir.path(), 5, 50))
    }

    #[test]
    fn test_receive_when_log_file_missing() {
        let dir = TempDir::new().unwrap();
        let mut output = output(&dir);
        assert!(log_file::existing_log_files(output.config()).unwrap().is_empty());

        output.receive("Hello, world!").unwrap();

        let files = log_file::sorted_log_files_by_date(output.config()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].read_text().unwrap(), "Hello, world!\n");
    }

    #[test]
    fn test_receive_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("log0.txt"), "123").unwrap();

        let mut output = output(&dir);
        output.receive("456").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("log0.txt")).unwrap(),
            "123456\n"
        );
        assert_eq!(output.current_size(), 7);
    }

    #[test]
    fn test_receive_appends_in_call_order() {
        let dir = TempDir::new().unwrap();
        let mut output = output(&dir);

        output.receive("111").unwrap();
        output.receive("222").unwrap();
        output.receive("333").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("log0.txt")).unwrap(),
            "111\n222\n333\n"
        );
    }

    #[test]
    fn test_counts_utf8_bytes() {
        let dir = TempDir::new().unwrap();
        let mut output = output(&dir);

        output.receive("héllo").unwrap();
        assert_eq!(output.current_size(), 7);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("Log");
        let mut output = FileLogOutput::new(FileLogConfig::new(&nested, 2, 50));

        output.receive("abc").unwrap();
        assert_eq!(output.current_path(), Some(nested.join("log0.txt").as_path()));
        assert_eq!(fs::read_to_string(nested.join("log0.txt")).unwrap(), "abc\n");
    }

    #[test]
    fn test_no_slots_always_fails() {
        let dir = TempDir::new().unwrap();
        let mut output = FileLogOutput::new(FileLogConfig::new(dir.path(), 0, 50));

        for line in ["", "a", "hello"] {
            assert!(matches!(
                output.receive(line),
                Err(Error::NoLogFileAvailable(_))
            ));
        }
    }

    #[test]
    fn test_unwritable_directory_fails() {
        let dir = TempDir::new().unwrap();
        // A regular file where the ring directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut output = FileLogOutput::new(FileLogConfig::new(blocker.join("Log"), 2, 50));

        assert!(output.receive("abc").is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_is_never_replayed() {
        let dir = TempDir::new().unwrap();
        let slot = dir.path().join("log0.txt");
        std::os::unix::fs::symlink("/dev/full", &slot).unwrap();
        let mut output = FileLogOutput::new(FileLogConfig::new(dir.path(), 1, 1000));

        assert!(output.receive("lost").is_err());
        assert!(output.current_path().is_none());

        // Once the slot is writable again only new lines reach it
        fs::remove_file(&slot).unwrap();
        output.receive("third").unwrap();

        assert_eq!(fs::read_to_string(&slot).unwrap(), "third\n");
        assert_eq!(output.current_size(), 6);
    }

    #[test]
    fn test_close_releases_handle() {
        let dir = TempDir::new().unwrap();
        let mut output = output(&dir);

        output.receive("abc").unwrap();
        assert!(output.current_path().is_some());

        output.close().unwrap();
        assert!(output.current_path().is_none());

        // Reopening continues the same slot since it is under capacity
        output.receive("def").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("log0.txt")).unwrap(),
            "abc\ndef\n"
        );
    }
}
