//! Metadata snapshots of ring slot files and the filesystem primitives around them

use ringlog_core::{Error, FileLogConfig, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Path, modification time and size of one existing file, read at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
    modified: SystemTime,
    size: u64,
}

impl LogFile {
    /// Snapshot the file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound(path))
            }
            Err(_) => return Err(Error::metadata(&path, "Size")),
        };
        let modified = metadata
            .modified()
            .map_err(|_| Error::metadata(&path, "Modification date"))?;

        Ok(Self {
            size: metadata.len(),
            modified,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Size in bytes at the time of the snapshot
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    pub fn read_text(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// State of one ring slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Vacant(PathBuf),
    Occupied(LogFile),
}

impl Slot {
    pub fn path(&self) -> &Path {
        match self {
            Slot::Vacant(path) => path,
            Slot::Occupied(file) => file.path(),
        }
    }
}

/// Every slot of the ring, in index order
pub fn slots(config: &FileLogConfig) -> Result<Vec<Slot>> {
    config
        .log_file_paths()
        .into_iter()
        .map(|path| {
            if path.exists() {
                LogFile::open(path).map(Slot::Occupied)
            } else {
                Ok(Slot::Vacant(path))
            }
        })
        .collect()
}

/// Snapshots of the slots that currently exist, in index order
pub fn existing_log_files(config: &FileLogConfig) -> Result<Vec<LogFile>> {
    config
        .log_file_paths()
        .into_iter()
        .filter(|path| path.exists())
        .map(LogFile::open)
        .collect()
}

/// Slot paths with no file yet, in index order
pub fn vacant_log_file_paths(config: &FileLogConfig) -> Vec<PathBuf> {
    config
        .log_file_paths()
        .into_iter()
        .filter(|path| !path.exists())
        .collect()
}

/// Existing slots ordered oldest first
pub fn sorted_log_files_by_date(config: &FileLogConfig) -> Result<Vec<LogFile>> {
    Ok(sort_by_date(existing_log_files(config)?))
}

/// Stable sort by modification time; equal times keep their index order
pub fn sort_by_date(mut log_files: Vec<LogFile>) -> Vec<LogFile> {
    log_files.sort_by_key(|file| file.modified);
    log_files
}

/// Most recently modified file; the highest index wins a tie
pub fn newest(log_files: &[LogFile]) -> Option<&LogFile> {
    log_files.iter().max_by_key(|file| file.modified)
}

/// Least recently modified file; the lowest index wins a tie
pub fn oldest(log_files: &[LogFile]) -> Option<&LogFile> {
    log_files.iter().min_by_key(|file| file.modified)
}

/// Truncate the slot at `path` to an empty file and snapshot it
pub fn recycle(path: &Path) -> Result<LogFile> {
    remove_file_if_exists(path)?;
    create_empty_file_if_missing(path)?;
    LogFile::open(path)
}

pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

pub fn create_empty_file_if_missing(path: &Path) -> Result<()> {
    if !path.exists() {
        File::create(path)?;
    }
    Ok(())
}
