//! Rotating file sink
//!
//! The active log file is size-bounded: once a write would reach the
//! configured maximum, the file is renamed into a numbered backup chain
//! (`app.log` becomes `app.log.1`, the previous `app.log.1` becomes
//! `app.log.2`, and so on) and writing continues into a fresh file at the
//! original path. Disk usage therefore never exceeds
//! `(backup_count + 1) * max_bytes` plus one in-flight write.

use crate::error::{Error, Result};
use crate::format::{LogFormatter, PlainTextFormatter};
use crate::{Level, Record, Sink};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default maximum size of the active log file before rotation (50 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Default number of rotated backups kept on disk.
pub const DEFAULT_BACKUP_COUNT: usize = 3;

/// Default location of the active log file.
pub const DEFAULT_LOG_PATH: &str = "logs/app.log";

/// Options for opening a [`FileSink`].
#[derive(Debug, Clone)]
pub struct FileSinkOptions {
    /// Path of the active log file
    pub path: PathBuf,
    /// Maximum size of the active file before rotation; `0` disables
    /// rotation entirely
    pub max_bytes: u64,
    /// Number of rotated backups retained as `path.1` through `path.N`;
    /// `0` truncates the active file in place on rollover
    pub backup_count: usize,
    /// Minimum severity the sink accepts
    pub threshold: Level,
}

impl Default for FileSinkOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
            threshold: Level::Info,
        }
    }
}

/// The open log file, shared between the sink and any capture writers.
///
/// Every write and the rotation check run under one mutex, so formatted
/// records and captured bytes interleave in append order and the size
/// accounting stays exact.
#[derive(Debug)]
pub(crate) struct SharedFile {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    active: Mutex<ActiveFile>,
}

#[derive(Debug)]
struct ActiveFile {
    file: BufWriter<File>,
    written: u64,
}

impl SharedFile {
    pub(crate) fn open(path: PathBuf, max_bytes: u64, backup_count: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::OpenSink {
                path: path.clone(),
                source,
            })?;

        // Seed the byte count from disk so the bound holds across reopens.
        let written = file.metadata().map_or(0, |meta| meta.len());

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            active: Mutex::new(ActiveFile {
                file: BufWriter::new(file),
                written,
            }),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append `buf`, rotating first when the write would reach the bound.
    ///
    /// A failed rotation is reported on stderr and the write proceeds into
    /// the current handle: an oversized file is preferable to a dropped
    /// record.
    pub(crate) fn write_all(&self, buf: &[u8]) -> Result<()> {
        let mut active = self.active.lock();

        if self.max_bytes > 0 && active.written + buf.len() as u64 >= self.max_bytes {
            if let Err(err) = self.rotate(&mut active) {
                eprintln!("logtee: {err}");
            }
        }

        active
            .file
            .write_all(buf)
            .map_err(|source| self.write_error(source))?;
        active.written += buf.len() as u64;

        // Flush every write so captured output and records are visible
        // immediately and in order.
        active
            .file
            .flush()
            .map_err(|source| self.write_error(source))
    }

    pub(crate) fn flush(&self) -> Result<()> {
        self.active
            .lock()
            .file
            .flush()
            .map_err(|source| self.write_error(source))
    }

    /// Path of backup generation `n`: `app.log` maps to `app.log.n`.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Rename the active file into the backup chain and start a fresh one.
    fn rotate(&self, active: &mut ActiveFile) -> Result<()> {
        active
            .file
            .flush()
            .map_err(|source| self.rotation_error(source))?;

        if self.backup_count > 0 {
            // Shift existing backups one slot up, oldest first; whatever
            // held the highest slot is renamed over and thereby discarded.
            for n in (1..self.backup_count).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))
                        .map_err(|source| self.rotation_error(source))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))
                .map_err(|source| self.rotation_error(source))?;
        }

        // With backups the rename has cleared the path; without, this
        // truncates the oversized file in place. The old handle stays open
        // until the swap below, so a failure anywhere above leaves writes
        // flowing to the renamed file instead of nowhere.
        let fresh = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| self.rotation_error(source))?;

        active.file = BufWriter::new(fresh);
        active.written = 0;
        Ok(())
    }

    fn rotation_error(&self, source: io::Error) -> Error {
        Error::Rotation {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Drop for SharedFile {
    fn drop(&mut self) {
        let _ = self.active.get_mut().file.flush();
    }
}

/// Sink that appends formatted records to a rotating log file.
pub struct FileSink {
    threshold: Level,
    formatter: Box<dyn LogFormatter>,
    shared: Arc<SharedFile>,
}

impl FileSink {
    /// Open the log file described by `options`, creating it if missing.
    ///
    /// The parent directory chain is expected to exist already; the
    /// `configure` entry points arrange that via
    /// [`ensure_directories`](crate::ensure_directories).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenSink`] when the file cannot be opened for
    /// appending.
    pub fn open(options: FileSinkOptions) -> Result<Self> {
        let shared = SharedFile::open(options.path, options.max_bytes, options.backup_count)?;

        Ok(Self {
            threshold: options.threshold,
            formatter: Box::new(PlainTextFormatter),
            shared: Arc::new(shared),
        })
    }

    /// Replace the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.shared.path()
    }

    pub(crate) fn shared(&self) -> Arc<SharedFile> {
        Arc::clone(&self.shared)
    }
}

impl Sink for FileSink {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, record: &Record) {
        let mut line = self.formatter.format(record);
        line.push('\n');
        if let Err(err) = self.shared.write_all(line.as_bytes()) {
            eprintln!("logtee: {err}");
        }
    }

    fn flush(&self) {
        if let Err(err) = self.shared.flush() {
            eprintln!("logtee: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_backup_paths_append_generation_numbers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let shared = SharedFile::open(path, 0, 3).unwrap();

        assert_eq!(shared.backup_path(1), dir.path().join("app.log.1"));
        assert_eq!(shared.backup_path(3), dir.path().join("app.log.3"));
    }

    #[test]
    fn test_size_bound_disabled_when_max_bytes_is_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let shared = SharedFile::open(path.clone(), 0, 3).unwrap();

        for _ in 0..50 {
            shared.write_all(&[b'x'; 100]).unwrap();
        }

        assert_eq!(fs::metadata(&path).unwrap().len(), 5_000);
        assert!(!dir.path().join("app.log.1").exists());
    }

    #[test]
    fn test_reopen_seeds_the_size_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, vec![b'x'; 90]).unwrap();

        let shared = SharedFile::open(path.clone(), 100, 1).unwrap();
        shared.write_all(&[b'y'; 20]).unwrap();

        // 90 bytes already on disk plus 20 incoming reaches the bound, so
        // the old contents rotate out before the write lands.
        assert_eq!(fs::read(&path).unwrap(), vec![b'y'; 20]);
        assert_eq!(
            fs::read(dir.path().join("app.log.1")).unwrap(),
            vec![b'x'; 90]
        );
    }
}
