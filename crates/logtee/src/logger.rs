//! The logger object: a severity threshold plus an ordered list of sinks

use crate::capture::CaptureWriter;
use crate::error::{Error, Result};
use crate::sink::{ConsoleSink, FileSink, FileSinkOptions, Sink};
use crate::{Level, Record};
use std::borrow::Cow;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::sync::Arc;

/// Process-wide logging state.
///
/// A logger holds a severity threshold and an ordered list of sinks;
/// records pass the logger's threshold first, then each sink's own.
/// Construct and configure it once at the composition root, then share it
/// (typically as `Arc<Logger>`): wiring needs `&mut self`, emission only
/// `&self`.
pub struct Logger {
    level: Level,
    sinks: Vec<Arc<dyn Sink>>,
    capture: Option<CaptureWriter>,
}

impl Logger {
    /// Create an unconfigured logger: threshold `Info`, no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            sinks: Vec::new(),
            capture: None,
        }
    }

    /// Whether any sink is attached.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.sinks.is_empty()
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Current severity threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Set the severity threshold.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Attach a sink. Records are dispatched in attachment order.
    pub fn attach(&mut self, sink: Arc<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Writer handle into the configured log file, when a file sink is
    /// attached.
    #[must_use]
    pub fn capture_writer(&self) -> Option<CaptureWriter> {
        self.capture.clone()
    }

    /// Attach the default sink set: a rotating file sink at `path` plus a
    /// console sink, both filtering at `level`.
    ///
    /// The first call wires the sinks; later calls only update the
    /// threshold, so the sink list is populated at most once per logger.
    /// Failures degrade instead of propagating: a directory that cannot be
    /// created is reported on stderr, and a log file that cannot be opened
    /// leaves a console-only logger that carries the report itself.
    pub fn configure(&mut self, path: impl Into<PathBuf>, level: Level) {
        self.level = level;
        if self.is_configured() {
            return;
        }

        let path = path.into();
        if let Err(err) = ensure_directories(&path) {
            // No sink exists yet to carry the report.
            eprintln!("logtee: {err}");
        }

        let file_failure = match FileSink::open(FileSinkOptions {
            path,
            threshold: level,
            ..FileSinkOptions::default()
        }) {
            Ok(sink) => {
                self.capture = Some(CaptureWriter::new(sink.shared()));
                self.attach(Arc::new(sink));
                None
            }
            Err(err) => Some(err),
        };

        self.attach(Arc::new(ConsoleSink::new(level)));

        if let Some(err) = file_failure {
            self.error(format!("log file unavailable, console only: {err}"));
        }
    }

    /// Attach a rotating file sink described by `options` and hand back a
    /// [`CaptureWriter`] into the same file. No console sink is attached.
    ///
    /// Like [`configure`](Self::configure) this is one-shot: when sinks are
    /// already attached only the threshold changes, and the writer returned
    /// is the one created by the first call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenSink`] when the log file cannot be opened;
    /// with no console sink to fall back to, failing loudly beats dropping
    /// all output. Returns [`Error::AlreadyConfigured`] when sinks were
    /// attached by hand and no capture writer exists to hand back.
    pub fn configure_file_only(&mut self, options: FileSinkOptions) -> Result<CaptureWriter> {
        self.level = options.threshold;
        if self.is_configured() {
            return self.capture.clone().ok_or(Error::AlreadyConfigured);
        }

        if let Err(err) = ensure_directories(&options.path) {
            eprintln!("logtee: {err}");
        }

        let sink = FileSink::open(options)?;
        let writer = CaptureWriter::new(sink.shared());
        self.capture = Some(writer.clone());
        self.attach(Arc::new(sink));
        Ok(writer)
    }

    /// Offer a record to every sink whose threshold it clears.
    pub fn log(&self, level: Level, message: impl Into<Cow<'static, str>>) {
        if level < self.level {
            return;
        }

        let record = Record::new(level, message);
        for sink in &self.sinks {
            if record.level >= sink.threshold() {
                sink.emit(&record);
            }
        }
    }

    /// Log a message at `Debug` severity.
    pub fn debug(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Level::Debug, message);
    }

    /// Log a message at `Info` severity.
    pub fn info(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Level::Info, message);
    }

    /// Log a message at `Warning` severity.
    pub fn warn(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Level::Warning, message);
    }

    /// Log a message at `Error` severity.
    pub fn error(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Level::Error, message);
    }

    /// Flush every sink.
    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Create every missing directory leading to `path`.
///
/// A path ending in a separator names the directory chain itself; anything
/// else is treated as a file path and the chain is its parent. Directories
/// that already exist are not an error, and a bare filename (empty parent)
/// is a no-op.
///
/// # Errors
///
/// Returns [`Error::CreateDirectory`] when the chain cannot be created.
pub fn ensure_directories(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let rendered = path.as_os_str().to_string_lossy();

    let chain: &Path = if rendered.ends_with(MAIN_SEPARATOR) || rendered.ends_with('/') {
        path
    } else {
        match path.parent() {
            Some(parent) => parent,
            None => return Ok(()),
        }
    };

    // create_dir_all treats the empty path (parent of a bare filename) as
    // already done.
    fs::create_dir_all(chain).map_err(|source| Error::CreateDirectory {
        path: chain.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_directories_creates_the_parent_chain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/c/app.log");

        ensure_directories(&path).unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        // Only the chain is created, never the file itself.
        assert!(!path.exists());

        // Existing directories are fine.
        ensure_directories(&path).unwrap();
    }

    #[test]
    fn test_ensure_directories_trailing_separator_names_the_chain_itself() {
        let dir = tempdir().unwrap();
        let path = format!("{}/x/y/", dir.path().display());

        ensure_directories(&path).unwrap();

        assert!(dir.path().join("x/y").is_dir());
    }

    #[test]
    fn test_ensure_directories_bare_filename_is_a_noop() {
        ensure_directories("app.log").unwrap();
    }

    #[test]
    fn test_ensure_directories_reports_an_unbuildable_chain() {
        let dir = tempdir().unwrap();
        let obstruction = dir.path().join("not_a_dir");
        fs::write(&obstruction, b"plain file").unwrap();

        let err = ensure_directories(obstruction.join("deeper/app.log")).unwrap_err();
        assert!(matches!(err, Error::CreateDirectory { .. }));
    }
}
