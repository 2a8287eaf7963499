//! Process-wide logging with a rotating file sink, a console sink, and
//! capture of print-style output into the same file
//!
//! Everything hangs off one explicit [`Logger`] object rather than ambient
//! global state:
//! - One-shot configuration: the sink list is populated at most once, no
//!   matter how often `configure` is called
//! - Size-bounded log files rotated into numbered backups
//!   (`app.log`, `app.log.1`, ...)
//! - A [`CaptureWriter`] handle that routes print-style output into the
//!   same file, interleaved with formatted records
//! - Degraded operation instead of failure when the filesystem refuses
//!
//! ```no_run
//! use logtee::{Level, Logger};
//! use std::io::Write;
//!
//! let mut logger = Logger::new();
//! logger.configure("logs/app.log", Level::Info);
//!
//! logger.info("service starting");
//!
//! // Print-style output lands in the same file, rotation-aware.
//! if let Some(mut out) = logger.capture_writer() {
//!     let _ = writeln!(out, "legacy status line");
//! }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod capture;
mod error;
mod format;
mod level;
mod logger;
mod record;
mod sink;

pub mod compat;

pub use capture::CaptureWriter;
pub use error::{Error, Result};
pub use format::{LogFormatter, PlainTextFormatter};
pub use level::Level;
pub use logger::{Logger, ensure_directories};
pub use record::Record;
pub use sink::{
    ConsoleSink, DEFAULT_BACKUP_COUNT, DEFAULT_LOG_PATH, DEFAULT_MAX_BYTES, FileSink,
    FileSinkOptions, MemorySink, Sink,
};
