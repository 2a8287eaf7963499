//! Sinks: destinations that receive log records

mod console;
mod file;
mod memory;

pub use console::ConsoleSink;
pub use file::{
    DEFAULT_BACKUP_COUNT, DEFAULT_LOG_PATH, DEFAULT_MAX_BYTES, FileSink, FileSinkOptions,
};
pub use memory::MemorySink;

pub(crate) use file::SharedFile;

use crate::{Level, Record};

/// A destination for log records above a minimum severity.
///
/// Sinks are shared across threads once attached, so implementations
/// serialize access to their destination internally.
pub trait Sink: Send + Sync {
    /// Minimum severity this sink accepts.
    fn threshold(&self) -> Level;

    /// Write one record to the destination.
    ///
    /// Only called with records at or above [`threshold`](Sink::threshold).
    /// Emission is best-effort: a sink that cannot reach its destination
    /// reports on stderr rather than returning an error.
    fn emit(&self, record: &Record);

    /// Flush buffered output through to the destination.
    fn flush(&self);
}
