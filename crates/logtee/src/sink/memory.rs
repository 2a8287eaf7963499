//! In-memory sink for tests and embedding

use crate::format::{LogFormatter, PlainTextFormatter};
use crate::{Level, Record, Sink};
use parking_lot::Mutex;
use std::fmt::Write;
use std::sync::Arc;

/// Sink that collects formatted records in memory.
///
/// Clones share the same buffer, so a test can keep one handle for
/// assertions while the logger owns another.
#[derive(Clone)]
pub struct MemorySink {
    threshold: Level,
    formatter: Arc<dyn LogFormatter>,
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    /// Create a memory sink accepting records at or above `threshold`.
    #[must_use]
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold,
            formatter: Arc::new(PlainTextFormatter),
            buffer: Arc::new(Mutex::new(String::new())),
        }
    }

    /// Everything captured so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Whether the captured output contains `text`.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.buffer.lock().contains(text)
    }

    /// Discard captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, record: &Record) {
        let line = self.formatter.format(record);
        let _ = writeln!(self.buffer.lock(), "{line}");
    }

    fn flush(&self) {}
}
