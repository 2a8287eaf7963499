//! Console sink writing to standard output

use crate::format::{LogFormatter, PlainTextFormatter};
use crate::{Level, Record, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Sink that writes formatted records to standard output.
///
/// Output is locked per record to prevent interleaving between threads, and
/// flushed after every record so messages appear promptly.
pub struct ConsoleSink {
    threshold: Level,
    formatter: Box<dyn LogFormatter>,
    stdout: Mutex<io::Stdout>,
}

impl ConsoleSink {
    /// Create a console sink with the given severity threshold.
    #[must_use]
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold,
            formatter: Box::new(PlainTextFormatter),
            stdout: Mutex::new(io::stdout()),
        }
    }

    /// Replace the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Sink for ConsoleSink {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, record: &Record) {
        let line = self.formatter.format(record);
        let mut stdout = self.stdout.lock();
        let _ = writeln!(stdout, "{line}");
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = self.stdout.lock().flush();
    }
}
