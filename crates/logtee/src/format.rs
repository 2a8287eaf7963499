//! Rendering of records into output lines

use crate::Record;

/// Timestamp layout: UTC, millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders a record into a single output line, without the trailing newline.
pub trait LogFormatter: Send + Sync {
    /// Format one record.
    fn format(&self, record: &Record) -> String;
}

/// The default `<timestamp> <LEVEL>: <message>` layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl LogFormatter for PlainTextFormatter {
    fn format(&self, record: &Record) -> String {
        format!(
            "{} {}: {}",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.level,
            record.message
        )
    }
}
