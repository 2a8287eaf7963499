//! The log record passed to sinks

use crate::Level;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// A single log record.
///
/// The timestamp is captured when the record is constructed, so every sink
/// renders the same instant regardless of dispatch order.
#[derive(Debug, Clone)]
pub struct Record {
    /// When the record was created
    pub timestamp: DateTime<Utc>,
    /// Severity of the record
    pub level: Level,
    /// The message text
    pub message: Cow<'static, str>,
}

impl Record {
    /// Create a record stamped with the current time.
    pub fn new(level: Level, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}
