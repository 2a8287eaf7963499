//! Severity levels for log records

use std::fmt;

/// Severity of a log record.
///
/// Ordering follows severity, `Debug` lowest, so a threshold check is a
/// plain comparison: a sink with threshold `t` accepts records with
/// `level >= t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Diagnostic detail, below the default threshold
    Debug,
    /// Routine operational messages
    Info,
    /// Something unexpected that did not stop progress
    Warning,
    /// A failure worth acting on
    Error,
}

impl Level {
    /// The token rendered into formatted output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
