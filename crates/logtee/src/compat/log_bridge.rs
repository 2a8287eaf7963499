//! Bridge from the `log` facade

use crate::{Level, Logger};
use log::{Log, Metadata, Record as LogRecord};
use std::sync::Arc;

/// Adapter implementing the `log` crate's [`Log`] trait over a shared
/// [`Logger`].
pub struct LogFacade {
    logger: Arc<Logger>,
}

impl LogFacade {
    /// Wrap a logger for installation via [`install_log_facade`].
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl Log for LogFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        map_level(metadata.level()) >= self.logger.level()
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        self.logger
            .log(map_level(record.level()), record.args().to_string());
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Map the facade's five levels onto the four used here; `Trace` folds
/// into `Debug`.
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

/// Route `log` macro call sites through `logger`.
///
/// Install after configuring: the facade snapshots the logger's threshold
/// into `log::set_max_level` so disabled call sites stay cheap.
///
/// # Errors
///
/// Returns [`log::SetLoggerError`] when a global logger is already
/// installed; the slot can be claimed once per process.
pub fn install_log_facade(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    let max_level = match logger.level() {
        // Trace call sites fold into Debug, so let them through.
        Level::Debug => log::LevelFilter::Trace,
        Level::Info => log::LevelFilter::Info,
        Level::Warning => log::LevelFilter::Warn,
        Level::Error => log::LevelFilter::Error,
    };

    // The facade must leak: log::set_logger requires 'static.
    log::set_logger(Box::leak(Box::new(LogFacade::new(logger))))?;
    log::set_max_level(max_level);
    Ok(())
}
