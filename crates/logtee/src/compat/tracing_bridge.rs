//! Bridge from `tracing` events

use crate::{Level, Logger};
use std::sync::Arc;
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context};

/// A tracing layer that forwards events into a shared [`Logger`].
///
/// Only events are forwarded; span context is not tracked.
pub struct TracingLayer {
    logger: Arc<Logger>,
}

impl TracingLayer {
    /// Wrap a logger.
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for TracingLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = match *event.metadata().level() {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        };

        if level < self.logger.level() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let message = if visitor.message.is_empty() {
            event.metadata().name().to_string()
        } else {
            visitor.message
        };

        self.logger.log(level, message);
    }
}

/// Extracts the `message` field; other fields append as `key=value` pairs.
///
/// Numeric and boolean fields arrive through `record_debug` via the
/// `Visit` trait's default forwarding.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            use std::fmt::Write;
            let _ = write!(&mut self.message, "{}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            use std::fmt::Write;
            let _ = write!(&mut self.message, "{}={:?}", field.name(), value);
        }
    }
}
