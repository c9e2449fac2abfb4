// Logging module - tracing setup and in-memory capture for the TUI
//
// While the TUI owns the terminal, log output must not be written to it (it
// would garble the alternate screen). In that mode a custom layer captures
// events into a bounded in-memory buffer, and the status bar shows the most
// recent entry. Headless commands log to stderr instead. Either mode can add a
// rotating JSON log file.

use crate::config::{LogRotation, LoggingConfig};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, evicting the oldest once full
    pub fn add(&self, entry: LogEntry) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Most recent entry at or above `max_level` in severity
    ///
    /// `LogLevel::Info` returns the latest error, warning or info line.
    pub fn latest(&self, max_level: LogLevel) -> Option<LogEntry> {
        let entries = self.entries.lock().ok()?;
        entries.iter().rev().find(|e| e.level <= max_level).cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from(metadata.level()),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at the subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
        }
    }
}

/// Where console-bound log output goes
pub enum LogTarget {
    /// Capture into a buffer (TUI owns the terminal)
    Buffer(LogBuffer),
    /// Human-readable lines on stderr (headless commands)
    Stderr,
}

/// Install the global tracing subscriber
///
/// Precedence: RUST_LOG env var > configured level. The returned guard keeps
/// the file writer alive and must be held until shutdown.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Option<WorkerGuard> {
    let default_filter = format!("immo={}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (buffer_layer, stderr_layer) = match target {
        LogTarget::Buffer(buffer) => (Some(TuiLogLayer::new(buffer)), None),
        LogTarget::Stderr => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling, non-blocking file writer if file logging is enabled and possible
fn file_writer(
    config: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !config.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        return None;
    }

    let appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_ENTRIES + 10 {
            buffer.add(entry(LogLevel::Info, &format!("line {i}")));
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        assert_eq!(
            buffer.latest(LogLevel::Trace).unwrap().message,
            format!("line {}", MAX_LOG_ENTRIES + 9)
        );
    }

    #[test]
    fn test_latest_respects_severity() {
        let buffer = LogBuffer::new();
        buffer.add(entry(LogLevel::Warn, "search failed"));
        buffer.add(entry(LogLevel::Debug, "GET /properties"));

        assert_eq!(buffer.latest(LogLevel::Info).unwrap().message, "search failed");
        assert_eq!(buffer.latest(LogLevel::Debug).unwrap().message, "GET /properties");
        assert!(buffer.latest(LogLevel::Error).is_none());
    }

    #[test]
    fn test_layer_captures_messages() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("Search #{} failed: {}", 3, "boom");
        });

        let latest = buffer.latest(LogLevel::Trace).unwrap();
        assert_eq!(latest.level, LogLevel::Warn);
        assert_eq!(latest.message, "Search #3 failed: boom");
    }
}
