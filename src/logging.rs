//! Leveled logging with key/value context.
//!
//! `Logger` is an explicitly constructed value threaded through constructors
//! rather than a process-wide singleton. Emission goes through `tracing`; the
//! binary decides where tracing output lands (stderr, stdout, or a file).

use std::str::FromStr;
use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

/// Logging level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug = 0,
    /// Routine operational messages (default).
    #[default]
    Info = 1,
    /// Something unexpected but recoverable.
    Warn = 2,
    /// A failed operation.
    Error = 3,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Atomic minimum-level filter shared between logger clones.
pub struct LogLevelFilter(AtomicU8);

impl LogLevelFilter {
    /// Create a filter with the given minimum level.
    pub fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    /// Current minimum level.
    pub fn get(&self) -> LogLevel {
        match self.0.load(Ordering::Relaxed) {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Set the minimum level.
    pub fn set(&self, level: LogLevel) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a message at `level` should be emitted.
    pub fn should_log(&self, level: LogLevel) -> bool {
        level as u8 >= self.0.load(Ordering::Relaxed)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

/// Leveled logger carrying a name and key/value context.
///
/// Context fields accumulate through `with_field` and are appended to every
/// message. Clones share the level filter, so adjusting the level on one
/// logger affects all loggers derived from it.
#[derive(Clone, Default)]
pub struct Logger {
    name: Option<String>,
    fields: Vec<(String, String)>,
    filter: Arc<LogLevelFilter>,
}

impl Logger {
    /// Create a logger with default settings (info level, no name).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logger name/category.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Share an explicit level filter.
    pub fn with_filter(mut self, filter: Arc<LogLevelFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Derive a logger with an additional context field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Set the minimum level on the shared filter.
    pub fn set_level(&self, level: LogLevel) {
        self.filter.set(level);
    }

    /// The shared level filter.
    pub fn filter(&self) -> &Arc<LogLevelFilter> {
        &self.filter
    }

    /// Emit a message at the given level, honoring the filter.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.filter.should_log(level) {
            return;
        }

        let mut line = String::from(message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {key}={value}"));
        }

        match (level, &self.name) {
            (LogLevel::Error, Some(name)) => tracing::error!(logger = %name, "{}", line),
            (LogLevel::Error, None) => tracing::error!("{}", line),
            (LogLevel::Warn, Some(name)) => tracing::warn!(logger = %name, "{}", line),
            (LogLevel::Warn, None) => tracing::warn!("{}", line),
            (LogLevel::Info, Some(name)) => tracing::info!(logger = %name, "{}", line),
            (LogLevel::Info, None) => tracing::info!("{}", line),
            (LogLevel::Debug, Some(name)) => tracing::debug!(logger = %name, "{}", line),
            (LogLevel::Debug, None) => tracing::debug!("{}", line),
        }
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    /// Log an info message.
    pub fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_round_trip_display() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_level_converts_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_filter_default_is_info() {
        let filter = LogLevelFilter::default();
        assert!(!filter.should_log(LogLevel::Debug));
        assert!(filter.should_log(LogLevel::Info));
        assert!(filter.should_log(LogLevel::Error));
    }

    #[test]
    fn test_filter_set_and_get() {
        let filter = LogLevelFilter::default();
        filter.set(LogLevel::Error);
        assert_eq!(filter.get(), LogLevel::Error);
        assert!(!filter.should_log(LogLevel::Warn));
        assert!(filter.should_log(LogLevel::Error));
    }

    #[test]
    fn test_clones_share_filter() {
        let parent = Logger::new().with_name("parent");
        let child = parent.clone().with_field("request", "abc");
        parent.set_level(LogLevel::Error);
        assert_eq!(child.filter().get(), LogLevel::Error);
    }
}
