//! Fluent builder for `Config` values.

use super::types::Config;
use serde_yaml::Value;

/// Builds `Config` values with chained calls, mostly useful in tests:
///
/// ```
/// use keel::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .debug(true)
///     .log_level("debug")
///     .setting("retries", 3)
///     .build();
/// assert!(config.debug);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set debug mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set verbose output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Set the logging level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Set the operation timeout (duration-formatted string).
    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.config.timeout = timeout.into();
        self
    }

    /// Add an application-specific setting.
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.set(key, value);
        self
    }

    /// Produce the final `Config`.
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_config_default() {
        assert_eq!(ConfigBuilder::new().build(), Config::default());
    }

    #[test]
    fn test_builder_chained_fields() {
        let config = ConfigBuilder::new()
            .debug(true)
            .verbose(true)
            .log_level("error")
            .timeout("5m")
            .build();
        assert!(config.debug);
        assert!(config.verbose);
        assert_eq!(config.log_level, "error");
        assert_eq!(config.timeout, "5m");
    }

    #[test]
    fn test_builder_settings() {
        let config = ConfigBuilder::new()
            .setting("name", "keel")
            .setting("retries", 3)
            .build();
        assert_eq!(config.get("retries").unwrap().as_i64(), Some(3));
        assert_eq!(config.settings.len(), 2);
    }
}
