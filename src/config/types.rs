//! Configuration types.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Application configuration, stored as YAML.
///
/// Every field carries a serde default so that a partial document deserializes
/// onto the default shape. The `settings` map is the open-ended extension
/// point: values are arbitrary YAML (scalars, sequences, nested mappings) and
/// keep their type across a save/load round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config file format version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Enable debug mode.
    #[serde(default)]
    pub debug: bool,

    /// Enable verbose output.
    #[serde(default)]
    pub verbose: bool,

    /// Logging level (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Timeout for operations, duration-formatted (e.g. "30s", "5m").
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Application-specific settings.
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

/// Default config file format version.
pub const CONFIG_VERSION: &str = "1";

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> String {
    "30s".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            verbose: false,
            log_level: default_log_level(),
            timeout: default_timeout(),
            settings: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Look up a setting by key. Returns `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Insert or overwrite a setting. Always succeeds; the settings map is
    /// never absent, so no initialization step is observable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.settings.insert(key.into(), value.into());
    }
}
