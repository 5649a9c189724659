//! Loading and saving config files.
//!
//! `load` deserializes a single file onto the default shape; `load_or_default`
//! walks the candidate list and falls back to defaults only when no candidate
//! exists. Once a candidate is chosen, its failures are real errors: an
//! existing file signals intent to use it, so a parse failure there must not
//! silently fall through to the next candidate or to defaults.

use super::paths::SearchPaths;
use super::types::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Read and parse the config file at `path`.
    ///
    /// Fields absent from the document keep their default values, so a
    /// partial document is valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the first existing candidate in the standard search paths,
    /// or return the default config when none exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from(&SearchPaths::discover())
    }

    /// Load from the first existing candidate in `paths`, or return the
    /// default config when none exists.
    ///
    /// A missing file is never an error. An existing file that fails to read
    /// or parse is: the error propagates rather than falling back.
    pub fn load_or_default_from(paths: &SearchPaths) -> Result<Self, ConfigError> {
        match paths.first_existing() {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serialize to YAML and write to `path`, creating parent directories as
    /// needed. The file is overwritten in place.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_yaml::to_string(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
