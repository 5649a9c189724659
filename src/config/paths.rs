//! Candidate path resolution for the config file.

use std::path::PathBuf;

/// Application name, used for config file and directory names.
pub const APP_NAME: &str = "keel";

/// Ordered list of candidate config file paths. First existing file wins.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    /// Candidate paths in precedence order.
    pub candidates: Vec<PathBuf>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl SearchPaths {
    /// Build the standard candidate list:
    ///
    /// 1. `./keel.yml`
    /// 2. `./keel.yaml`
    /// 3. `<home>/.config/keel/config.yml`
    /// 4. `<home>/.config/keel/config.yaml`
    ///
    /// When the home directory cannot be determined the home-based candidates
    /// are omitted; that is not an error, just a shorter list.
    pub fn discover() -> Self {
        let mut candidates = vec![
            PathBuf::from(format!("./{APP_NAME}.yml")),
            PathBuf::from(format!("./{APP_NAME}.yaml")),
        ];

        if let Some(home) = dirs::home_dir() {
            let config_dir = home.join(".config").join(APP_NAME);
            candidates.push(config_dir.join("config.yml"));
            candidates.push(config_dir.join("config.yaml"));
        }

        Self { candidates }
    }

    /// Build a search list with explicit candidates (used by tests and by
    /// callers that manage their own locations).
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The first candidate that exists on the filesystem, if any.
    pub fn first_existing(&self) -> Option<&PathBuf> {
        self.candidates.iter().find(|p| p.exists())
    }

    /// Preferred path for writing a new config file when none exists yet:
    /// the first candidate in the list.
    pub fn default_write_target(&self) -> Option<&PathBuf> {
        self.candidates.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_starts_with_cwd_candidates() {
        let paths = SearchPaths::discover();
        assert!(paths.candidates.len() >= 2);
        assert_eq!(paths.candidates[0], PathBuf::from("./keel.yml"));
        assert_eq!(paths.candidates[1], PathBuf::from("./keel.yaml"));
    }

    #[test]
    fn test_first_existing_respects_order() {
        let temp = TempDir::new().unwrap();
        let yml = temp.path().join("keel.yml");
        let yaml = temp.path().join("keel.yaml");
        std::fs::write(&yaml, "debug: true\n").unwrap();

        let paths = SearchPaths::with_candidates(vec![yml.clone(), yaml.clone()]);
        assert_eq!(paths.first_existing(), Some(&yaml));

        std::fs::write(&yml, "debug: false\n").unwrap();
        assert_eq!(paths.first_existing(), Some(&yml));
    }

    #[test]
    fn test_first_existing_none() {
        let temp = TempDir::new().unwrap();
        let paths = SearchPaths::with_candidates(vec![temp.path().join("missing.yml")]);
        assert!(paths.first_existing().is_none());
    }
}
