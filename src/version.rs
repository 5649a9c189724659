//! Build version information.

/// Version and build metadata.
///
/// `git_commit` and `build_date` come from `KEEL_GIT_COMMIT` and
/// `KEEL_BUILD_DATE` set at compile time (e.g. by CI); they read "unknown"
/// for plain `cargo build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Crate version.
    pub version: &'static str,
    /// Git commit hash, if known at build time.
    pub git_commit: &'static str,
    /// Build date, if known at build time.
    pub build_date: &'static str,
}

impl VersionInfo {
    /// Version info for the current build.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: option_env!("KEEL_GIT_COMMIT").unwrap_or("unknown"),
            build_date: option_env!("KEEL_BUILD_DATE").unwrap_or("unknown"),
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Version:    {}", self.version)?;
        writeln!(f, "Git Commit: {}", self.git_commit)?;
        write!(f, "Build Date: {}", self.build_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_matches_manifest() {
        assert_eq!(VersionInfo::current().version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_display_has_three_lines() {
        let info = VersionInfo::current();
        assert_eq!(info.to_string().lines().count(), 3);
    }
}
