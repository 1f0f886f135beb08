//! Grader configuration.
//!
//! `GraderConfig` holds the runtime configuration for one rendering/scoring pass. It is an
//! explicit value constructed once and passed into the loader and [`crate::RenderJob`];
//! there is no process-wide singleton, so tests and embedders can point different jobs
//! at different base directories.

use std::env;
use std::path::{Path, PathBuf};

/// Configuration for a single grading pass.
#[derive(Debug, Clone)]
pub struct GraderConfig {
    /// Base directory against which report and log filenames are resolved.
    pub base_dir: PathBuf,
}

impl GraderConfig {
    /// Creates a configuration rooted at the given base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Loads the configuration from `.env` and environment variables.
    ///
    /// `REPORT_BASE_DIR` sets the base directory; it defaults to the current directory.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_dir: env::var("REPORT_BASE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Resolves a filename relative to the configured base directory.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(filename)
    }
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_base_dir() {
        let config = GraderConfig::new("/tmp/reports");
        assert_eq!(
            config.resolve("report.json"),
            PathBuf::from("/tmp/reports/report.json")
        );
    }

    #[test]
    fn test_default_base_dir_is_current_dir() {
        let config = GraderConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("."));
    }
}
