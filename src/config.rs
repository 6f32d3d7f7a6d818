//! # Build Configuration
//!
//! `BuilderConfig` holds everything a build needs to know, as given on the
//! command line. It is constructed once, before any work starts, and passed
//! by reference to every phase; nothing mutates it afterwards.

use std::path::PathBuf;

use crate::defaults::{default_repository_urls, DEFAULT_OUTPUT};
use crate::repository::ArtifactManagerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Where the application descriptor is written.
    pub output: PathBuf,
    /// Feature files (paths or URLs) given explicitly.
    pub files: Vec<String>,
    /// Directories whose visible files are features.
    pub dirs: Vec<PathBuf>,
    /// Repository URLs; empty means the default repositories.
    pub repository_urls: Vec<String>,
    /// Accepted for compatibility. Its content is not read.
    pub properties_file: Option<PathBuf>,
    /// Felix framework version to pin.
    pub framework_version: Option<String>,
    /// Cache directory for downloaded artifacts.
    pub cache_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            files: Vec::new(),
            dirs: Vec::new(),
            repository_urls: Vec::new(),
            properties_file: None,
            framework_version: None,
            cache_dir: None,
            verbose: false,
        }
    }
}

impl BuilderConfig {
    /// Settings for the artifact manager used by this build.
    pub fn artifact_manager_config(&self) -> ArtifactManagerConfig {
        let repository_urls = if self.repository_urls.is_empty() {
            default_repository_urls()
        } else {
            self.repository_urls.clone()
        };
        ArtifactManagerConfig {
            repository_urls,
            cache_directory: self.cache_dir.clone(),
        }
    }
}
