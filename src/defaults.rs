//! Default values for the application builder.
//!
//! This module provides centralized default values used across the
//! pipeline, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

use url::Url;

use crate::artifact::ArtifactId;

/// Output file written when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "application.json";

/// Maven Central, searched after the local Maven repository.
pub const CENTRAL_REPOSITORY_URL: &str = "https://repo.maven.apache.org/maven2";

/// Felix framework version used when `-fv` is not given.
pub const DEFAULT_FELIX_VERSION: &str = "5.6.10";

const FELIX_GROUP_ID: &str = "org.apache.felix";
const FELIX_ARTIFACT_ID: &str = "org.apache.felix.framework";

/// Returns the default cache directory for downloaded artifacts.
///
/// Uses the platform-appropriate cache directory:
/// - Linux: `~/.cache/applicationbuilder` (XDG Base Directory)
/// - macOS: `~/Library/Caches/applicationbuilder`
/// - Windows: `{FOLDERID_LocalAppData}\applicationbuilder`
///
/// Falls back to `.applicationbuilder-cache` in the current directory if the
/// platform cache directory cannot be determined.
///
/// This can be overridden by the `-c` CLI flag or the
/// `APPBUILDER_CACHE_DIR` environment variable.
pub fn default_cache_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".applicationbuilder-cache"))
        .join("applicationbuilder")
}

/// The local Maven repository (when a home directory exists) followed by
/// Maven Central.
pub fn default_repository_urls() -> Vec<String> {
    let mut urls = Vec::new();
    if let Some(home) = dirs::home_dir() {
        let local = home.join(".m2").join("repository");
        if let Ok(url) = Url::from_directory_path(&local) {
            urls.push(url.to_string());
        }
    }
    urls.push(CENTRAL_REPOSITORY_URL.to_string());
    urls
}

/// The Apache Felix framework coordinate, pinned to `version` when given.
pub fn felix_framework_id(version: Option<&str>) -> ArtifactId {
    ArtifactId::new(
        FELIX_GROUP_ID,
        FELIX_ARTIFACT_ID,
        version.unwrap_or(DEFAULT_FELIX_VERSION),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_directory_returns_path() {
        let cache = default_cache_directory();
        assert!(cache.ends_with("applicationbuilder"));
    }

    #[test]
    fn test_default_cache_directory_is_absolute_or_fallback() {
        let cache = default_cache_directory();
        assert!(
            cache.is_absolute() || cache.starts_with(".applicationbuilder-cache"),
            "Expected absolute path or fallback, got: {:?}",
            cache
        );
    }

    #[test]
    fn test_default_repository_urls_end_with_central() {
        let urls = default_repository_urls();
        assert_eq!(urls.last().map(String::as_str), Some(CENTRAL_REPOSITORY_URL));
    }

    #[test]
    fn test_felix_framework_id() {
        assert_eq!(
            felix_framework_id(None).to_string(),
            "org.apache.felix:org.apache.felix.framework:5.6.10"
        );
        assert_eq!(
            felix_framework_id(Some("6.0.1")).to_string(),
            "org.apache.felix:org.apache.felix.framework:6.0.1"
        );
    }
}
