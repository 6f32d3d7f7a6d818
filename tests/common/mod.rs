//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and feature snippets to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("features/a.json", features::MINIMAL);
//!     fixture.command().arg("-d").arg("features").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::features;
    pub use super::TestFixture;
}

/// Feature descriptors used across tests.
#[allow(dead_code)]
pub mod features {
    /// A feature with a single bundle.
    pub const MINIMAL: &str = r#"{
  "id": "org.example:minimal:1.0.0",
  "bundles": ["org.example:core:1.0.0"]
}"#;

    /// A feature using variables in a bundle and a framework property.
    pub const WITH_VARIABLES: &str = r#"{
  "id": "org.example:variables:1.0.0",
  "variables": {"scr.version": "2.1.0", "env": "prod"},
  "bundles": ["org.apache.felix:org.apache.felix.scr:${scr.version}"],
  "framework-properties": {"deployment.env": "${env}"}
}"#;

    /// A feature that lists the launchpad API bundle and its own boot
    /// delegation.
    pub const WITH_LAUNCHPAD_AND_BOOT_DELEGATION: &str = r#"{
  "id": "org.example:custom:1.0.0",
  "bundles": [
    {"id": "org.apache.sling:org.apache.sling.launchpad.api:1.2.0", "start-order": "20"}
  ],
  "framework-properties": {"org.osgi.framework.bootdelegation": "custom.*"}
}"#;

    /// A feature referencing an undefined variable.
    pub const UNDEFINED_VARIABLE: &str = r#"{
  "id": "org.example:broken:${missing}"
}"#;

    /// Not a JSON document.
    pub const INVALID_JSON: &str = "{ this is not json";
}

/// A test fixture that provides a temporary directory with a private
/// artifact cache and a local Maven repository.
///
/// Commands created by the fixture run inside the directory and never
/// reach the network: the repository list is the fixture's `repo/`
/// directory and the cache is `cache/`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("repo")
            .create_dir_all()
            .expect("Failed to create repository directory");
        Self { temp_dir }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Publish a feature into the fixture's Maven repository under `id`
    /// (`group:artifact:type:version`).
    pub fn with_published_feature(self, id: &str, content: &str) -> Self {
        let parts: Vec<&str> = id.split(':').collect();
        assert_eq!(parts.len(), 4, "expected group:artifact:type:version");
        let (group, artifact, kind, version) = (parts[0], parts[1], parts[2], parts[3]);
        let relative = format!(
            "repo/{}/{}/{}/{}-{}.{}",
            group.replace('.', "/"),
            artifact,
            version,
            artifact,
            version,
            kind
        );
        self.with_file(&relative, content)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the default output file.
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("application.json")
    }

    /// Read and parse a JSON file relative to the fixture.
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.temp_dir.path().join(path))
            .expect("Failed to read output");
        serde_json::from_str(&content).expect("Output should be valid JSON")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a bare command running in this fixture's directory.
    pub fn bare_command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("applicationbuilder");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("APPBUILDER_REPOSITORY_URLS")
            .env_remove("APPBUILDER_CACHE_DIR");
        cmd
    }

    /// Create a command wired to the fixture's repository and cache.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = self.bare_command();
        cmd.arg("-u")
            .arg(self.path().join("repo"))
            .arg("-c")
            .arg(self.path().join("cache"));
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_repository() {
        let fixture = TestFixture::new();
        assert!(fixture.path().join("repo").is_dir());
    }

    #[test]
    fn test_fixture_publishes_in_maven_layout() {
        let fixture = TestFixture::new().with_published_feature(
            "org.example:base:slingfeature:1.0",
            features::MINIMAL,
        );
        assert!(fixture
            .path()
            .join("repo/org/example/base/1.0/base-1.0.slingfeature")
            .is_file());
    }

    #[test]
    fn test_feature_snippets_are_json() {
        for snippet in [
            features::MINIMAL,
            features::WITH_VARIABLES,
            features::WITH_LAUNCHPAD_AND_BOOT_DELEGATION,
            features::UNDEFINED_VARIABLE,
        ] {
            serde_json::from_str::<serde_json::Value>(snippet).expect("snippet should be JSON");
        }
        assert!(serde_json::from_str::<serde_json::Value>(features::INVALID_JSON).is_err());
    }
}
