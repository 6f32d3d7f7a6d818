//! On-disk cache for artifacts fetched from remote locations
//!
//! Artifacts resolved from remote Maven repositories are stored under the
//! cache root in Maven layout (`org/example/a/1.0/a-1.0.jar`), so a cache
//! directory can be reused across runs. Plain HTTP downloads land under
//! `downloads/` with the URL encoded as the file name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::encode_url_path;

const DOWNLOADS_DIR: &str = "downloads";

#[derive(Debug, Clone)]
pub struct ArtifactCache {
    root: PathBuf,
}

impl ArtifactCache {
    /// Open a cache rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).map_err(|e| Error::ArtifactManager {
            message: format!("cannot create cache directory '{}': {}", root.display(), e),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache location for an artifact given its Maven repository path.
    pub fn maven_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Cache location for an arbitrary downloaded URL.
    pub fn download_path(&self, url: &str) -> PathBuf {
        self.root.join(DOWNLOADS_DIR).join(encode_url_path(url))
    }

    /// Return `path` if it is already present in the cache.
    pub fn get(&self, path: &Path) -> Option<PathBuf> {
        path.is_file().then(|| path.to_path_buf())
    }

    /// Store `content` at `path`.
    ///
    /// The content is written to a sibling temporary file first and renamed
    /// into place, so a failed write never leaves a truncated entry behind.
    pub fn store(&self, path: &Path, content: &[u8]) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut partial = path.as_os_str().to_owned();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        fs::write(&partial, content)?;
        fs::rename(&partial, path)?;
        Ok(path.to_path_buf())
    }
}
