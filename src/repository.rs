//! # Artifact Manager
//!
//! This module provides the `ArtifactManager`, which turns an artifact URL
//! into a local file. It is used both to locate the feature files given on
//! the command line and to resolve features that are included by coordinate.
//!
//! ## Supported URLs
//!
//! - `mvn:group/artifact/version[/type[/classifier]]`: looked up in each
//!   configured repository in order. `file:` repositories are read in place;
//!   `http(s)` repositories are served from the on-disk cache or downloaded
//!   into it.
//! - `file:` URLs and plain filesystem paths: must exist locally.
//! - `http(s)` URLs: downloaded into the cache unless already present.
//!
//! ## Design
//!
//! Remote access goes through the `RemoteFetcher` trait. The default
//! `HttpFetcher` uses a blocking `reqwest` client; tests inject their own
//! implementation to simulate repositories without touching the network.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use url::Url;

use crate::artifact::ArtifactId;
use crate::cache::ArtifactCache;
use crate::defaults::{default_cache_directory, default_repository_urls};
use crate::error::{Error, Result};

/// Fetches the content behind a remote URL.
pub trait RemoteFetcher: Send + Sync {
    /// Returns `Ok(None)` when the remote location reports the resource as
    /// missing, and an error for any other failure.
    fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>>;
}

/// The default `RemoteFetcher`, backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("applicationbuilder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ArtifactManager {
                message: format!("cannot create HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let network = |message: String| Error::Network {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network(e.to_string()))?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(network(format!("HTTP status {}", status)));
        }
        let bytes = response.bytes().map_err(|e| network(e.to_string()))?;
        Ok(Some(bytes.to_vec()))
    }
}

/// Settings used to construct an `ArtifactManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactManagerConfig {
    /// Repository URLs, searched in order for `mvn:` artifacts.
    pub repository_urls: Vec<String>,
    /// Where remote artifacts are cached. `None` selects the platform cache
    /// directory.
    pub cache_directory: Option<PathBuf>,
}

impl Default for ArtifactManagerConfig {
    fn default() -> Self {
        Self {
            repository_urls: default_repository_urls(),
            cache_directory: None,
        }
    }
}

/// A resolved artifact: where it came from and where it lives locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandler {
    pub url: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repository {
    Local(PathBuf),
    Remote(String),
}

impl Repository {
    fn parse(value: &str) -> Result<Self> {
        match Url::parse(value) {
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|_| Error::ArtifactManager {
                    message: format!("invalid file repository URL '{}'", value),
                })?;
                Ok(Repository::Local(path))
            }
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                Ok(Repository::Remote(value.trim_end_matches('/').to_string()))
            }
            // Single-letter schemes are Windows drive letters
            Ok(url) if url.scheme().len() > 1 => Err(Error::ArtifactManager {
                message: format!(
                    "unsupported repository URL scheme '{}' in '{}'",
                    url.scheme(),
                    value
                ),
            }),
            _ => Ok(Repository::Local(PathBuf::from(value))),
        }
    }
}

/// Resolves artifact URLs to local files.
pub struct ArtifactManager {
    repositories: Vec<Repository>,
    cache: ArtifactCache,
    fetcher: Box<dyn RemoteFetcher>,
}

impl std::fmt::Debug for ArtifactManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactManager")
            .field("repositories", &self.repositories)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl ArtifactManager {
    /// Creates an `ArtifactManager` that uses HTTP for remote repositories.
    pub fn new(config: &ArtifactManagerConfig) -> Result<Self> {
        Self::with_fetcher(config, Box::new(HttpFetcher::new()?))
    }

    /// Creates an `ArtifactManager` with a custom `RemoteFetcher`.
    pub fn with_fetcher(
        config: &ArtifactManagerConfig,
        fetcher: Box<dyn RemoteFetcher>,
    ) -> Result<Self> {
        let repositories = config
            .repository_urls
            .iter()
            .map(|url| Repository::parse(url))
            .collect::<Result<Vec<_>>>()?;
        let cache_root = config
            .cache_directory
            .clone()
            .unwrap_or_else(default_cache_directory);
        let cache = ArtifactCache::new(cache_root)?;

        debug!(
            "Artifact manager using {} repositories, cache at {}",
            repositories.len(),
            cache.root().display()
        );
        Ok(Self {
            repositories,
            cache,
            fetcher,
        })
    }

    /// Resolve `url` to a local file.
    pub fn get_artifact_handler(&self, url: &str) -> Result<ArtifactHandler> {
        if url.starts_with("mvn:") {
            let id = ArtifactId::parse(url)?;
            return self.resolve_maven(&id);
        }

        match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|_| Error::ArtifactNotFound {
                        url: url.to_string(),
                    })?;
                local_handler(url, &path)
            }
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {
                self.download(url)
            }
            _ => {
                let path = Path::new(url);
                let canonical = fs::canonicalize(path).map_err(|_| Error::ArtifactNotFound {
                    url: url.to_string(),
                })?;
                local_handler(&canonical.display().to_string(), &canonical)
            }
        }
    }

    fn resolve_maven(&self, id: &ArtifactId) -> Result<ArtifactHandler> {
        let relative = id.to_mvn_path();

        for repository in &self.repositories {
            match repository {
                Repository::Local(root) => {
                    let candidate = root.join(&relative);
                    if candidate.is_file() {
                        debug!("Found {} in {}", id, root.display());
                        let url = Url::from_file_path(&candidate)
                            .map(|u| u.to_string())
                            .unwrap_or_else(|_| candidate.display().to_string());
                        return Ok(ArtifactHandler {
                            url,
                            file: candidate,
                        });
                    }
                }
                Repository::Remote(base) => {
                    let remote_url = format!("{}/{}", base, relative);
                    let cached = self.cache.maven_path(&relative);
                    if let Some(file) = self.cache.get(&cached) {
                        debug!("Using cached {} for {}", file.display(), id);
                        return Ok(ArtifactHandler {
                            url: remote_url,
                            file,
                        });
                    }
                    match self.fetcher.fetch(&remote_url) {
                        Ok(Some(content)) => {
                            debug!("Downloaded {}", remote_url);
                            let file = self.cache.store(&cached, &content)?;
                            return Ok(ArtifactHandler {
                                url: remote_url,
                                file,
                            });
                        }
                        Ok(None) => debug!("{} not found in {}", id, base),
                        Err(e) => warn!("Unable to fetch {}: {}", remote_url, e),
                    }
                }
            }
        }

        Err(Error::ArtifactNotFound {
            url: id.to_mvn_url(),
        })
    }

    fn download(&self, url: &str) -> Result<ArtifactHandler> {
        let cached = self.cache.download_path(url);
        if let Some(file) = self.cache.get(&cached) {
            return Ok(ArtifactHandler {
                url: url.to_string(),
                file,
            });
        }
        let content = self
            .fetcher
            .fetch(url)?
            .ok_or_else(|| Error::ArtifactNotFound {
                url: url.to_string(),
            })?;
        let file = self.cache.store(&cached, &content)?;
        Ok(ArtifactHandler {
            url: url.to_string(),
            file,
        })
    }
}

fn local_handler(url: &str, path: &Path) -> Result<ArtifactHandler> {
    if !path.is_file() {
        return Err(Error::ArtifactNotFound {
            url: url.to_string(),
        });
    }
    Ok(ArtifactHandler {
        url: url.to_string(),
        file: path.to_path_buf(),
    })
}
