//! Phase 1: Discovery
//!
//! This is the first phase of an application build. It turns the `-f` and
//! `-d` arguments into the list of feature files to read.
//!
//! ## Process
//!
//! 1.  **Explicit Files**: Every `-f` entry is taken as given, in order. An
//!     entry may be a path or any URL the artifact manager understands.
//!
//! 2.  **Directories**: Each `-d` entry that is a directory is listed
//!     (non-recursively). Hidden entries (names starting with `.`) and
//!     subdirectories are skipped; symlinks to files are kept. Entries are
//!     taken in file-name order and made absolute. Entries that are not
//!     directories are ignored.
//!
//! An empty result is an error: there is nothing to assemble.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::is_hidden;

/// Execute Phase 1: collect the feature files to process.
pub fn execute(files: &[String], dirs: &[PathBuf]) -> Result<Vec<String>> {
    let mut discovered: Vec<String> = files.to_vec();

    for dir in dirs {
        discovered.extend(list_directory(dir)?);
    }

    if discovered.is_empty() {
        return Err(Error::NoFeatures);
    }
    debug!("Discovered {} feature files", discovered.len());
    Ok(discovered)
}

fn list_directory(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        debug!("Skipping {}: not a directory", dir.display());
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        // Follows symlinks; a link to a regular file counts as a file
        if !entry.path().is_file() || is_hidden(entry.path()) {
            continue;
        }
        let absolute = std::path::absolute(entry.path())?;
        found.push(absolute.display().to_string());
    }
    Ok(found)
}
