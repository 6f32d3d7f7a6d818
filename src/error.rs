//! # Error Handling
//!
//! This module defines the centralized error type for the application
//! builder. It uses `thiserror` to describe every failure the pipeline can
//! run into, from command-line validation to writing the final descriptor.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes, each variant carrying the
//!   context (file, URL, coordinate) needed to explain what went wrong.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! Errors are never handled by exiting the process inside the library. They
//! travel up to the binary, which logs them and returns exit code 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for application builder operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command line was syntactically valid but incomplete.
    #[error("{message}")]
    Usage { message: String },

    /// Discovery produced no feature files at all.
    #[error("No feature files found.")]
    NoFeatures,

    /// A string could not be parsed as an artifact coordinate.
    #[error("Invalid artifact id '{value}': {message}")]
    ArtifactId { value: String, message: String },

    /// No configured repository or location provides the artifact.
    #[error("Artifact not found: {url}")]
    ArtifactNotFound { url: String },

    /// The artifact manager could not be set up from its configuration.
    #[error("Unable to create artifact manager: {message}")]
    ArtifactManager { message: String },

    /// A remote fetch failed.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// A feature file could not be located, read or parsed.
    ///
    /// Wraps the underlying cause so the top-level handler can print the
    /// whole chain.
    #[error("Error reading feature: {file}")]
    FeatureRead {
        file: String,
        #[source]
        source: Box<Error>,
    },

    /// A feature document is structurally invalid.
    #[error("Invalid feature {location}: {message}")]
    FeatureParse { location: String, message: String },

    /// A `${name}` placeholder has no matching variable.
    #[error("Undefined variable '{name}' in {location}")]
    UndefinedVariable { name: String, location: String },

    /// A feature includes itself, directly or transitively.
    #[error("Include cycle detected: {cycle}")]
    IncludeCycle { cycle: String },

    /// The application descriptor could not be written.
    #[error("Unable to write application to {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
