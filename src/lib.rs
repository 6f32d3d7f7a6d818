//! # Feature Application Builder Library
//!
//! This library assembles OSGi feature descriptors into a single application
//! descriptor. It is designed to be used by the `applicationbuilder`
//! command-line tool but can also be embedded wherever features need to be
//! merged programmatically.
//!
//! ## Quick Example
//!
//! ```
//! use feature_appbuilder::builder::{assemble, BuilderContext, ProvidedFeature};
//! use feature_appbuilder::artifact::ArtifactId;
//! use feature_appbuilder::reader::{read_feature_str, SubstituteVariables};
//!
//! let feature = read_feature_str(
//!     r#"{"id": "org.example:app:1.0.0", "bundles": ["org.example:core:1.0.0"]}"#,
//!     "app.json",
//!     SubstituteVariables::Resolve,
//! )
//! .unwrap();
//!
//! let provider = |_: &ArtifactId| ProvidedFeature::NotFound;
//! let app = assemble(None, &BuilderContext::new(&provider), &[feature]).unwrap();
//! assert_eq!(app.bundles.len(), 1);
//! ```
//!
//! ## Core Concepts
//!
//! - **Model (`artifact`, `feature`, `application`, `version`)**: Maven
//!   coordinates, feature descriptors and the assembled application.
//! - **Reader (`reader`)**: Parses feature JSON with `${variable}`
//!   substitution.
//! - **Builder (`builder`)**: Merges features, resolving includes through a
//!   `FeatureProvider`.
//! - **Artifact Manager (`repository`, `cache`)**: Resolves paths, URLs and
//!   `mvn:` coordinates to local files, downloading and caching remote ones.
//! - **Phases (`phases`)**: The build pipeline, from discovering input files
//!   to writing the application descriptor.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator`, which executes the
//! following high-level steps:
//!
//! 1.  **Discovery**: Collect explicit feature files and visible files from
//!     feature directories.
//! 2.  **Reading**: Parse every feature and sort them by id.
//! 3.  **Assembly**: Merge the features into an application.
//! 4.  **Launchpad**: Add the launchpad API bundle, default framework
//!     properties and the Felix framework.
//! 5.  **Writing**: Write the application descriptor as JSON.

pub mod application;
pub mod artifact;
pub mod builder;
pub mod cache;
pub mod config;
pub mod defaults;
pub mod error;
pub mod feature;
pub mod path;
pub mod phases;
pub mod reader;
pub mod repository;
pub mod version;

#[cfg(test)]
mod version_proptest;
