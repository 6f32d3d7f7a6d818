//! Phase 2: Reading Features
//!
//! Each discovered file is located through the artifact manager, parsed with
//! variable substitution and collected. Any failure is fatal for the whole
//! build: it is wrapped with the offending file name and returned before
//! anything is assembled or written. The collected features are sorted by
//! id; equal ids keep their discovery order.

use log::info;

use crate::error::{Error, Result};
use crate::feature::{sort_features, Feature};
use crate::reader::{read_feature_file, SubstituteVariables};
use crate::repository::ArtifactManager;

/// Execute Phase 2: read and sort all features.
pub fn execute(files: &[String], manager: &ArtifactManager) -> Result<Vec<Feature>> {
    let mut features = Vec::with_capacity(files.len());
    for file in files {
        let feature = read_one(file, manager).map_err(|e| Error::FeatureRead {
            file: file.clone(),
            source: Box::new(e),
        })?;
        info!("Read feature {} from {}", feature.id, file);
        features.push(feature);
    }
    sort_features(&mut features);
    Ok(features)
}

fn read_one(file: &str, manager: &ArtifactManager) -> Result<Feature> {
    let handler = manager.get_artifact_handler(file)?;
    read_feature_file(&handler.file, &handler.url, SubstituteVariables::Resolve)
}
