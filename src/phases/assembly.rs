//! Phase 3: Assembly
//!
//! Merges the sorted features into a new application. Included features are
//! fetched by coordinate through `ArtifactFeatureProvider`, which reports any
//! fetch or parse failure as `NotFound` rather than failing the build. After
//! merging, an application without a framework gets the default Felix
//! framework.

use log::debug;

use crate::application::Application;
use crate::artifact::ArtifactId;
use crate::builder::{assemble, BuilderContext, FeatureProvider, ProvidedFeature};
use crate::defaults::felix_framework_id;
use crate::error::Result;
use crate::feature::Feature;
use crate::reader::{read_feature_file, SubstituteVariables};
use crate::repository::ArtifactManager;

/// Resolves included features through an `ArtifactManager`.
pub struct ArtifactFeatureProvider<'a> {
    manager: &'a ArtifactManager,
}

impl<'a> ArtifactFeatureProvider<'a> {
    pub fn new(manager: &'a ArtifactManager) -> Self {
        Self { manager }
    }

    fn fetch(&self, id: &ArtifactId) -> Result<Feature> {
        let handler = self.manager.get_artifact_handler(&id.to_mvn_url())?;
        read_feature_file(&handler.file, &handler.url, SubstituteVariables::Resolve)
    }
}

impl FeatureProvider for ArtifactFeatureProvider<'_> {
    fn provide(&self, id: &ArtifactId) -> ProvidedFeature {
        match self.fetch(id) {
            Ok(feature) => ProvidedFeature::Found(feature),
            Err(e) => {
                debug!("Unable to provide feature {}: {}", id, e);
                ProvidedFeature::NotFound
            }
        }
    }
}

/// Execute Phase 3: assemble the application.
pub fn execute(features: &[Feature], manager: &ArtifactManager) -> Result<Application> {
    let provider = ArtifactFeatureProvider::new(manager);
    let context = BuilderContext::new(&provider);
    let mut app = assemble(None, &context, features)?;

    if app.framework.is_none() {
        app.framework = Some(felix_framework_id(None));
    }
    Ok(app)
}
