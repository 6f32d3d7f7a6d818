//! # Application Builder
//!
//! Merges an ordered list of features into a single `Application`.
//!
//! ## Merge Rules
//!
//! Features are merged in the order given. Before a feature is merged, each
//! of its includes is resolved through the `FeatureProvider` and merged
//! first (depth-first), so including features override what they include.
//!
//! - **Features**: the id of every merged feature is recorded once.
//! - **Bundles**: an incoming bundle replaces any bundle with the same
//!   coordinates, unless the existing one has a higher version.
//! - **Framework properties**: later values win.
//! - **Configurations**: properties are merged per PID, later values win.
//!
//! An include the provider cannot supply is logged and skipped. An include
//! cycle is an error.

use log::{debug, warn};

use crate::application::Application;
use crate::artifact::ArtifactId;
use crate::error::{Error, Result};
use crate::feature::Feature;

/// Outcome of asking a provider for a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvidedFeature {
    Found(Feature),
    NotFound,
}

/// Supplies features that are referenced by coordinate only.
pub trait FeatureProvider {
    fn provide(&self, id: &ArtifactId) -> ProvidedFeature;
}

impl<F> FeatureProvider for F
where
    F: Fn(&ArtifactId) -> ProvidedFeature,
{
    fn provide(&self, id: &ArtifactId) -> ProvidedFeature {
        self(id)
    }
}

/// Context shared by one assembly run.
pub struct BuilderContext<'a> {
    provider: &'a dyn FeatureProvider,
}

impl<'a> BuilderContext<'a> {
    pub fn new(provider: &'a dyn FeatureProvider) -> Self {
        Self { provider }
    }
}

/// Merge `features` into `app`, or into a new application when `app` is
/// `None`.
pub fn assemble(
    app: Option<Application>,
    context: &BuilderContext<'_>,
    features: &[Feature],
) -> Result<Application> {
    let mut app = app.unwrap_or_default();
    for feature in features {
        let mut chain = Vec::new();
        merge_with_includes(&mut app, context, feature, &mut chain)?;
    }
    Ok(app)
}

fn merge_with_includes(
    app: &mut Application,
    context: &BuilderContext<'_>,
    feature: &Feature,
    chain: &mut Vec<ArtifactId>,
) -> Result<()> {
    if chain.contains(&feature.id) {
        let mut cycle: Vec<String> = chain.iter().map(ToString::to_string).collect();
        cycle.push(feature.id.to_string());
        return Err(Error::IncludeCycle {
            cycle: cycle.join(" -> "),
        });
    }
    chain.push(feature.id.clone());

    for include in &feature.includes {
        if chain.contains(&include.id) {
            let mut cycle: Vec<String> = chain.iter().map(ToString::to_string).collect();
            cycle.push(include.id.to_string());
            return Err(Error::IncludeCycle {
                cycle: cycle.join(" -> "),
            });
        }
        if app.features.contains(&include.id) {
            debug!("Included feature {} already merged", include.id);
            continue;
        }
        match context.provider.provide(&include.id) {
            ProvidedFeature::Found(included) => {
                merge_with_includes(app, context, &included, chain)?;
            }
            ProvidedFeature::NotFound => {
                warn!(
                    "Included feature {} of {} not found, skipping",
                    include.id, feature.id
                );
            }
        }
    }

    merge_feature(app, feature);
    chain.pop();
    Ok(())
}

fn merge_feature(app: &mut Application, feature: &Feature) {
    debug!("Merging feature {}", feature.id);
    if !app.features.contains(&feature.id) {
        app.features.push(feature.id.clone());
    }

    for bundle in &feature.bundles {
        if let Some(existing) = app.bundles.get_same(&bundle.id) {
            if existing.id.osgi_version() > bundle.id.osgi_version() {
                debug!(
                    "Keeping {} over lower version {} from {}",
                    existing.id, bundle.id, feature.id
                );
                continue;
            }
        }
        app.bundles.remove_same(&bundle.id);
        app.bundles.add(bundle.clone());
    }

    for (key, value) in &feature.framework_properties {
        app.framework_properties.insert(key.clone(), value.clone());
    }

    for (pid, properties) in &feature.configurations {
        let target = app.configurations.entry(pid.clone()).or_default();
        for (key, value) in properties {
            target.insert(key.clone(), value.clone());
        }
    }
}
