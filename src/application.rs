//! The assembled application descriptor
//!
//! An `Application` is what remains after every feature has been merged:
//! the list of contributing features, the OSGi framework to launch, and the
//! combined bundles, framework properties and configurations. Its JSON form
//! is the tool's only durable output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::artifact::{ArtifactId, Artifacts};
use crate::feature::ConfigurationProperties;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Application {
    /// Ids of the merged features, in merge order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<ArtifactId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<ArtifactId>,

    #[serde(default)]
    pub bundles: Artifacts,

    #[serde(default)]
    pub framework_properties: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configurations: BTreeMap<String, ConfigurationProperties>,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }
}
