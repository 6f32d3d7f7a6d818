//! # Feature Descriptors
//!
//! A feature is a JSON document describing a slice of an OSGi application:
//! the bundles to install, framework properties, OSGi configurations and
//! other features it includes. Features are merged by the `builder` module
//! into an `Application`.
//!
//! ## Example
//!
//! ```json
//! {
//!   "id": "org.example:base:1.0.0",
//!   "variables": { "scr.version": "2.1.0" },
//!   "includes": [ "org.example:logging:slingfeature:1.0.0" ],
//!   "bundles": [
//!     "org.apache.felix:org.apache.felix.scr:${scr.version}",
//!     { "id": "org.example:core:1.0.0", "start-order": "10" }
//!   ],
//!   "framework-properties": { "org.osgi.framework.storage.clean": "onFirstInit" },
//!   "configurations": { "org.example.Service": { "enabled": true } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::artifact::{ArtifactId, Artifacts};

/// Properties of a single OSGi configuration.
pub type ConfigurationProperties = serde_json::Map<String, JsonValue>;

/// A reference to another feature that is merged before the including one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    pub id: ArtifactId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IncludeRepr {
    Id(ArtifactId),
    Object { id: ArtifactId },
}

impl<'de> Deserialize<'de> for Include {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match IncludeRepr::deserialize(deserializer)? {
            IncludeRepr::Id(id) | IncludeRepr::Object { id } => id,
        };
        Ok(Include { id })
    }
}

/// A parsed feature descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Feature {
    pub id: ArtifactId,

    /// Where the descriptor was read from (file path or URL).
    #[serde(skip)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "scalar_map"
    )]
    pub variables: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty", alias = "include")]
    pub includes: Vec<Include>,

    #[serde(default, skip_serializing_if = "Artifacts::is_empty")]
    pub bundles: Artifacts,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "scalar_map"
    )]
    pub framework_properties: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configurations: BTreeMap<String, ConfigurationProperties>,
}

impl Feature {
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            location: String::new(),
            title: None,
            description: None,
            vendor: None,
            license: None,
            variables: BTreeMap::new(),
            includes: Vec::new(),
            bundles: Artifacts::new(),
            framework_properties: BTreeMap::new(),
            configurations: BTreeMap::new(),
        }
    }
}

/// Numbers and booleans are accepted where strings are expected.
fn scalar_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    use serde::de::Error as _;

    BTreeMap::<String, JsonValue>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| match value {
            JsonValue::String(s) => Ok((key, s)),
            JsonValue::Number(n) => Ok((key, n.to_string())),
            JsonValue::Bool(b) => Ok((key, b.to_string())),
            _ => Err(D::Error::custom(format!("value of '{}' must be a scalar", key))),
        })
        .collect()
}

/// Sort features into assembly order: by id, keeping input order for ties.
pub fn sort_features(features: &mut [Feature]) {
    features.sort_by(|a, b| a.id.cmp(&b.id));
}
