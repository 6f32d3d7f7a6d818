//! # Artifact Coordinates
//!
//! Every bundle, feature and framework reference in a descriptor is a Maven
//! coordinate. This module holds the coordinate type (`ArtifactId`), a
//! bundle entry with its metadata (`Artifact`) and the ordered bundle list
//! used by features and applications (`Artifacts`).
//!
//! ## Textual Forms
//!
//! - Colon form, used in JSON descriptors: `group:artifact:version`,
//!   `group:artifact:type:version` or `group:artifact:type:classifier:version`.
//! - Maven URL form, used to fetch artifacts:
//!   `mvn:group/artifact/version[/type[/classifier]]`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::version::Version;

/// Default artifact type when a coordinate does not name one.
pub const DEFAULT_TYPE: &str = "jar";

/// Metadata key holding the bundle start order.
pub const KEY_START_ORDER: &str = "start-order";

/// A Maven artifact coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub r#type: String,
    pub classifier: Option<String>,
}

impl ArtifactId {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            r#type: DEFAULT_TYPE.to_string(),
            classifier: None,
        }
    }

    pub fn with_type(mut self, r#type: &str) -> Self {
        self.r#type = r#type.to_string();
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    /// Parse a coordinate in either colon or Maven URL form.
    ///
    /// ```
    /// use feature_appbuilder::artifact::ArtifactId;
    ///
    /// let id = ArtifactId::parse("mvn:org.apache.sling/org.apache.sling.launchpad.api/1.2.0").unwrap();
    /// assert_eq!(id.to_string(), "org.apache.sling:org.apache.sling.launchpad.api:1.2.0");
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let invalid = |message: &str| Error::ArtifactId {
            value: value.to_string(),
            message: message.to_string(),
        };

        let without_scheme = trimmed.strip_prefix("mvn:").unwrap_or(trimmed);
        let (parts, slash_form): (Vec<&str>, bool) = if without_scheme.contains('/') {
            (without_scheme.split('/').collect(), true)
        } else if trimmed.starts_with("mvn:") {
            return Err(invalid("maven URLs use '/' as separator"));
        } else {
            (without_scheme.split(':').collect(), false)
        };

        if parts.len() < 3 || parts.len() > 5 {
            return Err(invalid("expected 3 to 5 coordinate segments"));
        }
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("coordinate segments must not be empty"));
        }

        let (group_id, artifact_id, version, r#type, classifier) = if slash_form {
            (
                parts[0],
                parts[1],
                parts[2],
                parts.get(3).copied(),
                parts.get(4).copied(),
            )
        } else {
            match parts.len() {
                3 => (parts[0], parts[1], parts[2], None, None),
                4 => (parts[0], parts[1], parts[3], Some(parts[2]), None),
                _ => (parts[0], parts[1], parts[4], Some(parts[2]), Some(parts[3])),
            }
        };

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            r#type: r#type.unwrap_or(DEFAULT_TYPE).to_string(),
            classifier: classifier.map(str::to_string),
        })
    }

    /// The `mvn:` URL used to ask the artifact manager for this artifact.
    pub fn to_mvn_url(&self) -> String {
        let mut url = format!(
            "mvn:{}/{}/{}",
            self.group_id, self.artifact_id, self.version
        );
        match &self.classifier {
            Some(classifier) => {
                url.push_str(&format!("/{}/{}", self.r#type, classifier));
            }
            None if self.r#type != DEFAULT_TYPE => {
                url.push_str(&format!("/{}", self.r#type));
            }
            None => {}
        }
        url
    }

    /// Relative path of this artifact inside a Maven repository layout.
    pub fn to_mvn_path(&self) -> String {
        let mut file_name = format!("{}-{}", self.artifact_id, self.version);
        if let Some(classifier) = &self.classifier {
            file_name.push('-');
            file_name.push_str(classifier);
        }
        format!(
            "{}/{}/{}/{}.{}",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version,
            file_name,
            self.r#type
        )
    }

    /// The version interpreted as an OSGi version.
    pub fn osgi_version(&self) -> Version {
        Version::parse_lenient(&self.version)
    }

    /// Same coordinates, ignoring the version.
    pub fn is_same(&self, other: &ArtifactId) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.r#type == other.r#type
            && self.classifier == other.classifier
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.group_id, self.artifact_id)?;
        match &self.classifier {
            Some(classifier) => write!(f, "{}:{}:", self.r#type, classifier)?,
            None if self.r#type != DEFAULT_TYPE => write!(f, "{}:", self.r#type)?,
            None => {}
        }
        write!(f, "{}", self.version)
    }
}

impl FromStr for ArtifactId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Ord for ArtifactId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| self.osgi_version().cmp(&other.osgi_version()))
            // "1.0" and "1.0.0" are the same OSGi version but distinct ids
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.r#type.cmp(&other.r#type))
            .then_with(|| self.classifier.cmp(&other.classifier))
    }
}

impl PartialOrd for ArtifactId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for ArtifactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArtifactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        ArtifactId::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// A bundle reference plus free-form string metadata such as `start-order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub metadata: BTreeMap<String, String>,
}

impl Artifact {
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            metadata: BTreeMap::new(),
        }
    }

    pub fn start_order(&self) -> Option<&str> {
        self.metadata.get(KEY_START_ORDER).map(String::as_str)
    }
}

impl Serialize for Artifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        if self.metadata.is_empty() {
            return self.id.serialize(serializer);
        }
        let mut map = serializer.serialize_map(Some(self.metadata.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.metadata {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Bundles appear either as a bare id string or as an object with an `id`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactRepr {
    Id(String),
    Object(serde_json::Map<String, JsonValue>),
}

impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        match ArtifactRepr::deserialize(deserializer)? {
            ArtifactRepr::Id(id) => Ok(Artifact::new(
                ArtifactId::parse(&id).map_err(D::Error::custom)?,
            )),
            ArtifactRepr::Object(mut object) => {
                let id = match object.remove("id") {
                    Some(JsonValue::String(id)) => {
                        ArtifactId::parse(&id).map_err(D::Error::custom)?
                    }
                    Some(_) => return Err(D::Error::custom("artifact 'id' must be a string")),
                    None => return Err(D::Error::missing_field("id")),
                };
                let mut metadata = BTreeMap::new();
                for (key, value) in object {
                    let value = match value {
                        JsonValue::String(s) => s,
                        JsonValue::Number(n) => n.to_string(),
                        JsonValue::Bool(b) => b.to_string(),
                        _ => {
                            return Err(D::Error::custom(format!(
                                "metadata '{}' of artifact {} must be a scalar",
                                key, id
                            )))
                        }
                    };
                    metadata.insert(key, value);
                }
                Ok(Artifact { id, metadata })
            }
        }
    }
}

/// An ordered list of bundles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifacts(Vec<Artifact>);

impl Artifacts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an artifact. Duplicates are not filtered here.
    pub fn add(&mut self, artifact: Artifact) {
        self.0.push(artifact);
    }

    /// Find an entry with the same coordinates in any version.
    pub fn get_same(&self, id: &ArtifactId) -> Option<&Artifact> {
        self.0.iter().find(|a| a.id.is_same(id))
    }

    /// Remove every entry with the same coordinates, returning how many went.
    pub fn remove_same(&mut self, id: &ArtifactId) -> usize {
        let before = self.0.len();
        self.0.retain(|a| !a.id.is_same(id));
        before - self.0.len()
    }

    pub fn contains_exact(&self, id: &ArtifactId) -> bool {
        self.0.iter().any(|a| &a.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Artifacts {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
