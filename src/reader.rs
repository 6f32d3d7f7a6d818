//! # Feature Reader
//!
//! Parses feature descriptors from JSON. Before the document is mapped onto
//! the `Feature` type, `${name}` placeholders in string values can be
//! replaced with the values declared in the feature's own `variables`
//! section.
//!
//! ## Substitution Rules
//!
//! - Only string values are rewritten; object keys are left untouched.
//! - The `variables` section itself is never substituted.
//! - A placeholder naming an undeclared variable is an error.
//! - Replacement is single-pass: a value that itself contains `${...}` is
//!   inserted verbatim.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::feature::Feature;

const VARIABLES_KEY: &str = "variables";

/// Whether `${name}` placeholders are resolved while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstituteVariables {
    /// Leave placeholders as they are.
    None,
    /// Replace placeholders with the declared variable values.
    Resolve,
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder regex"))
}

/// Read a feature from any reader.
pub fn read_feature<R: Read>(
    reader: R,
    location: &str,
    substitute: SubstituteVariables,
) -> Result<Feature> {
    let value: JsonValue = serde_json::from_reader(reader).map_err(|e| Error::FeatureParse {
        location: location.to_string(),
        message: e.to_string(),
    })?;
    read_feature_value(value, location, substitute)
}

/// Read a feature from a JSON string.
pub fn read_feature_str(
    json: &str,
    location: &str,
    substitute: SubstituteVariables,
) -> Result<Feature> {
    read_feature(json.as_bytes(), location, substitute)
}

/// Read a feature from a file on disk, recording `location` as its source.
///
/// The file handle is closed before this function returns.
pub fn read_feature_file(
    path: &Path,
    location: &str,
    substitute: SubstituteVariables,
) -> Result<Feature> {
    let file = fs::File::open(path)?;
    read_feature(std::io::BufReader::new(file), location, substitute)
}

fn read_feature_value(
    mut value: JsonValue,
    location: &str,
    substitute: SubstituteVariables,
) -> Result<Feature> {
    let object = value.as_object_mut().ok_or_else(|| Error::FeatureParse {
        location: location.to_string(),
        message: "feature must be a JSON object".to_string(),
    })?;

    if substitute == SubstituteVariables::Resolve {
        let variables = collect_variables(object.get(VARIABLES_KEY), location)?;
        for (key, entry) in object.iter_mut() {
            if key != VARIABLES_KEY {
                substitute_value(entry, &variables, location)?;
            }
        }
    }

    let mut feature: Feature = serde_json::from_value(value).map_err(|e| Error::FeatureParse {
        location: location.to_string(),
        message: e.to_string(),
    })?;
    feature.location = location.to_string();
    Ok(feature)
}

fn collect_variables(
    section: Option<&JsonValue>,
    location: &str,
) -> Result<BTreeMap<String, String>> {
    let mut variables = BTreeMap::new();
    let Some(section) = section else {
        return Ok(variables);
    };
    let object = section.as_object().ok_or_else(|| Error::FeatureParse {
        location: location.to_string(),
        message: "'variables' must be an object".to_string(),
    })?;
    for (name, value) in object {
        let value = match value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            _ => {
                return Err(Error::FeatureParse {
                    location: location.to_string(),
                    message: format!("variable '{}' must be a scalar", name),
                })
            }
        };
        variables.insert(name.clone(), value);
    }
    Ok(variables)
}

fn substitute_value(
    value: &mut JsonValue,
    variables: &BTreeMap<String, String>,
    location: &str,
) -> Result<()> {
    match value {
        JsonValue::String(text) => {
            if text.contains("${") {
                *text = substitute_text(text, variables, location)?;
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                substitute_value(item, variables, location)?;
            }
        }
        JsonValue::Object(map) => {
            for (_, entry) in map.iter_mut() {
                substitute_value(entry, variables, location)?;
            }
        }
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {}
    }
    Ok(())
}

/// Replace every `${name}` in `text` with its value from `variables`.
pub fn substitute_text(
    text: &str,
    variables: &BTreeMap<String, String>,
    location: &str,
) -> Result<String> {
    let mut missing = None;
    let result = placeholder_regex().replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[1];
        match variables.get(name) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(Error::UndefinedVariable {
            name,
            location: location.to_string(),
        }),
        None => Ok(result.into_owned()),
    }
}
