//! OSGi-style artifact versions
//!
//! Artifact coordinates carry free-form Maven versions (`1.0`, `5.6.10`,
//! `2.1.0-SNAPSHOT`). When two bundles with the same coordinates meet during
//! assembly, they are compared as OSGi versions: three numeric parts and a
//! qualifier. Parsing is lenient and never fails.

use std::fmt;

/// A `major.minor.micro.qualifier` version.
///
/// Field order matters: the derived `Ord` compares numeric parts first and
/// the qualifier last, with an empty qualifier sorting before any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub qualifier: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Convert a Maven version string into an OSGi version.
    ///
    /// Everything after the first `-` becomes the qualifier. Of the
    /// dot-separated base, the leading numeric parts (at most three) fill
    /// major, minor and micro; the first non-numeric part and anything after
    /// it is prepended to the qualifier.
    ///
    /// ```
    /// use feature_appbuilder::version::Version;
    ///
    /// let v = Version::parse_lenient("2.1-SNAPSHOT");
    /// assert_eq!(v.to_string(), "2.1.0.SNAPSHOT");
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();
        let (base, dash_qualifier) = match input.split_once('-') {
            Some((base, rest)) => (base, Some(rest)),
            None => (input, None),
        };

        let mut numbers = [0u64; 3];
        let mut qualifier_parts: Vec<&str> = Vec::new();
        let mut numeric = true;
        for (idx, part) in base.split('.').enumerate() {
            if numeric && idx < 3 {
                if let Ok(n) = part.parse::<u64>() {
                    numbers[idx] = n;
                    continue;
                }
            }
            numeric = false;
            if !part.is_empty() {
                qualifier_parts.push(part);
            }
        }
        if let Some(rest) = dash_qualifier {
            if !rest.is_empty() {
                qualifier_parts.push(rest);
            }
        }

        Self {
            major: numbers[0],
            minor: numbers[1],
            micro: numbers[2],
            qualifier: qualifier_parts.join("."),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}
