use std::fmt;

use featgen_util::errors::FeatgenError;
use serde::{Deserialize, Serialize};

/// Maven coordinates identifying an artifact: `group:name:version`.
///
/// Equality, hashing and ordering are structural over all three fields, so two
/// coordinates denote the same artifact iff group, name and version all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse `"group:name:version"` into coordinates.
    ///
    /// Anything other than exactly three non-empty colon-separated tokens is
    /// rejected with an error naming the offending string.
    pub fn parse(s: &str) -> Result<Self, FeatgenError> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, name, version] if parts.iter().all(|p| !p.is_empty()) => {
                Ok(Self::new(*group, *name, *version))
            }
            _ => Err(FeatgenError::MalformedCoordinate {
                coordinates: s.to_string(),
            }),
        }
    }

    /// Inclusion pattern selecting exactly this artifact, with any extension:
    /// `group:name::version`.
    pub fn inclusion_pattern(&self) -> String {
        format!("{}:{}::{}", self.group, self.name, self.version)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
