//! Feature lookup-table entries produced by feature resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The resolution of one dependency pattern to a public feature.
///
/// `occurrences` is only populated when more than one distinct feature was
/// observed, and `conflicts` only when two or more features tie at the highest
/// occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    #[serde(rename = "javaPackageNames", default, skip_serializing_if = "Option::is_none")]
    pub package_names: Option<BTreeSet<String>>,
    #[serde(rename = "mavenDependency")]
    pub query_pattern: String,
    #[serde(rename = "featureName")]
    pub resolved_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<BTreeMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<String>>,
}

impl ResolutionResult {
    /// A result for `pattern` with no resolved feature.
    pub fn unresolved(pattern: impl Into<String>) -> Self {
        Self {
            query_pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_unit.is_some()
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts.as_ref().is_some_and(|c| c.len() > 1)
    }

    /// Attach the Java package names contained in the matched artifact.
    pub fn with_package_names(mut self, package_names: BTreeSet<String>) -> Self {
        self.package_names = Some(package_names);
        self
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dependency [{}] -> Feature [{}]",
            self.query_pattern,
            self.resolved_unit.as_deref().unwrap_or("none")
        )?;
        if let Some(ref occurrences) = self.occurrences {
            let rendered: Vec<String> = occurrences
                .iter()
                .map(|(feature, count)| format!("{feature}={count}"))
                .collect();
            write!(f, ".  Occurrences: {{{}}}", rendered.join(", "))?;
        }
        if let Some(ref conflicts) = self.conflicts {
            write!(f, ".  Conflicts: [{}]", conflicts.join(", "))?;
        }
        Ok(())
    }
}

/// All resolved entries, in the order their dependencies were examined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    pub entries: Vec<ResolutionResult>,
}

impl LookupTable {
    pub fn new(entries: Vec<ResolutionResult>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for which a feature was found.
    pub fn resolved(&self) -> impl Iterator<Item = &ResolutionResult> {
        self.entries.iter().filter(|e| e.is_resolved())
    }

    /// Entries whose highest occurrence count was shared by several features.
    pub fn conflicting(&self) -> impl Iterator<Item = &ResolutionResult> {
        self.entries.iter().filter(|e| e.has_conflicts())
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
