//! Operation: find the features a project depends on but has not enabled.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use featgen_core::config::PlatformConfig;
use featgen_core::coordinate::Coordinate;
use featgen_core::units::PublicUnitSet;
use featgen_resolver::membership::{
    declared_feature_names, missing_active_units, visible_declared_units,
};

/// Outcome of comparing a project's declared features to its active ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingFeatures {
    /// Features declared as direct dependencies.
    pub declared: BTreeSet<String>,
    /// Declared features the platform does not expose publicly.
    pub hidden: BTreeSet<String>,
    /// Visible declared features that still need enabling.
    pub missing: BTreeSet<String>,
}

impl MissingFeatures {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for MissingFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing.is_empty() {
            write!(f, "All {} declared features are enabled", self.declared.len())?;
        } else {
            let missing: Vec<&str> = self.missing.iter().map(String::as_str).collect();
            write!(f, "Missing features: {}", missing.join(", "))?;
        }
        if !self.hidden.is_empty() {
            let hidden: Vec<&str> = self.hidden.iter().map(String::as_str).collect();
            write!(f, " (not public: {})", hidden.join(", "))?;
        }
        Ok(())
    }
}

/// Declared feature dependencies of a project that are public but not among
/// the `active` features of its runtime configuration.
///
/// `active` is compared case-insensitively.
pub fn missing_features(
    project_deps: &[Coordinate],
    visible: &PublicUnitSet,
    active: &BTreeSet<String>,
    config: &PlatformConfig,
) -> MissingFeatures {
    let declared = declared_feature_names(project_deps, &config.feature_group);
    let public = visible_declared_units(&declared, visible.names());
    let hidden: BTreeSet<String> = declared.difference(&public).cloned().collect();
    for name in &hidden {
        tracing::warn!("Declared feature {name} is not a public feature, ignoring it");
    }

    let missing = missing_active_units(&public, active);
    let report = MissingFeatures {
        declared,
        hidden,
        missing,
    };
    tracing::info!("{report}");
    report
}
