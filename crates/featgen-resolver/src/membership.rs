//! Which of a project's declared feature dependencies still need enabling.

use std::collections::BTreeSet;

use featgen_core::coordinate::Coordinate;

/// Names of the direct dependencies that are themselves features, i.e. are
/// published under `feature_group`.
pub fn declared_feature_names(
    dependencies: &[Coordinate],
    feature_group: &str,
) -> BTreeSet<String> {
    dependencies
        .iter()
        .filter(|dep| dep.group == feature_group)
        .map(|dep| dep.name.clone())
        .collect()
}

/// Keep only the declared features the platform actually exposes.
pub fn visible_declared_units(
    declared: &BTreeSet<String>,
    visible: &BTreeSet<String>,
) -> BTreeSet<String> {
    declared.intersection(visible).cloned().collect()
}

/// Declared features not yet active in the runtime configuration.
///
/// Names compare case-insensitively; the result keeps the declared spelling.
pub fn missing_active_units(
    declared: &BTreeSet<String>,
    active_lowercased: &BTreeSet<String>,
) -> BTreeSet<String> {
    let active: BTreeSet<String> = active_lowercased.iter().map(|s| s.to_lowercase()).collect();
    declared
        .iter()
        .filter(|name| !active.contains(&name.to_lowercase()))
        .cloned()
        .collect()
}
