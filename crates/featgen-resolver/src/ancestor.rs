//! Nearest public ancestor: for each dependency path, the public feature
//! closest to the matched artifact.

use featgen_core::coordinate::Coordinate;
use featgen_core::units::PublicUnitSet;

use crate::graph::DependencyPath;
use crate::tally::OccurrenceTally;

/// What walking one path from the matched node toward the root found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTrace<'g> {
    /// The first public feature met walking up from the matched node.
    pub nearest: Option<&'g Coordinate>,
    /// Public features further toward the root, nearest first. Never counted.
    pub ignored_parents: Vec<&'g Coordinate>,
}

/// Walk `path` from its last node toward its root, classifying public features.
pub fn trace_path<'g>(path: &DependencyPath<'g>, public_units: &PublicUnitSet) -> PathTrace<'g> {
    let mut trace = PathTrace::default();
    for node in path.nodes().iter().rev().copied() {
        tracing::debug!("{node}");
        if !public_units.contains(&node.name) {
            continue;
        }
        if trace.nearest.is_none() {
            tracing::debug!("- Found public feature {}", node.name);
            trace.nearest = Some(node);
        } else {
            tracing::debug!("- Ignoring parent {}", node.name);
            trace.ignored_parents.push(node);
        }
    }
    trace
}

/// Count, per public feature name, the paths whose nearest public ancestor it is.
///
/// Each path contributes at most one occurrence; paths without any public
/// feature contribute nothing.
pub fn resolve_occurrences(
    paths: &[DependencyPath<'_>],
    public_units: &PublicUnitSet,
) -> OccurrenceTally {
    let mut tally = OccurrenceTally::new();
    for (i, path) in paths.iter().enumerate() {
        tracing::debug!("<<< Path {} >>>", i + 1);
        if let Some(nearest) = trace_path(path, public_units).nearest {
            tally.increment(&nearest.name);
        }
    }
    tally
}
