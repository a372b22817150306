//! Feature resolution: map a dependency pattern to the public feature that
//! most of its dependency paths lead to.

use featgen_core::config::{ResolveConfig, UnversionedPolicy};
use featgen_core::coordinate::Coordinate;
use featgen_core::lookup::ResolutionResult;
use featgen_core::units::PublicUnitSet;

use crate::aggregate::aggregate_by_base_name;
use crate::ancestor::{resolve_occurrences, trace_path, PathTrace};
use crate::conflict::select;
use crate::graph::{DependencyGraph, DependencyPath};
use crate::pattern::ArtifactPattern;

/// A dependency path together with what walking it found.
#[derive(Debug, Clone)]
pub struct TracedPath<'g> {
    pub path: DependencyPath<'g>,
    pub trace: PathTrace<'g>,
}

/// Resolves dependency patterns against a fixed set of public features.
///
/// Holds no mutable state: one resolver can serve any number of patterns,
/// and each resolution builds its own tally.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    public_units: &'a PublicUnitSet,
    unversioned: UnversionedPolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(public_units: &'a PublicUnitSet, config: &ResolveConfig) -> Self {
        Self::with_policy(public_units, config.unversioned)
    }

    pub fn with_policy(public_units: &'a PublicUnitSet, unversioned: UnversionedPolicy) -> Self {
        Self {
            public_units,
            unversioned,
        }
    }

    /// Resolve the artifacts matching `pattern` across all `graphs`.
    pub fn resolve_pattern(
        &self,
        pattern: &ArtifactPattern,
        graphs: &[DependencyGraph],
    ) -> ResolutionResult {
        self.resolve_matching(pattern.as_str(), graphs, |c| pattern.matches(c))
    }

    /// Resolve the artifacts selected by an arbitrary predicate; `query` names
    /// the predicate in the result.
    pub fn resolve_matching<F>(
        &self,
        query: &str,
        graphs: &[DependencyGraph],
        matches: F,
    ) -> ResolutionResult
    where
        F: Fn(&Coordinate) -> bool,
    {
        tracing::debug!("<<<<<<<<<<<< Finding Dependency Paths for {query} >>>>>>>>>>>");
        let paths: Vec<DependencyPath<'_>> = graphs
            .iter()
            .flat_map(|graph| graph.extract_paths(&matches))
            .collect();
        if paths.is_empty() {
            tracing::debug!("No Paths");
        }

        let tally = resolve_occurrences(&paths, self.public_units);
        let aggregated = aggregate_by_base_name(&tally, self.unversioned);
        let selection = select(&aggregated);

        let mut result = ResolutionResult::unresolved(query);
        result.resolved_unit = selection.resolved_unit;
        if aggregated.len() > 1 {
            result.occurrences = Some(aggregated.to_map());
            result.conflicts = selection.conflicts;
        }
        tracing::info!("{result}");
        result
    }

    /// Every path matching `pattern`, with its nearest public feature and the
    /// public parents that were passed over.
    pub fn trace<'g>(
        &self,
        pattern: &ArtifactPattern,
        graphs: &'g [DependencyGraph],
    ) -> Vec<TracedPath<'g>> {
        graphs
            .iter()
            .flat_map(|graph| graph.extract_paths(|c| pattern.matches(c)))
            .map(|path| {
                let trace = trace_path(&path, self.public_units);
                TracedPath { path, trace }
            })
            .collect()
    }
}

/// Resolve a single inclusion pattern.
///
/// Returns an error only when the pattern cannot be parsed; a pattern that
/// matches nothing yields an unresolved result.
pub fn resolve(
    pattern: &str,
    graphs: &[DependencyGraph],
    public_units: &PublicUnitSet,
    config: &ResolveConfig,
) -> miette::Result<ResolutionResult> {
    let pattern = ArtifactPattern::parse(pattern)?;
    Ok(Resolver::new(public_units, config).resolve_pattern(&pattern, graphs))
}
